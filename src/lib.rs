//! Client for the CyberSource SOAP transaction API.
//!
//! Builds `requestMessage` payloads for the six card operations, sends them with
//! a WS-Security signed SOAP call and classifies the processor's reason codes.

pub mod batch;
pub mod builder;
pub mod client;
pub mod config;
pub mod models;
pub mod response;
pub mod transport;
pub mod types;

pub use client::{CyberSource, CyberSourceError};
pub use config::CyberSourceConfig;
pub use models::{AuthExtensions, BillTo, Card, Payment, ServiceRequest, ServiceType, TransactionArgs};
pub use response::{ReasonCategory, TransactionResponse};
