mod errors;
mod extensions;
mod payment;
mod reply;
mod request;
mod service;

pub use errors::ServiceError;
pub use extensions::{AuthExtensions, AuthServiceOptions, EncryptedPayment, PaymentNetworkToken, Ucaf};
pub use payment::{BillTo, Card, Payment};
pub use reply::{AuthReply, AuthReversalReply, CaptureReply, CreditReply, Decision, PurchaseTotalsReply, ReplyMessage, VoidReply};
pub use request::{
    AuthReversalServiceNode, AuthServiceNode, BillToNode, CaptureServiceNode, CardNode, CreditServiceNode,
    PurchaseTotalsNode, RequestMessage, VoidServiceNode
};
pub use service::{AuthorizationDetails, ServiceRequest, ServiceType, TransactionArgs};
