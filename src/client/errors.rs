use thiserror::Error;

use crate::config::ConfigError;
use crate::models::ServiceError;
use crate::transport::TransportFault;
use crate::types::AmountError;

/// Every failure a client call can surface. Business declines are not errors.
#[derive(Debug, Error)]
pub enum CyberSourceError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Transport(#[from] TransportFault),
    #[error(transparent)]
    Amount(#[from] AmountError)
}
