use crate::models::ServiceType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} is not a valid service")]
    UnknownService(String),
    #[error("Service [{service}] requires argument [{argument}]")]
    MissingArgument {
        service: ServiceType,
        argument: &'static str
    }
}

impl ServiceError {
    pub fn unknown_service(name: &str) -> Self {
        Self::UnknownService(name.to_string())
    }

    pub fn missing_argument(service: ServiceType, argument: &'static str) -> Self {
        Self::MissingArgument { service, argument }
    }
}
