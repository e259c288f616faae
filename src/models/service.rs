use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::models::errors::ServiceError;
use crate::models::{AuthExtensions, BillTo, Card, Payment};
use crate::types::RequestId;

/// The six operations the client can run, named as the remote schema names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Auth,
    Capture,
    AuthReversal,
    Credit,
    Sale,
    Void
}

impl ServiceType {
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Auth,
        ServiceType::Capture,
        ServiceType::AuthReversal,
        ServiceType::Credit,
        ServiceType::Sale,
        ServiceType::Void
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Auth => "ccAuthService",
            ServiceType::Capture => "ccCaptureService",
            ServiceType::AuthReversal => "ccAuthReversalService",
            ServiceType::Credit => "ccCreditService",
            ServiceType::Sale => "ccSaleService",
            ServiceType::Void => "ccVoidService"
        }
    }
}

impl Display for ServiceType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = ServiceError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ServiceType::ALL.into_iter()
            .find(|service| service.as_str() == name)
            .ok_or_else(|| ServiceError::unknown_service(name))
    }
}

/// Everything an auth (and therefore a sale) needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationDetails {
    pub payment: Payment,
    pub card: Card,
    pub bill_to: BillTo,
    pub extensions: AuthExtensions
}

/// A fully specified operation, one variant per `ServiceType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRequest {
    Auth(AuthorizationDetails),
    Capture {
        auth_request_id: RequestId,
        payment: Payment
    },
    AuthReversal {
        auth_request_id: RequestId,
        payment: Payment
    },
    Credit {
        capture_request_id: RequestId,
        payment: Payment
    },
    Sale(AuthorizationDetails),
    Void {
        request_id: RequestId
    }
}

impl ServiceRequest {
    pub fn service_type(&self) -> ServiceType {
        match self {
            ServiceRequest::Auth(_) => ServiceType::Auth,
            ServiceRequest::Capture { .. } => ServiceType::Capture,
            ServiceRequest::AuthReversal { .. } => ServiceType::AuthReversal,
            ServiceRequest::Credit { .. } => ServiceType::Credit,
            ServiceRequest::Sale(_) => ServiceType::Sale,
            ServiceRequest::Void { .. } => ServiceType::Void
        }
    }

    /// Assembles a typed request from a flat argument set.
    ///
    /// Arguments the service does not use are ignored.
    ///
    /// # Errors
    /// Returns `ServiceError::MissingArgument` naming the first required group that is absent.
    pub fn from_args(service: ServiceType, args: TransactionArgs) -> Result<Self, ServiceError> {
        let TransactionArgs {
            payment,
            card,
            bill_to,
            auth_request_id,
            capture_request_id,
            request_id,
            extensions
        } = args;

        let request = match service {
            ServiceType::Auth | ServiceType::Sale => {
                let details = AuthorizationDetails {
                    payment: required(service, payment, "payment")?,
                    card: required(service, card, "card")?,
                    bill_to: required(service, bill_to, "billTo")?,
                    extensions
                };

                if service == ServiceType::Auth {
                    ServiceRequest::Auth(details)
                } else {
                    ServiceRequest::Sale(details)
                }
            }
            ServiceType::Capture => ServiceRequest::Capture {
                auth_request_id: required(service, auth_request_id, "authRequestID")?,
                payment: required(service, payment, "payment")?
            },
            ServiceType::AuthReversal => ServiceRequest::AuthReversal {
                auth_request_id: required(service, auth_request_id, "authRequestID")?,
                payment: required(service, payment, "payment")?
            },
            ServiceType::Credit => ServiceRequest::Credit {
                capture_request_id: required(service, capture_request_id, "captureRequestID")?,
                payment: required(service, payment, "payment")?
            },
            ServiceType::Void => ServiceRequest::Void {
                request_id: required(service, request_id, "requestId")?
            }
        };

        Ok(request)
    }
}

/// Flat, all-optional argument set for callers that pick the service at runtime.
#[derive(Debug, Clone, Default)]
pub struct TransactionArgs {
    pub payment: Option<Payment>,
    pub card: Option<Card>,
    pub bill_to: Option<BillTo>,
    pub auth_request_id: Option<RequestId>,
    pub capture_request_id: Option<RequestId>,
    pub request_id: Option<RequestId>,
    pub extensions: AuthExtensions
}

fn required<T>(service: ServiceType, value: Option<T>, argument: &'static str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::missing_argument(service, argument))
}
