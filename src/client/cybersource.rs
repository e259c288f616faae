use tracing::{debug, info, warn};

use crate::builder::RequestBuilder;
use crate::client::errors::CyberSourceError;
use crate::config::CyberSourceConfig;
use crate::models::{AuthExtensions, AuthorizationDetails, BillTo, Card, Decision, Payment, ServiceRequest, ServiceType, TransactionArgs};
use crate::response::TransactionResponse;
use crate::transport::{SoapTransport, Transport};

/// Client for the CyberSource `runTransaction` API.
///
/// Each operation performs exactly one round trip. Declines come back as an
/// `Ok(TransactionResponse)`; only local and transport failures are errors.
#[derive(Debug)]
pub struct CyberSource<T: Transport = SoapTransport> {
    config: CyberSourceConfig,
    builder: RequestBuilder,
    transport: T
}

impl CyberSource<SoapTransport> {
    /// Validates the config and connects a SOAP transport to its endpoint.
    ///
    /// # Errors
    /// Returns `CyberSourceError::Config` for an unusable config and
    /// `CyberSourceError::Transport` if the HTTP client cannot be built.
    pub fn new(config: CyberSourceConfig) -> Result<Self, CyberSourceError> {
        config.validate()?;
        let transport = SoapTransport::new(&config)?;

        Ok(Self::assemble(config, transport))
    }
}

impl<T: Transport> CyberSource<T> {
    /// Uses a caller supplied transport. The config is still validated.
    pub fn with_transport(config: CyberSourceConfig, transport: T) -> Result<Self, CyberSourceError> {
        config.validate()?;

        Ok(Self::assemble(config, transport))
    }

    fn assemble(config: CyberSourceConfig, transport: T) -> Self {
        let builder = RequestBuilder::new(config.merchant_id.clone(), config.namespace());

        Self {
            config,
            builder,
            transport
        }
    }

    pub fn config(&self) -> &CyberSourceConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds, sends and wraps a single operation.
    pub async fn run_transaction(&self, reference_code: &str, request: &ServiceRequest) -> Result<TransactionResponse, CyberSourceError> {
        let service = request.service_type();
        info!("Running [{service}] for reference [{reference_code}]");

        let message = self.builder.build(reference_code, request);

        let reply = self.transport.run_transaction(&message).await.map_err(|fault| {
            warn!("Transport failure for [{service}] reference [{reference_code}]: {fault}");
            CyberSourceError::from(fault)
        })?;

        let response = TransactionResponse::new(reply);

        if response.decision() == Decision::Accept {
            debug!("[{service}] reference [{reference_code}] accepted as request [{}]", response.request_id());
        } else {
            warn!(
                "[{service}] reference [{reference_code}] returned [{}] with reason code [{}]",
                response.decision(),
                response.reason_code()
            );
        }

        Ok(response)
    }

    /// Runs a service chosen by its schema name, e.g. `ccAuthService`.
    ///
    /// # Errors
    /// Fails with `CyberSourceError::Service` before anything is built or sent
    /// when the name is unknown or a required argument is missing.
    pub async fn run_named_transaction(&self, name: &str, reference_code: &str, args: TransactionArgs) -> Result<TransactionResponse, CyberSourceError> {
        let service: ServiceType = name.parse()?;
        let request = ServiceRequest::from_args(service, args)?;

        self.run_transaction(reference_code, &request).await
    }

    pub async fn cc_auth(
        &self,
        reference_code: &str,
        payment: Payment,
        card: Card,
        bill_to: BillTo,
        extensions: AuthExtensions
    ) -> Result<TransactionResponse, CyberSourceError> {
        let details = AuthorizationDetails { payment, card, bill_to, extensions };
        self.run_transaction(reference_code, &ServiceRequest::Auth(details)).await
    }

    pub async fn cc_capture(&self, reference_code: &str, auth_request_id: &str, payment: Payment) -> Result<TransactionResponse, CyberSourceError> {
        let request = ServiceRequest::Capture {
            auth_request_id: auth_request_id.to_string(),
            payment
        };

        self.run_transaction(reference_code, &request).await
    }

    pub async fn cc_credit(&self, reference_code: &str, capture_request_id: &str, payment: Payment) -> Result<TransactionResponse, CyberSourceError> {
        let request = ServiceRequest::Credit {
            capture_request_id: capture_request_id.to_string(),
            payment
        };

        self.run_transaction(reference_code, &request).await
    }

    /// Authorization and capture in a single request.
    pub async fn cc_sale(
        &self,
        reference_code: &str,
        payment: Payment,
        card: Card,
        bill_to: BillTo,
        extensions: AuthExtensions
    ) -> Result<TransactionResponse, CyberSourceError> {
        let details = AuthorizationDetails { payment, card, bill_to, extensions };
        self.run_transaction(reference_code, &ServiceRequest::Sale(details)).await
    }

    pub async fn cc_auth_reversal(&self, reference_code: &str, auth_request_id: &str, payment: Payment) -> Result<TransactionResponse, CyberSourceError> {
        let request = ServiceRequest::AuthReversal {
            auth_request_id: auth_request_id.to_string(),
            payment
        };

        self.run_transaction(reference_code, &request).await
    }

    /// Voids a capture or credit that has not been settled yet.
    pub async fn cc_void(&self, reference_code: &str, request_id: &str) -> Result<TransactionResponse, CyberSourceError> {
        let request = ServiceRequest::Void {
            request_id: request_id.to_string()
        };

        self.run_transaction(reference_code, &request).await
    }
}
