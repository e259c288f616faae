use std::fmt;
use std::fmt::{Debug, Formatter};

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::CyberSourceConfig;
use crate::models::{ReplyMessage, RequestMessage};
use crate::transport::envelope::{parse_reply, render_envelope};
use crate::transport::errors::TransportFault;
use crate::transport::Transport;

const SOAP_ACTION: &str = "runTransaction";
const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// SOAP 1.1 transport for the `runTransaction` operation over HTTPS.
pub struct SoapTransport {
    client: Client,
    endpoint: Url,
    username: String,
    password: String
}

impl SoapTransport {
    /// Creates a transport from a validated config.
    ///
    /// # Errors
    /// Returns `TransportFault` if the endpoint does not parse or the HTTP client cannot be built.
    pub fn new(config: &CyberSourceConfig) -> Result<Self, TransportFault> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|error| TransportFault::Endpoint(error.to_string()))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint,
            username: config.merchant_id.clone(),
            password: config.api_key.clone()
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[instrument(
        skip(self, request),
        fields(endpoint = %self.endpoint, reference = %request.merchant_reference_code)
    )]
    async fn execute(&self, request: &RequestMessage) -> Result<ReplyMessage, TransportFault> {
        let envelope = render_envelope(&self.username, &self.password, request)?;

        let response = self.client.post(self.endpoint.clone())
            .header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .header("SOAPAction", SOAP_ACTION)
            .body(envelope)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("SOAP endpoint answered with status [{}] and [{}] bytes", status.as_u16(), body.len());

        //NOTE: SOAP faults arrive with a 500 status, so the body is checked before the status
        match parse_reply(&body) {
            Ok(reply) if status.is_success() => Ok(reply),
            Ok(_) => Err(TransportFault::status(status.as_u16(), &body)),
            Err(fault @ TransportFault::Soap { .. }) => {
                warn!("SOAP fault from processor: {fault}");
                Err(fault)
            }
            Err(_) if !status.is_success() => Err(TransportFault::status(status.as_u16(), &body)),
            Err(error) => Err(error)
        }
    }
}

impl Transport for SoapTransport {
    async fn run_transaction<'a>(&'a self, request: &'a RequestMessage) -> Result<ReplyMessage, TransportFault> {
        self.execute(request).await
    }
}

impl Debug for SoapTransport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SoapTransport")
            .field("endpoint", &self.endpoint.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
