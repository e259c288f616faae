use std::fmt::Display;

use thiserror::Error;

const MAX_BODY_IN_ERROR: usize = 512;

/// Any failure while exchanging a message with the processor.
#[derive(Debug, Error)]
pub enum TransportFault {
    #[error("SOAP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("SOAP endpoint returned status [{status}]: {body}")]
    Status {
        status: u16,
        body: String
    },
    #[error("{code}: {message}")]
    Soap {
        code: String,
        message: String
    },
    #[error("Malformed SOAP payload: {0}")]
    Xml(String),
    #[error("Invalid SOAP endpoint: {0}")]
    Endpoint(String)
}

impl TransportFault {
    pub fn xml(error: impl Display) -> Self {
        Self::Xml(error.to_string())
    }

    pub fn status(status: u16, body: &str) -> Self {
        let body = match body.char_indices().nth(MAX_BODY_IN_ERROR) {
            Some((index, _)) => format!("{}...", &body[..index]),
            None => body.to_string()
        };

        Self::Status { status, body }
    }
}
