mod envelope;
mod errors;
#[cfg(test)]
pub(crate) mod mock;
mod soap;
#[cfg(test)]
mod tests;

use crate::models::{ReplyMessage, RequestMessage};

pub use envelope::{parse_reply, render_envelope, strip_namespaces};
pub use errors::TransportFault;
pub use soap::SoapTransport;

/// Carries one `requestMessage` to the processor and returns its `replyMessage`.
///
/// Implementations own the wire format and authentication. The client treats
/// every failure uniformly as a `TransportFault`.
pub trait Transport: Send + Sync + 'static {
    fn run_transaction<'a>(&'a self, request: &'a RequestMessage) -> impl Future<Output = Result<ReplyMessage, TransportFault>> + Send + 'a;
}
