use std::collections::VecDeque;
use std::sync::Mutex;

use crate::models::{Decision, ReplyMessage, RequestMessage};
use crate::transport::{Transport, TransportFault};

/// Scripted transport: hands out queued outcomes in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<ReplyMessage, TransportFault>>>,
    requests: Mutex<Vec<RequestMessage>>
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: ReplyMessage) -> Self {
        self.push(Ok(reply));
        self
    }

    pub fn with_fault(self, fault: TransportFault) -> Self {
        self.push(Err(fault));
        self
    }

    pub fn push(&self, outcome: Result<ReplyMessage, TransportFault>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn requests(&self) -> Vec<RequestMessage> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn run_transaction<'a>(&'a self, request: &'a RequestMessage) -> Result<ReplyMessage, TransportFault> {
        self.requests.lock().unwrap().push(request.clone());

        let next = self.outcomes.lock().unwrap().pop_front();

        next.unwrap_or_else(|| {
            let request_id = format!("mock-{}", request.merchant_reference_code);
            Ok(ReplyMessage::new(request_id, Decision::Accept, 100))
        })
    }
}
