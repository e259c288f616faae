use crate::models::{AuthReply, AuthReversalReply, CaptureReply, CreditReply, Decision, ReplyMessage, VoidReply};
use crate::response::reason_codes::{self, ReasonCategory};
use crate::types::ReasonCode;

/// Read-only view over a processor reply.
///
/// Every operation produces one of these; declines are reported here rather
/// than as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResponse {
    reply: ReplyMessage
}

impl TransactionResponse {
    pub fn new(reply: ReplyMessage) -> Self {
        Self { reply }
    }

    /// True if and only if the processor decided `ACCEPT`.
    pub fn success(&self) -> bool {
        self.reply.decision == Decision::Accept
    }

    pub fn reason_category(&self) -> ReasonCategory {
        reason_codes::category(self.reply.reason_code)
    }

    pub fn is_soft_decline(&self) -> bool {
        !self.success() && self.reason_category() == ReasonCategory::SoftDecline
    }

    pub fn is_hard_decline(&self) -> bool {
        !self.success() && self.reason_category() == ReasonCategory::HardDecline
    }

    pub fn is_error(&self) -> bool {
        !self.success() && self.reason_category() == ReasonCategory::Error
    }

    pub fn request_id(&self) -> &str {
        &self.reply.request_id
    }

    pub fn reason_code(&self) -> ReasonCode {
        self.reply.reason_code
    }

    pub fn decision(&self) -> Decision {
        self.reply.decision
    }

    pub fn reference_code(&self) -> Option<&str> {
        self.reply.merchant_reference_code.as_deref()
    }

    pub fn request_token(&self) -> Option<&str> {
        self.reply.request_token.as_deref()
    }

    pub fn missing_fields(&self) -> &[String] {
        &self.reply.missing_field
    }

    pub fn invalid_fields(&self) -> &[String] {
        &self.reply.invalid_field
    }

    /// Human-readable description of the reason code, naming any fields the processor flagged.
    pub fn message(&self) -> String {
        let mut message = reason_codes::description(self.reply.reason_code).to_string();

        if !self.reply.missing_field.is_empty() {
            message.push_str(&format!(" Missing fields: {}.", self.reply.missing_field.join(", ")));
        }

        if !self.reply.invalid_field.is_empty() {
            message.push_str(&format!(" Invalid fields: {}.", self.reply.invalid_field.join(", ")));
        }

        message
    }

    pub fn cc_auth_reply(&self) -> Option<&AuthReply> {
        self.reply.cc_auth_reply.as_ref()
    }

    pub fn cc_capture_reply(&self) -> Option<&CaptureReply> {
        self.reply.cc_capture_reply.as_ref()
    }

    pub fn cc_credit_reply(&self) -> Option<&CreditReply> {
        self.reply.cc_credit_reply.as_ref()
    }

    pub fn cc_auth_reversal_reply(&self) -> Option<&AuthReversalReply> {
        self.reply.cc_auth_reversal_reply.as_ref()
    }

    pub fn void_reply(&self) -> Option<&VoidReply> {
        self.reply.void_reply.as_ref()
    }
}

impl From<ReplyMessage> for TransactionResponse {
    fn from(reply: ReplyMessage) -> Self {
        Self::new(reply)
    }
}
