use serde::Deserialize;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::{Amount, ReasonCode, ReferenceCode, RequestId};

/// Overall outcome reported by the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Decision {
    Accept,
    Reject,
    Error,
    Review
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accept => "ACCEPT",
            Decision::Reject => "REJECT",
            Decision::Error => "ERROR",
            Decision::Review => "REVIEW"
        }
    }
}

impl TryFrom<String> for Decision {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        match value.trim() {
            "ACCEPT" => Ok(Decision::Accept),
            "REJECT" => Ok(Decision::Reject),
            "ERROR" => Ok(Decision::Error),
            "REVIEW" => Ok(Decision::Review),
            other => Err(format!("Unknown decision [{other}]"))
        }
    }
}

impl Display for Decision {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// The `replyMessage` body returned by `runTransaction`.
///
/// Per-operation blocks are present only for services that actually ran.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessage {
    #[serde(default)]
    pub merchant_reference_code: Option<ReferenceCode>,
    #[serde(rename = "requestID")]
    pub request_id: RequestId,
    pub decision: Decision,
    pub reason_code: ReasonCode,
    #[serde(default)]
    pub missing_field: Vec<String>,
    #[serde(default)]
    pub invalid_field: Vec<String>,
    #[serde(default)]
    pub request_token: Option<String>,
    #[serde(default)]
    pub purchase_totals: Option<PurchaseTotalsReply>,
    #[serde(default)]
    pub cc_auth_reply: Option<AuthReply>,
    #[serde(default)]
    pub cc_capture_reply: Option<CaptureReply>,
    #[serde(default)]
    pub cc_credit_reply: Option<CreditReply>,
    #[serde(default)]
    pub cc_auth_reversal_reply: Option<AuthReversalReply>,
    #[serde(default)]
    pub void_reply: Option<VoidReply>
}

impl ReplyMessage {
    /// A reply carrying only the top-level outcome fields.
    pub fn new(request_id: impl Into<String>, decision: Decision, reason_code: ReasonCode) -> Self {
        Self {
            merchant_reference_code: None,
            request_id: request_id.into(),
            decision,
            reason_code,
            missing_field: Vec::new(),
            invalid_field: Vec::new(),
            request_token: None,
            purchase_totals: None,
            cc_auth_reply: None,
            cc_capture_reply: None,
            cc_credit_reply: None,
            cc_auth_reversal_reply: None,
            void_reply: None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTotalsReply {
    #[serde(default)]
    pub currency: Option<String>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthReply {
    pub reason_code: Option<ReasonCode>,
    pub amount: Option<Amount>,
    pub authorization_code: Option<String>,
    pub avs_code: Option<String>,
    pub avs_code_raw: Option<String>,
    pub cv_code: Option<String>,
    pub cv_code_raw: Option<String>,
    pub authorized_date_time: Option<String>,
    pub processor_response: Option<String>,
    #[serde(rename = "reconciliationID")]
    pub reconciliation_id: Option<String>,
    #[serde(rename = "paymentNetworkTransactionID")]
    pub payment_network_transaction_id: Option<String>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureReply {
    pub reason_code: Option<ReasonCode>,
    pub request_date_time: Option<String>,
    pub amount: Option<Amount>,
    #[serde(rename = "reconciliationID")]
    pub reconciliation_id: Option<String>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditReply {
    pub reason_code: Option<ReasonCode>,
    pub request_date_time: Option<String>,
    pub amount: Option<Amount>,
    #[serde(rename = "reconciliationID")]
    pub reconciliation_id: Option<String>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthReversalReply {
    pub reason_code: Option<ReasonCode>,
    pub amount: Option<Amount>,
    pub authorization_code: Option<String>,
    pub processor_response: Option<String>,
    pub request_date_time: Option<String>
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoidReply {
    pub reason_code: Option<ReasonCode>,
    pub request_date_time: Option<String>,
    pub amount: Option<Amount>,
    pub currency: Option<String>
}
