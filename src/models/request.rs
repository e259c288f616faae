use serde::Serialize;

use crate::models::{EncryptedPayment, PaymentNetworkToken, Ucaf};
use crate::types::{Amount, ReferenceCode, RequestId};

const RUN: &str = "true";

/// The `requestMessage` body of a `runTransaction` call.
///
/// Field order follows the schema's element sequence; the processor rejects
/// out-of-order elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename = "requestMessage", rename_all = "camelCase")]
pub struct RequestMessage {
    #[serde(rename = "@xmlns")]
    pub namespace: String,
    #[serde(rename = "merchantID")]
    pub merchant_id: String,
    pub merchant_reference_code: ReferenceCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to: Option<BillToNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_totals: Option<PurchaseTotalsNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_payment: Option<EncryptedPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ucaf: Option<Ucaf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_auth_service: Option<AuthServiceNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_capture_service: Option<CaptureServiceNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_credit_service: Option<CreditServiceNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_auth_reversal_service: Option<AuthReversalServiceNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void_service: Option<VoidServiceNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_network_token: Option<PaymentNetworkToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_solution: Option<String>
}

impl RequestMessage {
    /// An envelope with only the merchant identifier and reference code set.
    pub fn new(namespace: impl Into<String>, merchant_id: impl Into<String>, merchant_reference_code: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            merchant_id: merchant_id.into(),
            merchant_reference_code: merchant_reference_code.into(),
            bill_to: None,
            purchase_totals: None,
            encrypted_payment: None,
            card: None,
            ucaf: None,
            cc_auth_service: None,
            cc_capture_service: None,
            cc_credit_service: None,
            cc_auth_reversal_service: None,
            void_service: None,
            payment_network_token: None,
            payment_solution: None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillToNode {
    pub first_name: String,
    pub last_name: String,
    pub street1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub email: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTotalsNode {
    pub currency: String,
    pub grand_total_amount: Amount
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_indicator: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthServiceNode {
    #[serde(rename = "@run")]
    pub run: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cavv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cavv_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commerce_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eci_raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xid: Option<String>,
    #[serde(rename = "reconciliationID", skip_serializing_if = "Option::is_none")]
    pub reconciliation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbal_auth_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub veres_enrolled: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pares_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_auth_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_recurring_payment: Option<String>
}

impl AuthServiceNode {
    pub fn run() -> Self {
        Self {
            run: RUN,
            cavv: None,
            cavv_algorithm: None,
            commerce_indicator: None,
            eci_raw: None,
            xid: None,
            reconciliation_id: None,
            auth_type: None,
            verbal_auth_code: None,
            veres_enrolled: None,
            pares_status: None,
            partial_auth_indicator: None,
            first_recurring_payment: None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureServiceNode {
    #[serde(rename = "@run")]
    pub run: &'static str,
    #[serde(rename = "authRequestID", skip_serializing_if = "Option::is_none")]
    pub auth_request_id: Option<RequestId>
}

impl CaptureServiceNode {
    pub fn run(auth_request_id: Option<RequestId>) -> Self {
        Self { run: RUN, auth_request_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthReversalServiceNode {
    #[serde(rename = "@run")]
    pub run: &'static str,
    #[serde(rename = "authRequestID")]
    pub auth_request_id: RequestId
}

impl AuthReversalServiceNode {
    pub fn run(auth_request_id: RequestId) -> Self {
        Self { run: RUN, auth_request_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditServiceNode {
    #[serde(rename = "@run")]
    pub run: &'static str,
    #[serde(rename = "captureRequestID")]
    pub capture_request_id: RequestId
}

impl CreditServiceNode {
    pub fn run(capture_request_id: RequestId) -> Self {
        Self { run: RUN, capture_request_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoidServiceNode {
    #[serde(rename = "@run")]
    pub run: &'static str,
    #[serde(rename = "voidRequestID")]
    pub void_request_id: RequestId
}

impl VoidServiceNode {
    pub fn run(void_request_id: RequestId) -> Self {
        Self { run: RUN, void_request_id }
    }
}
