use serde::Serialize;

/// Overrides merged field by field onto the `ccAuthService` node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthServiceOptions {
    pub cavv: Option<String>,
    pub cavv_algorithm: Option<String>,
    pub commerce_indicator: Option<String>,
    pub eci_raw: Option<String>,
    pub xid: Option<String>,
    pub reconciliation_id: Option<String>,
    pub auth_type: Option<String>,
    pub verbal_auth_code: Option<String>,
    pub veres_enrolled: Option<String>,
    pub pares_status: Option<String>,
    pub partial_auth_indicator: Option<String>,
    pub first_recurring_payment: Option<String>
}

/// Encrypted payment blob (e.g. a wallet payload), copied verbatim onto the `encryptedPayment` node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped_key: Option<String>,
    #[serde(rename = "referenceID", skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>
}

/// Mastercard SecureCode / UCAF authentication data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ucaf {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_indicator: Option<String>
}

/// Network token metadata sent alongside a tokenized card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNetworkToken {
    #[serde(rename = "requestorID", skip_serializing_if = "Option::is_none")]
    pub requestor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assurance_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_tech_type: Option<String>
}

/// Optional blocks accepted by auth and sale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthExtensions {
    pub auth_service: Option<AuthServiceOptions>,
    pub encrypted_payment: Option<EncryptedPayment>,
    pub ucaf: Option<Ucaf>,
    pub payment_network_token: Option<PaymentNetworkToken>,
    pub payment_solution: Option<String>
}
