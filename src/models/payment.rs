use std::str::FromStr;

use crate::types::{Amount, AmountError};

/// Purchase totals for a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// ISO 4217 currency code, e.g. `USD`.
    pub currency: String,
    /// Grand total, kept as an exact decimal.
    pub total: Amount
}

impl Payment {
    /// Creates a payment from a currency code and a decimal total string.
    ///
    /// # Errors
    /// Returns `AmountError` if `total` is not a decimal number.
    pub fn new(currency: impl Into<String>, total: &str) -> Result<Self, AmountError> {
        Ok(Self {
            currency: currency.into(),
            total: Amount::from_str(total)?
        })
    }
}

/// Card details. Every field is optional; empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub account_number: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub cv_number: Option<String>,
    pub card_type: Option<String>
}

impl Card {
    pub fn new(account_number: impl Into<String>, expiration_month: impl Into<String>, expiration_year: impl Into<String>) -> Self {
        Self {
            account_number: Some(account_number.into()),
            expiration_month: Some(expiration_month.into()),
            expiration_year: Some(expiration_year.into()),
            ..Self::default()
        }
    }

    pub fn with_cv_number(mut self, cv_number: impl Into<String>) -> Self {
        self.cv_number = Some(cv_number.into());
        self
    }

    pub fn with_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }
}

/// Billing address of the card holder. Only `street2` is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillTo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub postal_code: String,
    pub street1: String,
    pub street2: Option<String>
}
