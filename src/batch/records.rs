use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::client::CyberSourceError;
use crate::models::{BillTo, Card, Payment, TransactionArgs};
use crate::response::TransactionResponse;

/// One input line of a batch file. Only `service` and `reference` are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchRow {
    pub service: String,
    pub reference: String,
    pub currency: Option<String>,
    pub total: Option<String>,
    pub request_id: Option<String>,
    pub account_number: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub cv_number: Option<String>,
    pub card_type: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>
}

impl BatchRow {
    /// Converts the row into the flat argument set of `run_named_transaction`.
    ///
    /// `request_id` is offered as every correlating id; the service picks the one it needs.
    pub fn to_args(&self) -> Result<TransactionArgs, CyberSourceError> {
        let payment = match (&self.currency, &self.total) {
            (Some(currency), Some(total)) => Some(Payment::new(currency.as_str(), total)?),
            _ => None
        };

        let card = self.account_number.as_ref().map(|account_number| Card {
            account_number: Some(account_number.clone()),
            expiration_month: self.expiration_month.clone(),
            expiration_year: self.expiration_year.clone(),
            cv_number: self.cv_number.clone(),
            card_type: self.card_type.clone()
        });

        Ok(TransactionArgs {
            payment,
            card,
            bill_to: self.bill_to(),
            auth_request_id: self.request_id.clone(),
            capture_request_id: self.request_id.clone(),
            request_id: self.request_id.clone(),
            ..TransactionArgs::default()
        })
    }

    fn bill_to(&self) -> Option<BillTo> {
        Some(BillTo {
            first_name: self.first_name.clone()?,
            last_name: self.last_name.clone()?,
            email: self.email.clone()?,
            country: self.country.clone()?,
            state: self.state.clone()?,
            city: self.city.clone()?,
            postal_code: self.postal_code.clone()?,
            street1: self.street1.clone()?,
            street2: self.street2.clone()
        })
    }
}

/// One output line of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub reference: String,
    pub service: String,
    pub request_id: Option<String>,
    pub decision: Option<String>,
    pub reason_code: Option<u32>,
    pub success: bool,
    pub soft_decline: bool,
    pub error: Option<String>
}

impl BatchOutcome {
    pub fn from_response(row: &BatchRow, response: &TransactionResponse) -> Self {
        Self {
            reference: row.reference.clone(),
            service: row.service.clone(),
            request_id: Some(response.request_id().to_string()),
            decision: Some(response.decision().to_string()),
            reason_code: Some(response.reason_code()),
            success: response.success(),
            soft_decline: response.is_soft_decline(),
            error: None
        }
    }

    pub fn from_error(row: &BatchRow, error: &CyberSourceError) -> Self {
        Self {
            reference: row.reference.clone(),
            service: row.service.clone(),
            request_id: None,
            decision: None,
            reason_code: None,
            success: false,
            soft_decline: false,
            error: Some(error.to_string())
        }
    }
}

/// Writes outcomes as CSV, header first.
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        writer.serialize(outcome)?;
    }

    writer.flush()?;

    Ok(())
}
