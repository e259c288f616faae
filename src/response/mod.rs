mod reason_codes;
mod transaction_response;

pub use reason_codes::{ReasonCategory, category, description};
pub use transaction_response::TransactionResponse;
