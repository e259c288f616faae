mod amount;
mod errors;

pub use amount::Amount;
pub use errors::AmountError;

/// Processor-assigned identifier of a transaction.
pub type RequestId = String;
/// Merchant-supplied correlation token for a transaction.
pub type ReferenceCode = String;
/// Numeric outcome code from the processor's reason code space.
pub type ReasonCode = u32;
