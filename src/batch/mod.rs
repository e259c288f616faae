mod batch_runner;
mod records;

pub use batch_runner::BatchRunner;
pub use records::{BatchOutcome, BatchRow, write_outcomes};
