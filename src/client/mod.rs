mod cybersource;
mod errors;

pub use cybersource::CyberSource;
pub use errors::CyberSourceError;
