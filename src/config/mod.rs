mod errors;
mod settings;

pub use errors::ConfigError;
pub use settings::{CONFIG_FILE_NAME, CyberSourceConfig, LIVE_ENDPOINT, TEST_ENDPOINT};
