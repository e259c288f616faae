use std::fmt;
use std::fmt::{Debug, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::errors::ConfigError;

pub const TEST_ENDPOINT: &str = "https://ics2wstest.ic3.com/commerce/1.x/transactionProcessor";
pub const LIVE_ENDPOINT: &str = "https://ics2ws.ic3.com/commerce/1.x/transactionProcessor";
pub const CONFIG_FILE_NAME: &str = ".cybersource";

const DEFAULT_API_VERSION: &str = "1.121";
const NAMESPACE_PREFIX: &str = "urn:schemas-cybersource-com:transaction-data-";

/// Merchant credentials and endpoint settings.
///
/// Read-only once the client is built. Loaded from TOML:
///
/// ```toml
/// merchant_id = "my_merchant"
/// api_key = "transaction key"
/// endpoint = "https://ics2wstest.ic3.com/commerce/1.x/transactionProcessor"
/// ```
#[derive(Clone, Deserialize)]
pub struct CyberSourceConfig {
    pub merchant_id: String,
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64
}

impl CyberSourceConfig {
    /// Creates a config for the test endpoint with default timeouts.
    pub fn new(merchant_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Checks the config shape before any network activity.
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `merchant_id` or `api_key` is blank.
    /// - `endpoint` is not an absolute HTTPS URL.
    /// - `api_version` is blank.
    /// - `timeout_secs` is outside 1-300 or `connect_timeout_secs` outside 1-60.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.merchant_id.trim().is_empty() {
            return Err(ConfigError::MissingField("merchant_id"));
        }

        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingField("api_key"));
        }

        if self.api_version.trim().is_empty() {
            return Err(ConfigError::MissingField("api_version"));
        }

        self.endpoint_url()?;

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ConfigError::invalid_field("timeout_secs", "must be between 1 and 300"));
        }

        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(ConfigError::invalid_field("connect_timeout_secs", "must be between 1 and 60"));
        }

        Ok(())
    }

    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|error| ConfigError::invalid_field("endpoint", error.to_string()))?;

        if url.scheme() != "https" {
            return Err(ConfigError::invalid_field("endpoint", "only HTTPS endpoints are allowed"));
        }

        Ok(url)
    }

    /// XML namespace of the transaction schema for `api_version`.
    pub fn namespace(&self) -> String {
        format!("{NAMESPACE_PREFIX}{}", self.api_version)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Reads a TOML config file. The result is not validated.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Looks for `.cybersource` in the working directory, then in `$HOME`.
    pub fn discover() -> Result<Self, ConfigError> {
        let mut candidates = Vec::new();

        if let Ok(current) = std::env::current_dir() {
            candidates.push(current.join(CONFIG_FILE_NAME));
        }

        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(CONFIG_FILE_NAME));
        }

        Self::discover_in(&candidates)
    }

    /// Loads the first existing file among `candidates`.
    pub fn discover_in(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        let path = candidates.iter().find(|path| path.is_file()).ok_or(ConfigError::NotFound)?;

        debug!("Loading configuration from [{}]", path.display());

        Self::from_file(path)
    }

    /// Applies `CYBERSOURCE_MERCHANT_ID`, `CYBERSOURCE_API_KEY` and `CYBERSOURCE_ENDPOINT` when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    pub(crate) fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(merchant_id) = lookup("CYBERSOURCE_MERCHANT_ID") {
            self.merchant_id = merchant_id;
        }

        if let Some(api_key) = lookup("CYBERSOURCE_API_KEY") {
            self.api_key = api_key;
        }

        if let Some(endpoint) = lookup("CYBERSOURCE_ENDPOINT") {
            self.endpoint = endpoint;
        }

        self
    }
}

impl Debug for CyberSourceConfig {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("CyberSourceConfig")
            .field("merchant_id", &self.merchant_id)
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

fn default_endpoint() -> String {
    TEST_ENDPOINT.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
