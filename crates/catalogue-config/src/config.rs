// crates/catalogue-config/src/config.rs
// ============================================================================
// Module: Harness Configuration
// Description: TOML configuration model for the catalogue harness.
// Purpose: Replace hardcoded endpoint and connection literals with an
//          explicit, validated configuration structure.
// Dependencies: serde, toml, url
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "catalogue-probe.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "CATALOGUE_PROBE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Minimum allowed HTTP request timeout in milliseconds.
pub(crate) const MIN_REQUEST_TIMEOUT_MS: u64 = 100;
/// Maximum allowed HTTP request timeout in milliseconds.
pub(crate) const MAX_REQUEST_TIMEOUT_MS: u64 = 60_000;
/// Default HTTP request timeout in milliseconds.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
/// Minimum allowed database connect timeout in milliseconds.
pub(crate) const MIN_CONNECT_TIMEOUT_MS: u64 = 100;
/// Maximum allowed database connect timeout in milliseconds.
pub(crate) const MAX_CONNECT_TIMEOUT_MS: u64 = 30_000;
/// Default database connect timeout in milliseconds.
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;
/// Default expected status for list and lookup requests.
const DEFAULT_EXPECTED_STATUS: u16 = 200;
/// Default API base URL for a locally running catalogue service.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level harness configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HarnessConfig {
    /// Catalogue API endpoint configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Database probe connection configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Identifier fixture configuration.
    #[serde(default)]
    pub fixtures: FixtureConfig,
}

/// Catalogue API endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the catalogue service, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Expected HTTP status for list and lookup requests.
    #[serde(default = "default_expected_status")]
    pub expected_status: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            expected_status: DEFAULT_EXPECTED_STATUS,
        }
    }
}

/// Database probe connection configuration.
///
/// The original harness compiled these in as literals; they are explicit
/// fields so deployments can point the probe anywhere.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
    /// Database name.
    pub dbname: String,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            dbname: "postgres".to_string(),
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

/// Identifier fixture configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FixtureConfig {
    /// Path to the identifier fixture JSON file.
    pub path: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("fixtures/ids.json"),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Filesystem error while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML or JSON parse error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Semantic validation failure.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Loading and Validation
// ============================================================================

impl HarnessConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// An explicit `path` wins; otherwise the `CATALOGUE_PROBE_CONFIG`
    /// environment variable is consulted; otherwise the default filename in
    /// the working directory is used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path);
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|err| ConfigError::Parse(format!("config is not utf-8: {err}")))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration, failing closed on any inconsistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.database.validate()?;
        if self.fixtures.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("fixture path must not be empty".to_string()));
        }
        Ok(())
    }
}

impl ApiConfig {
    /// Validates the API endpoint settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|err| ConfigError::Invalid(format!("base_url is not a valid url: {err}")))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Invalid("base_url scheme must be http or https".to_string()));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Invalid(
                "base_url must not end with a trailing slash".to_string(),
            ));
        }
        if self.request_timeout_ms < MIN_REQUEST_TIMEOUT_MS
            || self.request_timeout_ms > MAX_REQUEST_TIMEOUT_MS
        {
            return Err(ConfigError::Invalid(format!(
                "request_timeout_ms must be between {MIN_REQUEST_TIMEOUT_MS} and \
                 {MAX_REQUEST_TIMEOUT_MS}"
            )));
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Validates the database probe settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Invalid("database host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid("database port must be non-zero".to_string()));
        }
        if self.user.is_empty() {
            return Err(ConfigError::Invalid("database user must not be empty".to_string()));
        }
        if self.dbname.is_empty() {
            return Err(ConfigError::Invalid("database name must not be empty".to_string()));
        }
        if self.connect_timeout_ms < MIN_CONNECT_TIMEOUT_MS
            || self.connect_timeout_ms > MAX_CONNECT_TIMEOUT_MS
        {
            return Err(ConfigError::Invalid(format!(
                "connect_timeout_ms must be between {MIN_CONNECT_TIMEOUT_MS} and \
                 {MAX_CONNECT_TIMEOUT_MS}"
            )));
        }
        Ok(())
    }
}

/// Serde default for the request timeout.
const fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

/// Serde default for the expected status.
const fn default_expected_status() -> u16 {
    DEFAULT_EXPECTED_STATUS
}

/// Serde default for the connect timeout.
const fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

/// Resolves the config path from the explicit argument, environment, or
/// default filename, in that order.
fn resolve_path(path: Option<&Path>) -> PathBuf {
    if let Some(path) = path {
        return path.to_path_buf();
    }
    if let Ok(from_env) = env::var(CONFIG_ENV_VAR) {
        if !from_env.is_empty() {
            return PathBuf::from(from_env);
        }
    }
    PathBuf::from(DEFAULT_CONFIG_NAME)
}
