// crates/catalogue-config/src/fixture.rs
// ============================================================================
// Module: Identifier Fixtures
// Description: JSON fixture model supplying per-entity identifier lists.
// Purpose: Drive per-ID lookup suites from a static fixture file.
// Dependencies: serde, serde_json
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::config::ConfigError;
use crate::config::MAX_CONFIG_FILE_SIZE;

/// Identifier lists consumed by per-ID lookup suites.
///
/// Field names mirror the fixture file's camelCase keys. Empty arrays are
/// valid: a suite with no ids for a kind simply performs no lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IdFixture {
    /// Product identifiers to look up.
    #[serde(default)]
    pub product_ids: Vec<i64>,
    /// Catalogue identifiers to look up.
    #[serde(default)]
    pub catalogue_ids: Vec<i64>,
    /// Currency identifiers to look up.
    #[serde(default)]
    pub currency_ids: Vec<i64>,
    /// Category identifiers to look up.
    #[serde(default)]
    pub category_ids: Vec<i64>,
    /// Product price identifiers to look up.
    #[serde(default)]
    pub product_price_ids: Vec<i64>,
}

impl IdFixture {
    /// Loads an identifier fixture from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is unreadable, oversized, or
    /// not valid fixture JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("fixture file exceeds size limit".to_string()));
        }
        serde_json::from_slice(&bytes).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}
