// crates/catalogue-client/src/probe.rs
// ============================================================================
// Module: Database Probe
// Description: One-off diagnostic read against the backing store.
// Purpose: Fetch a currency code straight from the database to confirm the
//          store behind the API is reachable and seeded.
// Dependencies: catalogue-config, postgres
// ============================================================================

//! ## Overview
//! The probe opens a direct connection, runs one parameterized SELECT, and
//! drops the connection. No pooling, no transaction, no retry: a connection
//! or query failure propagates to the caller and fails the enclosing test.

use std::time::Duration;

use catalogue_config::DatabaseConfig;
use postgres::NoTls;
use thiserror::Error;

/// Statement issued by the probe.
const CURRENCY_CODE_QUERY: &str =
    "SELECT currency_code FROM web_store.currency WHERE currency_id = $1";

/// Database probe errors.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Connection establishment failed.
    #[error("database connect failed: {0}")]
    Connect(String),
    /// Query execution or row decode failed.
    #[error("database query failed: {0}")]
    Query(String),
}

/// Scoped database probe built from explicit configuration.
pub struct DbProbe {
    /// Connection parameters.
    config: DatabaseConfig,
}

impl DbProbe {
    /// Creates a probe for the given connection parameters.
    #[must_use]
    pub const fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Reads the currency codes for `currency_id` from the store.
    ///
    /// Connects, queries, and disconnects within this call. The returned
    /// sequence preserves row order; it is empty when no row matches.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when connecting, querying, or decoding fails.
    pub fn currency_code(&self, currency_id: i32) -> Result<Vec<String>, ProbeError> {
        let mut pg_config = postgres::Config::new();
        pg_config
            .host(&self.config.host)
            .port(self.config.port)
            .user(&self.config.user)
            .password(&self.config.password)
            .dbname(&self.config.dbname)
            .connect_timeout(Duration::from_millis(self.config.connect_timeout_ms));
        let mut client =
            pg_config.connect(NoTls).map_err(|err| ProbeError::Connect(err.to_string()))?;
        let rows = client
            .query(CURRENCY_CODE_QUERY, &[&currency_id])
            .map_err(|err| ProbeError::Query(err.to_string()))?;
        let mut codes = Vec::with_capacity(rows.len());
        for row in &rows {
            let code: String = row.try_get(0).map_err(|err| ProbeError::Query(err.to_string()))?;
            codes.push(code);
        }
        Ok(codes)
    }
}
