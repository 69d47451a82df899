// crates/catalogue-config/src/lib.rs
// ============================================================================
// Module: Catalogue Config
// Description: Configuration loading and validation for the harness.
// Purpose: Provide strict, fail-closed config parsing and fixture loading.
// Dependencies: serde, toml, url
// ============================================================================

//! ## Overview
//! Harness configuration is loaded from a TOML file with strict size limits.
//! Missing or invalid configuration fails closed: the harness refuses to run
//! against an endpoint it cannot describe precisely. Identifier fixtures
//! (the JSON id lists driving per-ID lookup suites) load through the same
//! limits.

mod config;
mod fixture;

pub use config::ApiConfig;
pub use config::ConfigError;
pub use config::DatabaseConfig;
pub use config::FixtureConfig;
pub use config::HarnessConfig;
pub use fixture::IdFixture;
