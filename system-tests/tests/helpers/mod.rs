// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for catalogue harness system-tests.
// Purpose: Provide the stub catalogue service and seed records.
// Dependencies: axum, serde_json
// ============================================================================

//! ## Overview
//! Shared helpers for catalogue harness system-tests. The stub service is an
//! in-process axum server seeded with catalogue records; suites point the
//! verifier at it and assert on contract outcomes.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod seed;
pub mod stub_service;
