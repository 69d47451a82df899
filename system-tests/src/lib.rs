// system-tests/src/lib.rs
// ============================================================================
// Module: System Tests Library
// Description: Crate root for catalogue harness system tests.
// Purpose: Anchor the test binaries; all shared code lives in tests/helpers.
// Dependencies: none
// ============================================================================

//! ## Overview
//! System tests exercise the request verifier end to end against an
//! in-process stub catalogue service, plus an opt-in live database probe.
//! Suites live under `tests/`; shared fixtures and the stub service live in
//! `tests/helpers`.
