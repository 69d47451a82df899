// crates/catalogue-client/src/lib.rs
// ============================================================================
// Module: Catalogue Client
// Description: Request verifier and database probe for the harness.
// Purpose: Issue GET requests, assert status and body shape, and run the
//          one-off diagnostic database read.
// Dependencies: catalogue-shape, catalogue-config, reqwest, postgres
// ============================================================================

//! ## Overview
//! The verifier issues one GET per call and asserts the response contract:
//! status code, body shape (array or object), per-element classification and
//! validation for lists, and identifier equality for single-resource lookups.
//! Verification is fail-fast: the first failing assertion aborts the call and
//! no retries are attempted. Responses are untrusted input.

mod events;
mod probe;
mod resource;
mod verifier;


pub use events::NullEvents;
pub use events::RecordingEvents;
pub use events::VerifierEvents;
pub use events::VerifyEvent;
pub use probe::DbProbe;
pub use probe::ProbeError;
pub use resource::ParseResourceError;
pub use resource::ResourceKind;
pub use verifier::ApiClient;
pub use verifier::ListReport;
pub use verifier::VerifyError;
