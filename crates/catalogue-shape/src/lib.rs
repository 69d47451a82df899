// crates/catalogue-shape/src/lib.rs
// ============================================================================
// Module: Catalogue Shape
// Description: Shape model for catalogue API responses.
// Purpose: Classify untyped JSON records by key presence and validate
//          required-key sets per entity kind.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The catalogue service returns untyped JSON records. This crate infers each
//! record's entity kind from which keys co-occur and asserts the fixed
//! required-key set for that kind. Classification and validation are pure
//! functions of key presence; records are never mutated or normalized.
//! Records from the service are untrusted input and are probed with safe
//! absent-key lookups only.

mod classify;
mod entity;
mod validate;


pub use classify::classify;
pub use entity::EntityKind;
pub use validate::ShapeError;
pub use validate::validate;
