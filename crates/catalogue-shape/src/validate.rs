// crates/catalogue-shape/src/validate.rs
// ============================================================================
// Module: Shape Validators
// Description: Required-key assertions for each catalogue entity kind.
// Purpose: Fail fast with the missing key named when a record is malformed.
// Dependencies: serde_json, thiserror
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::entity::EntityKind;

/// Shape validation errors.
///
/// Every variant names the entity kind and the key that failed, so a failed
/// test case reports exactly which contract field drifted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The record is not a JSON object.
    #[error("{kind} record is not a JSON object")]
    NotAnObject {
        /// Expected entity kind.
        kind: EntityKind,
    },
    /// A required top-level key is absent.
    #[error("{kind} record missing required key `{key}`")]
    MissingKey {
        /// Entity kind being validated.
        kind: EntityKind,
        /// The absent key.
        key: &'static str,
    },
    /// A required nested key is absent from a sub-record.
    #[error("{kind} record missing required key `{parent}.{key}`")]
    MissingNestedKey {
        /// Entity kind being validated.
        kind: EntityKind,
        /// Parent key holding the sub-record.
        parent: &'static str,
        /// The absent nested key.
        key: &'static str,
    },
}

/// Validates that `record` carries every required key for `kind`.
///
/// Presence only: values may be null, empty, or of any type. The record is
/// not mutated. The first missing key aborts validation.
///
/// # Errors
///
/// Returns [`ShapeError`] naming the first absent key.
pub fn validate(kind: EntityKind, record: &Value) -> Result<(), ShapeError> {
    let map = record.as_object().ok_or(ShapeError::NotAnObject { kind })?;
    for &key in kind.required_keys() {
        if !map.contains_key(key) {
            return Err(ShapeError::MissingKey { kind, key });
        }
    }
    for &(parent, key) in kind.required_nested_keys() {
        let nested = map.get(parent).and_then(Value::as_object);
        let present = nested.is_some_and(|sub| sub.contains_key(key));
        if !present {
            return Err(ShapeError::MissingNestedKey { kind, parent, key });
        }
    }
    Ok(())
}
