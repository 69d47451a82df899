// crates/catalogue-shape/src/classify.rs
// ============================================================================
// Module: Shape Classifier
// Description: Infers an untyped record's entity kind from key presence.
// Purpose: Route list-response elements to the matching shape validator.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Entity kinds share field names: a catalogue-category pair carries both
//! `catalogueName` and `categoryName`, so the pair predicate must run before
//! either single-entity predicate. Predicates are evaluated top to bottom
//! with first-match-wins semantics; a record matching none classifies as
//! `None` and the caller decides how to surface that.

use serde_json::Value;

use crate::entity::EntityKind;

/// Returns whether `record` is an object carrying top-level key `key`.
fn has_key(record: &Value, key: &str) -> bool {
    record.as_object().is_some_and(|map| map.contains_key(key))
}

/// Classifies a record by which property keys co-occur.
///
/// Ordering is load-bearing: pair detection precedes the catalogue-only and
/// category-only predicates. Non-object values classify as `None`.
#[must_use]
pub fn classify(record: &Value) -> Option<EntityKind> {
    if has_key(record, "categoryName") && has_key(record, "catalogueName") {
        Some(EntityKind::CatalogueCategory)
    } else if has_key(record, "productName") {
        Some(EntityKind::Product)
    } else if has_key(record, "catalogueName") {
        Some(EntityKind::Catalogue)
    } else if has_key(record, "currencyName") {
        Some(EntityKind::Currency)
    } else if has_key(record, "categoryName") {
        Some(EntityKind::Category)
    } else {
        None
    }
}
