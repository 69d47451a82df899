// crates/catalogue-client/src/events.rs
// ============================================================================
// Module: Verifier Events
// Description: Observability hooks for verification outcomes.
// Purpose: Surface unclassified records and verified endpoints without a
//          hard logging dependency.
// Dependencies: catalogue-shape
// ============================================================================

//! ## Overview
//! The original harness skipped unclassifiable records in silence, which
//! masks backend contract drift. The verifier instead emits an event for
//! every unclassified element and for every verified endpoint; suites
//! install a recording sink and assert on what they expect to see.

use std::sync::Mutex;

use crate::resource::ResourceKind;

/// Verification outcome events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyEvent {
    /// A list endpoint was verified.
    ListVerified {
        /// Request path.
        path: String,
        /// Number of elements in the response array.
        elements: usize,
        /// Number of elements no classifier predicate matched.
        unclassified: usize,
    },
    /// A list element matched no classifier predicate.
    Unclassified {
        /// Request path.
        path: String,
        /// Element index within the response array.
        index: usize,
    },
    /// A single-resource lookup was verified.
    ResourceVerified {
        /// Resource kind looked up.
        kind: ResourceKind,
        /// Identifier asserted on the response.
        id: i64,
    },
}

/// Sink for verification events.
pub trait VerifierEvents: Send + Sync {
    /// Records one verification event.
    fn record(&self, event: VerifyEvent);
}

/// Sink that discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEvents;

impl VerifierEvents for NullEvents {
    fn record(&self, _event: VerifyEvent) {}
}

/// Sink that retains events for later inspection.
#[derive(Debug, Default)]
pub struct RecordingEvents {
    /// Recorded events in arrival order.
    events: Mutex<Vec<VerifyEvent>>,
}

impl RecordingEvents {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events.
    ///
    /// # Panics
    ///
    /// Never panics in practice: the mutex cannot be poisoned because
    /// `record` does not panic while holding it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<VerifyEvent> {
        self.events.lock().map_or_else(|err| err.into_inner().clone(), |events| events.clone())
    }
}

impl VerifierEvents for RecordingEvents {
    fn record(&self, event: VerifyEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
