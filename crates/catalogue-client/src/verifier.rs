// crates/catalogue-client/src/verifier.rs
// ============================================================================
// Module: Request Verifier
// Description: GET issuing plus status, shape, and identifier assertions.
// Purpose: Verify list and single-resource responses against the catalogue
//          API contract, fail-fast with no retries.
// Dependencies: catalogue-shape, catalogue-config, reqwest
// ============================================================================

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use catalogue_config::ApiConfig;
use catalogue_shape::EntityKind;
use catalogue_shape::ShapeError;
use catalogue_shape::classify;
use catalogue_shape::validate;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::events::NullEvents;
use crate::events::VerifierEvents;
use crate::events::VerifyEvent;
use crate::resource::ResourceKind;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Request verification errors.
///
/// One variant per assertion in the contract, so failures name exactly what
/// drifted: status, body shape, a record's keys, or the identifier echo.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
    /// Network or protocol failure before a response arrived.
    #[error("transport error for {url}: {message}")]
    Transport {
        /// Request URL.
        url: String,
        /// Underlying failure description.
        message: String,
    },
    /// The response status did not match the expected status.
    #[error("status mismatch for {url}: expected {expected}, got {actual}")]
    StatusMismatch {
        /// Request URL.
        url: String,
        /// Status the caller expected.
        expected: u16,
        /// Status the service returned.
        actual: u16,
    },
    /// The response body was not decodable JSON.
    #[error("invalid json body for {url}: {message}")]
    InvalidBody {
        /// Request URL.
        url: String,
        /// Decode failure description.
        message: String,
    },
    /// A list endpoint returned a non-array body.
    #[error("response body for {url} is not a JSON array")]
    BodyNotArray {
        /// Request URL.
        url: String,
    },
    /// A single-resource endpoint returned a non-object body.
    #[error("response body for {url} is not a JSON object")]
    BodyNotObject {
        /// Request URL.
        url: String,
    },
    /// A classified record failed shape validation.
    #[error("record at index {index} failed shape validation: {source}")]
    Shape {
        /// Element index within the response array.
        index: usize,
        /// The shape validation failure.
        #[source]
        source: ShapeError,
    },
    /// A single-resource response echoed the wrong identifier.
    #[error("identifier mismatch: {field} expected {expected}, got {actual}")]
    IdMismatch {
        /// Identifier field asserted.
        field: &'static str,
        /// Identifier the caller supplied.
        expected: i64,
        /// Value the service returned, rendered as JSON.
        actual: String,
    },
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Outcome of one verified list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListReport {
    /// Total elements in the response array.
    pub elements: usize,
    /// Validated record counts per entity kind.
    pub counts: BTreeMap<EntityKind, usize>,
    /// Indexes of elements no classifier predicate matched.
    pub unclassified: Vec<usize>,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP verifier for the catalogue API.
pub struct ApiClient {
    /// Base URL without a trailing slash.
    base_url: String,
    /// Status configured for list and lookup requests.
    expected_status: u16,
    /// Underlying HTTP client with the configured timeout.
    client: Client,
    /// Event sink for verification outcomes.
    events: Arc<dyn VerifierEvents>,
}

impl ApiClient {
    /// Creates a verifier from API configuration with a null event sink.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, VerifyError> {
        Self::with_events(config, Arc::new(NullEvents))
    }

    /// Creates a verifier that reports outcomes to `events`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn with_events(
        config: &ApiConfig,
        events: Arc<dyn VerifierEvents>,
    ) -> Result<Self, VerifyError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|err| VerifyError::ClientBuild(err.to_string()))?;
        Ok(Self {
            base_url: config.base_url.clone(),
            expected_status: config.expected_status,
            client,
            events,
        })
    }

    /// Returns the status configured for this endpoint's requests.
    #[must_use]
    pub const fn expected_status(&self) -> u16 {
        self.expected_status
    }

    /// Issues a GET and decodes the body after asserting the status.
    async fn fetch_json(&self, url: &str, expected_status: u16) -> Result<Value, VerifyError> {
        let response = self.client.get(url).send().await.map_err(|err| {
            VerifyError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            }
        })?;
        let actual = response.status().as_u16();
        if actual != expected_status {
            return Err(VerifyError::StatusMismatch {
                url: url.to_string(),
                expected: expected_status,
                actual,
            });
        }
        response.json().await.map_err(|err| VerifyError::InvalidBody {
            url: url.to_string(),
            message: err.to_string(),
        })
    }

    /// Verifies a list endpoint.
    ///
    /// Asserts the status, asserts the body is an array, then classifies and
    /// validates each element. Unclassifiable elements do not fail the call;
    /// they are recorded in the report and reported to the event sink. An
    /// empty array trivially passes.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] on the first failed assertion. No retries.
    pub async fn verify_list(
        &self,
        path: &str,
        expected_status: u16,
    ) -> Result<ListReport, VerifyError> {
        let url = format!("{}{path}", self.base_url);
        let body = self.fetch_json(&url, expected_status).await?;
        let Some(records) = body.as_array() else {
            return Err(VerifyError::BodyNotArray { url });
        };
        let mut report = ListReport {
            elements: records.len(),
            ..ListReport::default()
        };
        for (index, record) in records.iter().enumerate() {
            match classify(record) {
                Some(kind) => {
                    validate(kind, record)
                        .map_err(|source| VerifyError::Shape { index, source })?;
                    *report.counts.entry(kind).or_insert(0) += 1;
                }
                None => {
                    report.unclassified.push(index);
                    self.events.record(VerifyEvent::Unclassified {
                        path: path.to_string(),
                        index,
                    });
                }
            }
        }
        self.events.record(VerifyEvent::ListVerified {
            path: path.to_string(),
            elements: report.elements,
            unclassified: report.unclassified.len(),
        });
        Ok(report)
    }

    /// Verifies a single-resource lookup.
    ///
    /// Asserts the status, asserts the body is an object, and asserts the
    /// kind's identifier field echoes `id`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] on the first failed assertion. No retries.
    pub async fn verify_resource(
        &self,
        kind: ResourceKind,
        id: i64,
        expected_status: u16,
    ) -> Result<(), VerifyError> {
        let url = format!("{}/api/{}/{id}", self.base_url, kind.path_segment());
        let body = self.fetch_json(&url, expected_status).await?;
        let Some(record) = body.as_object() else {
            return Err(VerifyError::BodyNotObject { url });
        };
        let field = kind.id_field();
        let actual = record.get(field).cloned().unwrap_or(Value::Null);
        if actual != Value::from(id) {
            return Err(VerifyError::IdMismatch {
                field,
                expected: id,
                actual: actual.to_string(),
            });
        }
        self.events.record(VerifyEvent::ResourceVerified { kind, id });
        Ok(())
    }
}
