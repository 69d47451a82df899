// system-tests/tests/helpers/stub_service.rs
// ============================================================================
// Module: Stub Catalogue Service
// Description: In-process axum stand-in for the catalogue API.
// Purpose: Serve seeded JSON so the verifier can be exercised hermetically.
// Dependencies: axum, serde_json, tokio
// ============================================================================

//! ## Overview
//! The stub binds an ephemeral loopback port and serves the catalogue list
//! and lookup endpoints from seed records. Suites mutate the seed to produce
//! malformed records, drifted identifiers, or unclassifiable shapes.

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::thread;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::Value;
use serde_json::json;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

use super::seed;

/// Seed records served by the stub.
#[derive(Clone, Debug, Default)]
pub struct StubSeed {
    /// `/api/products` records.
    pub products: Vec<Value>,
    /// `/api/catalogues` records.
    pub catalogues: Vec<Value>,
    /// `/api/currencies` records.
    pub currencies: Vec<Value>,
    /// `/api/categories` records.
    pub categories: Vec<Value>,
    /// `/api/catalogue-categories` records.
    pub catalogue_categories: Vec<Value>,
    /// `/api/product-price/{id}` records.
    pub product_prices: Vec<Value>,
    /// Lookup responses that override seed search: (resource, id, body).
    pub lookup_overrides: Vec<(String, i64, Value)>,
}

impl StubSeed {
    /// Returns a fully seeded store matching `fixtures/ids.json`.
    pub fn sample() -> Self {
        Self {
            products: vec![
                seed::product(1, "Espresso Beans"),
                seed::product(2, "Green Tea"),
                seed::product(7, "Cold Brew"),
            ],
            catalogues: vec![seed::catalogue(1, "Spring")],
            currencies: vec![
                seed::currency(1, "USD", "US Dollar", "$"),
                seed::currency(2, "EUR", "Euro", "\u{20ac}"),
            ],
            categories: vec![seed::category(3, "Beverages")],
            catalogue_categories: vec![seed::catalogue_category(1, 3)],
            product_prices: vec![seed::product_price(11)],
            lookup_overrides: Vec::new(),
        }
    }

    /// Returns the list served for a resource path segment, if known.
    fn list(&self, resource: &str) -> Option<&Vec<Value>> {
        match resource {
            "products" => Some(&self.products),
            "catalogues" => Some(&self.catalogues),
            "currencies" => Some(&self.currencies),
            "categories" => Some(&self.categories),
            "catalogue-categories" => Some(&self.catalogue_categories),
            "product-price" => Some(&self.product_prices),
            _ => None,
        }
    }

    /// Returns the id field for a lookup resource, if known.
    fn id_field(resource: &str) -> Option<&'static str> {
        match resource {
            "products" => Some("productId"),
            "catalogues" => Some("catalogueId"),
            "currencies" => Some("currencyId"),
            "categories" => Some("categoryId"),
            "product-price" => Some("productPriceId"),
            _ => None,
        }
    }
}

/// Handle for the spawned stub service.
pub struct StubHandle {
    /// Base URL without a trailing slash.
    base_url: String,
    /// Shutdown signal for the server task.
    shutdown: Option<oneshot::Sender<()>>,
    /// Server thread join handle.
    join: Option<thread::JoinHandle<()>>,
}

impl StubHandle {
    /// Returns the stub base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for StubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns the stub catalogue service on an ephemeral loopback port.
pub fn spawn_stub(seed: StubSeed) -> Result<StubHandle, String> {
    let listener =
        StdTcpListener::bind("127.0.0.1:0").map_err(|err| format!("stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("stub listener nonblocking failed: {err}"))?;
    let addr = listener.local_addr().map_err(|err| format!("stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}");

    let state = Arc::new(seed);
    let app = Router::new()
        .route("/api/:resource", get(handle_list))
        .route("/api/:resource/:id", get(handle_lookup))
        .with_state(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let runtime = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime,
            Err(error) => {
                let _ = error;
                return;
            }
        };
        runtime.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(error) => {
                    let _ = error;
                    return;
                }
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(StubHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
    })
}

/// Serves a list endpoint from the seed.
async fn handle_list(
    State(seed): State<Arc<StubSeed>>,
    Path(resource): Path<String>,
) -> (StatusCode, Json<Value>) {
    seed.list(&resource).map_or_else(
        || {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("unknown resource {resource}") })),
            )
        },
        |records| (StatusCode::OK, Json(Value::Array(records.clone()))),
    )
}

/// Serves a single-resource lookup from the seed.
async fn handle_lookup(
    State(seed): State<Arc<StubSeed>>,
    Path((resource, id)): Path<(String, i64)>,
) -> (StatusCode, Json<Value>) {
    for (override_resource, override_id, body) in &seed.lookup_overrides {
        if override_resource == &resource && *override_id == id {
            return (StatusCode::OK, Json(body.clone()));
        }
    }
    let not_found = (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("no {resource} with id {id}") })),
    );
    let Some(field) = StubSeed::id_field(&resource) else {
        return not_found;
    };
    let Some(records) = seed.list(&resource) else {
        return not_found;
    };
    records
        .iter()
        .find(|record| record.get(field) == Some(&Value::from(id)))
        .map_or(not_found, |record| (StatusCode::OK, Json(record.clone())))
}
