// system-tests/tests/helpers/seed.rs
// ============================================================================
// Module: Seed Records
// Description: Well-formed catalogue records for stub responses.
// Purpose: Give suites a known-good baseline to mutate into failure cases.
// Dependencies: serde_json
// ============================================================================

use serde_json::Value;
use serde_json::json;

/// Seed timestamps shared by all records.
const SEED_STAMP: &str = "2024-01-01T00:00:00Z";

/// Returns a well-formed product record.
pub fn product(id: i64, name: &str) -> Value {
    json!({
        "productId": id,
        "productName": name,
        "productDescription": format!("{name} description"),
        "category": {
            "categoryName": "Beverages",
            "categoryDescription": "Drinks of all kinds"
        },
        "createdAt": SEED_STAMP,
        "createdBy": "seed",
        "updatedAt": SEED_STAMP,
        "updatedBy": "seed",
        "prices": []
    })
}

/// Returns a well-formed catalogue record.
pub fn catalogue(id: i64, name: &str) -> Value {
    json!({
        "catalogueId": id,
        "catalogueName": name,
        "catalogueDescription": format!("{name} description"),
        "createdAt": SEED_STAMP,
        "createdBy": "seed",
        "updatedAt": SEED_STAMP,
        "updatedBy": "seed",
        "categories": []
    })
}

/// Returns a well-formed currency record.
pub fn currency(id: i64, code: &str, name: &str, symbol: &str) -> Value {
    json!({
        "currencyId": id,
        "currencyCode": code,
        "currencyName": name,
        "currencySymbol": symbol,
        "createdAt": SEED_STAMP,
        "createdBy": "seed",
        "updatedAt": SEED_STAMP,
        "updatedBy": "seed"
    })
}

/// Returns a well-formed category record.
pub fn category(id: i64, name: &str) -> Value {
    json!({
        "categoryId": id,
        "categoryName": name,
        "categoryDescription": format!("{name} description"),
        "createdAt": SEED_STAMP,
        "createdBy": "seed",
        "updatedAt": SEED_STAMP,
        "updatedBy": "seed",
        "products": []
    })
}

/// Returns a well-formed catalogue-category pair record.
pub fn catalogue_category(catalogue_id: i64, category_id: i64) -> Value {
    json!({
        "catalogueId": catalogue_id,
        "catalogueName": "Spring",
        "categoryId": category_id,
        "categoryName": "Beverages",
        "createdAt": SEED_STAMP,
        "createdBy": "seed",
        "updatedAt": SEED_STAMP,
        "updatedBy": "seed"
    })
}

/// Returns a product price record for id lookups.
pub fn product_price(id: i64) -> Value {
    json!({
        "productPriceId": id,
        "price": "4.50",
        "createdAt": SEED_STAMP,
        "createdBy": "seed",
        "updatedAt": SEED_STAMP,
        "updatedBy": "seed"
    })
}
