// crates/catalogue-client/src/resource.rs
// ============================================================================
// Module: Resource Kinds
// Description: Closed set of lookup resource kinds and their id fields.
// Purpose: Replace string-discriminator dispatch with an enumerated table
//          that rejects unknown resource names explicitly.
// Dependencies: serde, thiserror
// ============================================================================

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Resource kinds addressable by id lookup.
///
/// # Invariants
/// - Variants are stable for event labeling.
/// - Every kind maps to exactly one path segment and one id field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ResourceKind {
    /// `/api/products/{id}` lookups.
    Products,
    /// `/api/catalogues/{id}` lookups.
    Catalogues,
    /// `/api/currencies/{id}` lookups.
    Currencies,
    /// `/api/categories/{id}` lookups.
    Categories,
    /// `/api/product-price/{id}` lookups.
    ProductPrices,
}

/// Error for unknown resource discriminator strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind `{0}`")]
pub struct ParseResourceError(
    /// The unknown discriminator string.
    pub String,
);

impl ResourceKind {
    /// Returns the URL path segment for this kind.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Catalogues => "catalogues",
            Self::Currencies => "currencies",
            Self::Categories => "categories",
            Self::ProductPrices => "product-price",
        }
    }

    /// Returns the identifier field asserted on single-resource lookups.
    #[must_use]
    pub const fn id_field(self) -> &'static str {
        match self {
            Self::Products => "productId",
            Self::Catalogues => "catalogueId",
            Self::Currencies => "currencyId",
            Self::Categories => "categoryId",
            Self::ProductPrices => "productPriceId",
        }
    }

    /// Returns the list endpoint path for this kind.
    #[must_use]
    pub fn list_path(self) -> String {
        format!("/api/{}", self.path_segment())
    }
}

impl FromStr for ResourceKind {
    type Err = ParseResourceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "products" => Ok(Self::Products),
            "catalogues" => Ok(Self::Catalogues),
            "currencies" => Ok(Self::Currencies),
            "categories" => Ok(Self::Categories),
            "product-price" => Ok(Self::ProductPrices),
            other => Err(ParseResourceError(other.to_string())),
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}
