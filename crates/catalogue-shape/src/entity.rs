// crates/catalogue-shape/src/entity.rs
// ============================================================================
// Module: Entity Kinds
// Description: Closed set of catalogue entity kinds and their key tables.
// Purpose: Provide stable labels and required-key sets for validation.
// Dependencies: serde
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

/// Entity kinds returned by the catalogue service.
///
/// # Invariants
/// - Variants are stable for report labeling.
/// - Each kind maps to a fixed, closed required-key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum EntityKind {
    /// Product record with nested category detail.
    Product,
    /// Catalogue record owning a list of categories.
    Catalogue,
    /// Currency record.
    Currency,
    /// Category record owning a list of products.
    Category,
    /// Catalogue-category pairing record.
    CatalogueCategory,
}

impl EntityKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Catalogue => "catalogue",
            Self::Currency => "currency",
            Self::Category => "category",
            Self::CatalogueCategory => "catalogue-category",
        }
    }

    /// Returns the top-level keys every record of this kind must carry.
    #[must_use]
    pub const fn required_keys(self) -> &'static [&'static str] {
        match self {
            Self::Product => &[
                "productId",
                "productName",
                "productDescription",
                "category",
                "createdAt",
                "createdBy",
                "updatedAt",
                "updatedBy",
                "prices",
            ],
            Self::Catalogue => &[
                "catalogueId",
                "catalogueName",
                "catalogueDescription",
                "createdAt",
                "createdBy",
                "updatedAt",
                "updatedBy",
                "categories",
            ],
            Self::Currency => &[
                "currencyId",
                "currencyCode",
                "currencyName",
                "currencySymbol",
                "createdAt",
                "createdBy",
                "updatedAt",
                "updatedBy",
            ],
            Self::Category => &[
                "categoryId",
                "categoryName",
                "categoryDescription",
                "createdAt",
                "createdBy",
                "updatedAt",
                "updatedBy",
                "products",
            ],
            Self::CatalogueCategory => &[
                "catalogueId",
                "catalogueName",
                "categoryId",
                "categoryName",
                "createdAt",
                "createdBy",
                "updatedAt",
                "updatedBy",
            ],
        }
    }

    /// Returns nested `(parent, key)` pairs the kind must carry, if any.
    ///
    /// Only products require nested keys: the embedded `category` record
    /// must expose its name and description.
    #[must_use]
    pub const fn required_nested_keys(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Product => &[
                ("category", "categoryName"),
                ("category", "categoryDescription"),
            ],
            _ => &[],
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
