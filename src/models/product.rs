//! Catalog product model.
//!
//! Products are external, read-only entities. Field names follow the
//! storefront's camelCase catalog documents; unknown fields are ignored so
//! richer catalogs deserialize without modification.

use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identity.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Top-level category.
    pub category: String,
    /// Optional subcategory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Price, non-negative.
    pub price: f64,
    /// Discount percentage, 0-100.
    #[serde(default)]
    pub discount: f64,
    /// Free-form classifier tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Physical specifications.
    #[serde(default)]
    pub specifications: Specifications,
    /// Only in-stock products are eligible candidates.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// Product specifications relevant to search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    /// Available color names.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Style tags.
    #[serde(default)]
    pub style: Vec<String>,
    /// Whether the product suits space-constrained rooms.
    #[serde(default)]
    pub space_efficient: bool,
}

const fn default_in_stock() -> bool {
    true
}
