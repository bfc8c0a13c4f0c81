//! In-memory product catalog.

use super::ProductRepository;
use crate::models::{Product, ProductQuery};
use crate::{Error, Result};
use std::path::Path;

/// A product catalog held in memory, loaded from a JSON document list.
///
/// Evaluation walks products in insertion order, so repeated queries over the
/// same catalog return candidates in a stable order, which is what breaks
/// score ties downstream.
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Creates a catalog from a list of products.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Loads a catalog from a JSON file containing an array of products.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OperationFailed`] when the file cannot be read or
    /// parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_catalog_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;

        let products: Vec<Product> =
            serde_json::from_str(&contents).map_err(|e| Error::OperationFailed {
                operation: "parse_catalog_file".to_string(),
                cause: e.to_string(),
            })?;

        tracing::debug!(count = products.len(), path = %path.display(), "Loaded catalog");
        Ok(Self::from_products(products))
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductRepository for InMemoryCatalog {
    fn find(&self, query: &ProductQuery, limit: usize) -> Result<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| query.matches(p))
            .take(limit)
            .cloned()
            .collect())
    }
}
