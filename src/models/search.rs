//! Search request, predicate, and response types.

use super::{Product, Provenance, SearchIntent};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Maximum accepted image upload size in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Input to the search operation.
#[derive(Debug, Clone)]
pub enum SearchInput {
    /// A free-text prompt.
    Text(String),
    /// An uploaded photo.
    Image(ImageUpload),
}

/// An uploaded image.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// MIME type as reported by the uploader.
    pub mime_type: String,
    /// Original file name, if any.
    pub file_name: Option<String>,
}

impl ImageUpload {
    /// Creates an upload from bytes and a MIME type.
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
            file_name: None,
        }
    }

    /// Sets the original file name.
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Validates the upload: non-empty, `image/*` MIME type, within the
    /// size limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when any check fails.
    pub fn validate(&self) -> Result<()> {
        if self.bytes.is_empty() {
            return Err(Error::InvalidInput("no image".to_string()));
        }
        if !self.mime_type.starts_with("image/") {
            return Err(Error::InvalidInput(format!(
                "only images allowed, got '{}'",
                self.mime_type
            )));
        }
        if self.bytes.len() > MAX_IMAGE_BYTES {
            return Err(Error::InvalidInput(format!(
                "image exceeds {MAX_IMAGE_BYTES} bytes"
            )));
        }
        Ok(())
    }
}

/// Catalog predicate built from a [`SearchIntent`].
///
/// The in-stock, price, category, and space clauses are conjunctive. The
/// color and keyword clauses are a disjunction with each other: when both are
/// present, either admits a candidate, and the scorer separates strong
/// matches from weak ones afterwards. Any repository backing the Candidate
/// Fetcher must honor this shape; [`ProductQuery::matches`] is the reference
/// evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    /// Price ceiling.
    pub max_price: Option<f64>,
    /// Exact category match.
    pub category: Option<String>,
    /// Require space-efficient products.
    pub space_efficient: bool,
    /// At least one product color must contain one of these (substring,
    /// case-insensitive). Empty means no color clause.
    pub colors: Vec<String>,
    /// At least one of these must occur in name, description, subcategory,
    /// or a tag (substring, case-insensitive). Empty means no keyword clause.
    pub keywords: Vec<String>,
}

impl ProductQuery {
    /// The always-on predicate: in-stock products only.
    #[must_use]
    pub fn in_stock_only() -> Self {
        Self::default()
    }

    /// Evaluates the predicate against a product.
    ///
    /// The in-stock clause is unconditional; every other clause applies only
    /// when populated.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if !product.in_stock {
            return false;
        }

        if let Some(ceiling) = self.max_price {
            if product.price > ceiling {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if product.category != *category {
                return false;
            }
        }

        if self.space_efficient && !product.specifications.space_efficient {
            return false;
        }

        match (self.colors.is_empty(), self.keywords.is_empty()) {
            (true, true) => true,
            (false, true) => self.matches_color(product),
            (true, false) => self.matches_keyword(product),
            (false, false) => self.matches_color(product) || self.matches_keyword(product),
        }
    }

    fn matches_color(&self, product: &Product) -> bool {
        product.specifications.colors.iter().any(|product_color| {
            let product_color = product_color.to_lowercase();
            self.colors
                .iter()
                .any(|wanted| product_color.contains(&wanted.to_lowercase()))
        })
    }

    fn matches_keyword(&self, product: &Product) -> bool {
        let name = product.name.to_lowercase();
        let description = product.description.to_lowercase();
        let subcategory = product
            .subcategory
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        self.keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            name.contains(&keyword)
                || description.contains(&keyword)
                || subcategory.contains(&keyword)
                || product
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&keyword))
        })
    }
}

/// A product paired with its relevance score for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    /// The candidate product.
    #[serde(flatten)]
    pub product: Product,
    /// Additive relevance score, never negative.
    pub relevance_score: u32,
}

/// Diagnostics from the image path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSignals {
    /// Detected label descriptions, most confident first.
    pub detected_labels: Vec<String>,
    /// Detected dominant color names.
    pub detected_colors: Vec<String>,
    /// Label descriptions identified as furniture.
    pub detected_furniture: Vec<String>,
}

/// Ranked search output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The original input: the prompt, or the uploaded file name.
    pub query: String,
    /// The extracted intent, for UI display and debugging.
    pub intent: SearchIntent,
    /// Number of products returned.
    pub count: usize,
    /// Ranked products, best first.
    pub products: Vec<ScoredProduct>,
    /// Which strategy produced the intent.
    pub provenance: Provenance,
    /// Whether an external AI service powered this response.
    #[serde(rename = "usingAI")]
    pub using_ai: bool,
    /// Image-path diagnostics; absent for text search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSignals>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Specifications;

    fn product(name: &str, price: f64) -> Product {
        Product {
            id: format!("id-{name}"),
            name: name.to_string(),
            description: String::new(),
            category: "Living Room".to_string(),
            subcategory: None,
            price,
            discount: 0.0,
            tags: Vec::new(),
            specifications: Specifications::default(),
            in_stock: true,
        }
    }

    #[test]
    fn test_upload_validation() {
        let upload = ImageUpload::new(vec![1, 2, 3], "image/jpeg");
        assert!(upload.validate().is_ok());

        let upload = ImageUpload::new(Vec::new(), "image/png");
        assert!(matches!(upload.validate(), Err(Error::InvalidInput(_))));

        let upload = ImageUpload::new(vec![1], "application/pdf");
        assert!(matches!(upload.validate(), Err(Error::InvalidInput(_))));

        let upload = ImageUpload::new(vec![0; MAX_IMAGE_BYTES + 1], "image/png");
        assert!(matches!(upload.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_in_stock_clause_is_unconditional() {
        let mut out_of_stock = product("Grey Sofa", 1000.0);
        out_of_stock.in_stock = false;
        assert!(!ProductQuery::in_stock_only().matches(&out_of_stock));
        assert!(ProductQuery::in_stock_only().matches(&product("Grey Sofa", 1000.0)));
    }

    #[test]
    fn test_price_ceiling() {
        let query = ProductQuery {
            max_price: Some(2000.0),
            ..Default::default()
        };
        assert!(query.matches(&product("Sofa", 2000.0)));
        assert!(!query.matches(&product("Sofa", 2000.01)));
    }

    #[test]
    fn test_category_is_exact() {
        let query = ProductQuery {
            category: Some("Office".to_string()),
            ..Default::default()
        };
        assert!(!query.matches(&product("Desk", 500.0)));
    }

    #[test]
    fn test_color_clause_is_substring() {
        let mut p = product("Sofa", 1000.0);
        p.specifications.colors = vec!["Light Grey".to_string()];
        let query = ProductQuery {
            colors: vec!["grey".to_string()],
            ..Default::default()
        };
        assert!(query.matches(&p));

        let query = ProductQuery {
            colors: vec!["navy".to_string()],
            ..Default::default()
        };
        assert!(!query.matches(&p));
    }

    #[test]
    fn test_keyword_clause_spans_fields() {
        let mut p = product("Lounge Seat", 1000.0);
        p.subcategory = Some("Armchairs".to_string());
        let query = ProductQuery {
            keywords: vec!["chair".to_string()],
            ..Default::default()
        };
        // "chair" occurs in the subcategory only.
        assert!(query.matches(&p));

        p.subcategory = None;
        assert!(!query.matches(&p));

        p.tags = vec!["armchair".to_string()];
        assert!(query.matches(&p));
    }

    #[test]
    fn test_keyword_clause_is_disjunctive() {
        let p = product("Oak Desk", 900.0);
        let query = ProductQuery {
            keywords: vec!["sofa".to_string(), "desk".to_string()],
            ..Default::default()
        };
        assert!(query.matches(&p));
    }

    #[test]
    fn test_price_clause_is_conjunctive() {
        let mut p = product("Grey Sofa", 3000.0);
        p.specifications.colors = vec!["Grey".to_string()];
        let query = ProductQuery {
            max_price: Some(2000.0),
            colors: vec!["grey".to_string()],
            keywords: vec!["sofa".to_string()],
            ..Default::default()
        };
        // Color and keyword match, price does not.
        assert!(!query.matches(&p));
    }

    #[test]
    fn test_color_and_keyword_clauses_are_a_union() {
        // A product matching the keyword but not the color stays eligible,
        // and vice versa; one matching neither does not.
        let cream_armchair = {
            let mut p = product("Cream Fuzzy Armchair", 2299.0);
            p.specifications.colors = vec!["Cream".to_string()];
            p
        };
        let grey_cushion = {
            let mut p = product("Plain Cushion", 199.0);
            p.specifications.colors = vec!["Grey".to_string()];
            p
        };
        let oak_desk = product("Oak Desk", 900.0);

        let query = ProductQuery {
            colors: vec!["grey".to_string()],
            keywords: vec!["chair".to_string()],
            ..Default::default()
        };
        assert!(query.matches(&cream_armchair));
        assert!(query.matches(&grey_cushion));
        assert!(!query.matches(&oak_desk));
    }
}
