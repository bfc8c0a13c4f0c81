//! # Shopsight
//!
//! AI-assisted product search core for furniture storefronts.
//!
//! Shopsight turns free-text prompts or uploaded photos into structured
//! shopping intent, filters a product catalog with it, and re-ranks the
//! candidates with an additive relevance score.
//!
//! ## Pipeline
//!
//! ```text
//! raw input → intent extraction → catalog predicate → bounded fetch
//!           → relevance scoring → stable sort + truncation → ranked output
//! ```
//!
//! Intent extraction runs two independent strategies: an external
//! entity-analysis (or vision) service, and a deterministic pattern-matching
//! fallback. The external service is treated as unreliable: timeouts,
//! missing credentials, and transport errors all degrade to the fallback
//! instead of failing the request.
//!
//! ## Example
//!
//! ```rust,ignore
//! use shopsight::{InMemoryCatalog, SearchInput, SearchService};
//!
//! let catalog = InMemoryCatalog::from_json_file("catalog.json")?;
//! let service = SearchService::new(Arc::new(catalog));
//! let response = service.search(SearchInput::Text("white couch under 2000".into()))?;
//! println!("{} products", response.count);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod catalog;
pub mod config;
pub mod extract;
pub mod models;
pub mod nlp;
pub mod observability;
pub mod search;
pub mod vocab;

// Re-exports for convenience
pub use catalog::{InMemoryCatalog, ProductRepository};
pub use config::ShopsightConfig;
pub use models::{
    ImageSignals, ImageUpload, Product, ProductQuery, Provenance, ScoredProduct, SearchInput,
    SearchIntent, SearchResponse, Specifications,
};
pub use nlp::{EntityAnalyzer, VisionAnalyzer};
pub use search::SearchService;

/// Error type for shopsight operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty prompt, missing/oversized/non-image upload |
/// | `ServiceUnavailable` | NLP/Vision credential missing, request timeout, transport error |
/// | `OperationFailed` | Repository fetch fails, catalog file unreadable, config malformed |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - The search prompt is empty or whitespace-only
    /// - An image upload is missing, empty, or not an `image/*` MIME type
    /// - An image upload exceeds the size limit
    ///
    /// Surfaced to the caller as a rejected request; no partial processing
    /// is attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An external AI service could not be reached or used.
    ///
    /// Raised when:
    /// - No API credential is configured for the service
    /// - The request times out or the transport fails
    /// - The service returns a non-success status or an unparseable body
    ///
    /// Recovered internally: extraction logs the failure and switches to the
    /// pattern-matching fallback. Never propagated to the search caller.
    #[error("service '{service}' unavailable: {cause}")]
    ServiceUnavailable {
        /// The service that was unavailable.
        service: String,
        /// The underlying cause.
        cause: String,
    },

    /// An operation failed.
    ///
    /// Raised when:
    /// - The product repository fetch fails
    /// - A catalog file cannot be read or parsed
    /// - A configuration file is malformed
    ///
    /// Fatal to the request; no ranked-from-empty-set result is synthesized.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for shopsight operations.
pub type Result<T> = std::result::Result<T, Error>;
