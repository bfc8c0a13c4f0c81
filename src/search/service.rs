//! Search orchestration.
//!
//! One request-scoped unit of work per call: extract → filter → fetch →
//! score → select. External AI failures degrade; repository failures are
//! fatal to the request.

use super::{filter, scorer, selector};
use crate::catalog::ProductRepository;
use crate::config::SearchConfig;
use crate::extract;
use crate::models::{
    ImageSignals, ImageUpload, Provenance, ScoredProduct, SearchInput, SearchIntent,
    SearchResponse,
};
use crate::nlp::{EntityAnalyzer, VisionAnalyzer};
use crate::{Error, Result};
use std::sync::Arc;

/// Labels reported when no vision service is available.
const DEFAULT_LABELS: &[&str] = &["Furniture", "Interior"];
/// Colors reported when no vision service is available.
const DEFAULT_COLORS: &[&str] = &["Brown", "Neutral"];
/// Furniture terms reported when no vision service is available.
const DEFAULT_FURNITURE: &[&str] = &["furniture"];
/// How many labels to echo back in image diagnostics.
const LABEL_DIAGNOSTIC_COUNT: usize = 10;

/// The product search service.
///
/// Holds the repository and the optional AI collaborators. All state is
/// request-scoped; the service itself is shareable across threads.
pub struct SearchService {
    repository: Arc<dyn ProductRepository>,
    entity_analyzer: Option<Arc<dyn EntityAnalyzer>>,
    vision_analyzer: Option<Arc<dyn VisionAnalyzer>>,
    config: SearchConfig,
}

impl SearchService {
    /// Creates a service over a repository, with no AI collaborators.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            repository,
            entity_analyzer: None,
            vision_analyzer: None,
            config: SearchConfig::default(),
        }
    }

    /// Attaches an entity-analysis service.
    #[must_use]
    pub fn with_entity_analyzer(mut self, analyzer: Arc<dyn EntityAnalyzer>) -> Self {
        self.entity_analyzer = Some(analyzer);
        self
    }

    /// Attaches a vision service.
    #[must_use]
    pub fn with_vision_analyzer(mut self, analyzer: Arc<dyn VisionAnalyzer>) -> Self {
        self.vision_analyzer = Some(analyzer);
        self
    }

    /// Replaces the pipeline configuration.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs a search over either surface form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a rejected prompt or upload and
    /// [`Error::OperationFailed`] when the repository fetch fails. AI
    /// service problems never surface here.
    pub fn search(&self, input: SearchInput) -> Result<SearchResponse> {
        match input {
            SearchInput::Text(prompt) => self.search_text(&prompt),
            SearchInput::Image(upload) => self.search_image(&upload),
        }
    }

    /// Text-prompt search.
    ///
    /// # Errors
    ///
    /// See [`SearchService::search`].
    pub fn search_text(&self, prompt: &str) -> Result<SearchResponse> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(Error::InvalidInput("prompt is required".to_string()));
        }

        let span = tracing::info_span!("search.text", prompt_len = prompt.len());
        let _guard = span.enter();

        let (intent, provenance) = extract::text_intent(
            self.entity_analyzer.clone(),
            prompt,
            &self.config.extraction,
        );
        tracing::debug!(?intent, %provenance, "Extracted intent");

        let query = filter::build_query(&intent);
        let candidates = self.repository.find(&query, self.config.max_candidates)?;
        tracing::debug!(candidates = candidates.len(), "Fetched candidates");

        let scored = candidates
            .into_iter()
            .map(|product| {
                let relevance_score = scorer::score_product(&product, &intent, &scorer::TEXT_WEIGHTS);
                ScoredProduct {
                    product,
                    relevance_score,
                }
            })
            .collect();

        let products = selector::rank(scored, self.config.max_results);
        tracing::info!(count = products.len(), %provenance, "Text search complete");

        Ok(SearchResponse {
            query: prompt.to_string(),
            intent,
            count: products.len(),
            products,
            provenance,
            using_ai: provenance.is_ai(),
            image: None,
        })
    }

    /// Image-upload search.
    ///
    /// # Errors
    ///
    /// See [`SearchService::search`].
    pub fn search_image(&self, upload: &ImageUpload) -> Result<SearchResponse> {
        upload.validate()?;

        let span = tracing::info_span!("search.image", bytes = upload.bytes.len());
        let _guard = span.enter();

        let query_name = upload
            .file_name
            .clone()
            .unwrap_or_else(|| "uploaded image".to_string());

        let Some(ref vision) = self.vision_analyzer else {
            tracing::debug!("No vision service configured, using default image response");
            return self.default_image_response(query_name);
        };

        let signals = vision
            .detect_labels(&upload.bytes)
            .and_then(|labels| vision.dominant_colors(&upload.bytes).map(|c| (labels, c)));

        match signals {
            Ok((labels, colors)) => self.ranked_image_response(query_name, &labels, &colors),
            Err(err) => {
                // Vision trouble is an occasion to degrade, not to fail the
                // request.
                metrics::counter!("search_vision_failed").increment(1);
                tracing::warn!(error = %err, "Vision analysis failed, using default image response");
                self.default_image_response(query_name)
            },
        }
    }

    /// The AI-powered image path: label/color signals → filter → score with
    /// image weights → floor with top-8 fallback.
    fn ranked_image_response(
        &self,
        query_name: String,
        labels: &[crate::nlp::Label],
        colors: &[crate::nlp::DominantColor],
    ) -> Result<SearchResponse> {
        let furniture = extract::furniture_terms(labels);
        let color_names = extract::dominant_color_names(colors);
        tracing::debug!(?furniture, ?color_names, "Detected image signals");

        let intent = extract::intent_from_image(&furniture, &color_names);

        // Only furniture terms filter; detected colors influence scoring.
        let query = crate::models::ProductQuery {
            keywords: furniture.clone(),
            ..Default::default()
        };
        let candidates = self.repository.find(&query, self.config.max_candidates)?;

        let scored = candidates
            .into_iter()
            .map(|product| {
                let relevance_score =
                    scorer::score_product(&product, &intent, &scorer::IMAGE_WEIGHTS);
                ScoredProduct {
                    product,
                    relevance_score,
                }
            })
            .collect();

        let products = selector::rank_with_floor(
            scored,
            self.config.image_score_floor,
            self.config.max_results,
            self.config.image_fallback_results,
        );
        tracing::info!(count = products.len(), "Image search complete");

        Ok(SearchResponse {
            query: query_name,
            intent,
            count: products.len(),
            products,
            provenance: Provenance::CloudVision,
            using_ai: true,
            image: Some(ImageSignals {
                detected_labels: labels
                    .iter()
                    .take(LABEL_DIAGNOSTIC_COUNT)
                    .map(|l| l.description.clone())
                    .collect(),
                detected_colors: color_names,
                detected_furniture: furniture,
            }),
        })
    }

    /// The credential-less image path: a fixed set of in-stock products at a
    /// flat score, with neutral diagnostics.
    fn default_image_response(&self, query_name: String) -> Result<SearchResponse> {
        let candidates = self.repository.find(
            &crate::models::ProductQuery::in_stock_only(),
            self.config.image_default_results,
        )?;

        let products: Vec<ScoredProduct> = candidates
            .into_iter()
            .map(|product| ScoredProduct {
                product,
                relevance_score: self.config.default_image_score,
            })
            .collect();

        let mut intent = SearchIntent::new();
        for term in DEFAULT_FURNITURE {
            intent.push_furniture_type(*term);
        }
        for color in DEFAULT_COLORS {
            intent.push_color(color.to_lowercase());
        }

        Ok(SearchResponse {
            query: query_name,
            intent,
            count: products.len(),
            products,
            provenance: Provenance::PatternMatch,
            using_ai: false,
            image: Some(ImageSignals {
                detected_labels: DEFAULT_LABELS.iter().map(ToString::to_string).collect(),
                detected_colors: DEFAULT_COLORS.iter().map(ToString::to_string).collect(),
                detected_furniture: DEFAULT_FURNITURE.iter().map(ToString::to_string).collect(),
            }),
        })
    }
}
