//! Intent extraction.
//!
//! Two independently invocable strategies, attempted in order:
//!
//! 1. **Entity analysis**: the external NLP service, bounded by a timeout.
//! 2. **Pattern matching**: deterministic vocabulary scanning, always
//!    available.
//!
//! The fallback runs when the service is unconfigured, disabled, errors,
//! times out, or finds no furniture types. A partial AI result (colors but no
//! types) is supplemented in place rather than discarded.

mod entities;
mod image;
mod price;
mod text;

pub use entities::intent_from_entities;
pub use image::{dominant_color_names, furniture_terms, intent_from_image, rgb_to_color_name};
pub use price::detect_max_price;
pub use text::{extract_intent, supplement_intent};

use crate::models::{Provenance, SearchIntent};
use crate::nlp::{Entity, EntityAnalyzer};
use std::sync::{Arc, mpsc};
use std::time::Duration;

/// Configuration for intent extraction.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionConfig {
    /// Whether to attempt the entity-analysis strategy at all.
    pub use_nlp: bool,
    /// Timeout for the NLP call, after which the fallback is used.
    pub nlp_timeout_ms: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            use_nlp: true,
            nlp_timeout_ms: 2_000,
        }
    }
}

/// Extracts an intent from a text prompt, degrading to pattern matching.
///
/// Never fails: every NLP problem is absorbed here. The returned provenance
/// names the strategy that actually produced the intent, so a request that
/// fell back reports [`Provenance::PatternMatch`] even when a credential is
/// configured.
#[must_use]
pub fn text_intent(
    analyzer: Option<Arc<dyn EntityAnalyzer>>,
    prompt: &str,
    config: &ExtractionConfig,
) -> (SearchIntent, Provenance) {
    if !config.use_nlp {
        return (extract_intent(prompt), Provenance::PatternMatch);
    }
    let Some(analyzer) = analyzer else {
        return (extract_intent(prompt), Provenance::PatternMatch);
    };

    let timeout = Duration::from_millis(config.nlp_timeout_ms);
    match run_analysis_with_timeout(analyzer, prompt.to_string(), timeout) {
        Some(entities) => {
            let mut intent = intent_from_entities(&entities, prompt);
            if intent.furniture_types.is_empty() {
                // The service answered but recognized nothing useful;
                // pattern matching fills in types (and anything else it
                // finds) on top of the partial result.
                supplement_intent(&mut intent, prompt);
                (intent, Provenance::PatternMatch)
            } else {
                (intent, Provenance::CloudNlp)
            }
        },
        None => (extract_intent(prompt), Provenance::PatternMatch),
    }
}

/// Runs entity analysis on a helper thread with a timeout.
///
/// # Thread Lifecycle
///
/// If the timeout is exceeded the result is discarded and the thread runs to
/// completion naturally: threads cannot be killed, and interrupting an HTTP
/// request mid-flight can leak resources. The orphaned call is recorded in
/// metrics and the HTTP client's own timeout bounds how long it lingers.
fn run_analysis_with_timeout(
    analyzer: Arc<dyn EntityAnalyzer>,
    prompt: String,
    timeout: Duration,
) -> Option<Vec<Entity>> {
    let (tx, rx) = mpsc::channel();
    let parent_span = tracing::Span::current();

    metrics::counter!("search_nlp_started").increment(1);

    std::thread::spawn(move || {
        let _parent = parent_span.enter();
        let span = tracing::info_span!("extract.entity_analysis");
        let _guard = span.enter();
        let result = analyzer.analyze_entities(&prompt);
        // If the receiver dropped (timeout), send fails silently - expected.
        let _ = tx.send(result);
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(entities)) => {
            metrics::counter!("search_nlp_completed", "status" => "success").increment(1);
            Some(entities)
        },
        Ok(Err(err)) => {
            metrics::counter!("search_nlp_completed", "status" => "error").increment(1);
            tracing::warn!(error = %err, "entity analysis failed, falling back to pattern matching");
            None
        },
        Err(mpsc::RecvTimeoutError::Timeout) => {
            metrics::counter!("search_nlp_timeout_total", "reason" => "timeout").increment(1);
            metrics::counter!("search_nlp_completed", "status" => "timeout").increment(1);
            tracing::debug!("entity analysis timed out, thread will complete in background");
            None
        },
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            metrics::counter!("search_nlp_timeout_total", "reason" => "disconnected").increment(1);
            metrics::counter!("search_nlp_completed", "status" => "disconnected").increment(1);
            None
        },
    }
}
