//! Deterministic pattern-matching extraction.
//!
//! The fallback strategy: no external calls, vocabulary substring matching
//! only. Also used to supplement a partial AI result that found no furniture
//! types.

use super::price::detect_max_price;
use crate::models::SearchIntent;
use crate::vocab;

/// Extracts an intent from a prompt using pattern matching alone.
#[must_use]
pub fn extract_intent(prompt: &str) -> SearchIntent {
    let mut intent = SearchIntent::new();
    supplement_intent(&mut intent, prompt);
    intent
}

/// Fills `intent` with pattern-matched signals from `prompt`.
///
/// Furniture types resolve through surface-form synonyms ("couch" → "sofa"),
/// colors by plain substring containment. An already-detected price is kept;
/// the scan only fills `max_price` when absent. Existing tokens are preserved
/// and deduplicated by the intent's push methods.
pub fn supplement_intent(intent: &mut SearchIntent, prompt: &str) {
    let lower = prompt.to_lowercase();

    for canonical in vocab::match_furniture_types(&lower) {
        intent.push_furniture_type(canonical);
    }

    for color in vocab::match_colors(&lower) {
        intent.push_color(color);
    }

    if intent.max_price.is_none() {
        if let Some(price) = detect_max_price(prompt) {
            intent.record_price(price);
        }
    }
}
