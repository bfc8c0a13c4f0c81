//! Entity-analysis extraction.
//!
//! Maps entities returned by the NLP service onto the shared vocabularies.
//! Colors are additionally scanned straight from the prompt: entity
//! segmentation tends to fold adjectives into the noun phrase, so a direct
//! substring pass catches colors the entity list misses.

use super::price::detect_max_price;
use crate::models::SearchIntent;
use crate::nlp::Entity;
use crate::vocab;

/// Builds an intent from analyzed entities plus the raw prompt.
#[must_use]
pub fn intent_from_entities(entities: &[Entity], prompt: &str) -> SearchIntent {
    let mut intent = SearchIntent::new();

    for entity in entities {
        let name = entity.name.to_lowercase();

        for canonical in vocab::match_furniture_types(&name) {
            intent.push_furniture_type(canonical);
        }
        for color in vocab::match_colors(&name) {
            intent.push_color(color);
        }
        for style in vocab::match_styles(&name) {
            intent.push_style(style);
        }
    }

    let lower = prompt.to_lowercase();
    for color in vocab::match_colors(&lower) {
        intent.push_color(color);
    }

    if let Some(price) = detect_max_price(prompt) {
        intent.record_price(price);
    }

    intent.space_efficient = vocab::mentions_space_constraint(&lower);

    intent
}
