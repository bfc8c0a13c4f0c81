//! Relevance scoring.
//!
//! Pure additive point system with no cap. The text and image paths weight
//! the same signals differently; the asymmetry is deliberate (image-detected
//! signals are noisier).

use crate::models::{Product, SearchIntent};

/// Points awarded per matched signal.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    /// Furniture type occurs in the product name (per matched type).
    pub type_in_name: u32,
    /// Furniture type occurs in the description (per matched type).
    pub type_in_description: u32,
    /// A product color contains an intent color (per matched intent color).
    pub color_match: u32,
    /// A product style contains an intent style (per matched intent style).
    pub style_match: u32,
    /// Intent category equals the product category (flat).
    pub category_bonus: u32,
}

/// Weights for the text-search path.
pub const TEXT_WEIGHTS: ScoreWeights = ScoreWeights {
    type_in_name: 20,
    type_in_description: 10,
    color_match: 15,
    style_match: 10,
    category_bonus: 15,
};

/// Weights for the image-search path.
pub const IMAGE_WEIGHTS: ScoreWeights = ScoreWeights {
    type_in_name: 10,
    type_in_description: 5,
    color_match: 15,
    style_match: 0,
    category_bonus: 0,
};

/// Scores a candidate against the intent. Deterministic and side-effect
/// free; a product with no matching signal scores 0 and stays eligible.
#[must_use]
pub fn score_product(product: &Product, intent: &SearchIntent, weights: &ScoreWeights) -> u32 {
    let mut score = 0;
    let name = product.name.to_lowercase();
    let description = product.description.to_lowercase();

    for furniture_type in &intent.furniture_types {
        let token = furniture_type.to_lowercase();
        if name.contains(&token) {
            score += weights.type_in_name;
        }
        if description.contains(&token) {
            score += weights.type_in_description;
        }
    }

    for color in &intent.colors {
        let wanted = color.to_lowercase();
        let has_color = product
            .specifications
            .colors
            .iter()
            .any(|c| c.to_lowercase().contains(&wanted));
        if has_color {
            score += weights.color_match;
        }
    }

    for style in &intent.styles {
        let wanted = style.to_lowercase();
        let has_style = product
            .specifications
            .style
            .iter()
            .any(|s| s.to_lowercase().contains(&wanted));
        if has_style {
            score += weights.style_match;
        }
    }

    if let Some(ref category) = intent.category {
        if *category == product.category {
            score += weights.category_bonus;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Specifications;

    fn product(name: &str, description: &str) -> Product {
        Product {
            id: "p-1".to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: "Living Room".to_string(),
            subcategory: None,
            price: 1000.0,
            discount: 0.0,
            tags: Vec::new(),
            specifications: Specifications::default(),
            in_stock: true,
        }
    }

    fn intent_with_type(furniture_type: &str) -> SearchIntent {
        let mut intent = SearchIntent::new();
        intent.push_furniture_type(furniture_type);
        intent
    }

    #[test]
    fn test_type_in_name_and_description() {
        let p = product("Velvet Sofa", "A sofa for the lounge");
        let intent = intent_with_type("sofa");
        assert_eq!(score_product(&p, &intent, &TEXT_WEIGHTS), 30);
    }

    #[test]
    fn test_each_matched_type_accumulates() {
        let p = product("Sofa and Chair Set", "Includes a sofa and a chair");
        let mut intent = intent_with_type("sofa");
        intent.push_furniture_type("chair");
        // Two types, each in name (+20) and description (+10).
        assert_eq!(score_product(&p, &intent, &TEXT_WEIGHTS), 60);
    }

    #[test]
    fn test_color_match_is_substring_per_intent_color() {
        let mut p = product("Sofa", "");
        p.specifications.colors = vec!["Light Grey".to_string(), "Charcoal".to_string()];
        let mut intent = SearchIntent::new();
        intent.push_color("grey");
        intent.push_color("charcoal");
        intent.push_color("navy");
        // Two intent colors matched, one not.
        assert_eq!(score_product(&p, &intent, &TEXT_WEIGHTS), 30);
    }

    #[test]
    fn test_style_match() {
        let mut p = product("Desk", "");
        p.specifications.style = vec!["Scandinavian".to_string()];
        let mut intent = SearchIntent::new();
        intent.push_style("scandinavian");
        assert_eq!(score_product(&p, &intent, &TEXT_WEIGHTS), 10);
    }

    #[test]
    fn test_category_bonus_is_flat_and_exact() {
        let p = product("Sofa", "");
        let mut intent = SearchIntent::new();
        intent.category = Some("Living Room".to_string());
        assert_eq!(score_product(&p, &intent, &TEXT_WEIGHTS), 15);

        intent.category = Some("living room".to_string());
        assert_eq!(score_product(&p, &intent, &TEXT_WEIGHTS), 0);
    }

    #[test]
    fn test_zero_matches_scores_zero() {
        let p = product("Wardrobe", "Spacious");
        let intent = intent_with_type("sofa");
        assert_eq!(score_product(&p, &intent, &TEXT_WEIGHTS), 0);
    }

    #[test]
    fn test_monotonicity_adding_type_keyword_to_name() {
        let without = product("Lounge Piece", "Comfortable");
        let with = product("Lounge Sofa Piece", "Comfortable");
        let intent = intent_with_type("sofa");
        assert!(
            score_product(&with, &intent, &TEXT_WEIGHTS)
                > score_product(&without, &intent, &TEXT_WEIGHTS)
        );
    }

    #[test]
    fn test_image_weights() {
        let mut p = product("Oak Coffee Table", "A coffee table in oak");
        p.specifications.colors = vec!["Brown".to_string()];
        let mut intent = SearchIntent::new();
        intent.push_furniture_type("coffee table");
        intent.push_color("brown");
        // name +10, description +5, color +15
        assert_eq!(score_product(&p, &intent, &IMAGE_WEIGHTS), 30);
    }
}
