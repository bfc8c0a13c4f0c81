//! Image-signal extraction.
//!
//! Maps vision labels and dominant RGB colors onto search signals. The RGB
//! classifier is a fixed threshold ladder; rule order matters (specific
//! buckets before generic fallbacks) and the cut points are pinned by tests.

use crate::models::SearchIntent;
use crate::nlp::{DominantColor, Label, Rgb};
use crate::vocab;

/// How many dominant colors to keep, most confident first.
const DOMINANT_COLOR_COUNT: usize = 3;

/// Classifies an RGB triple into a named color bucket.
///
/// First matching rule wins.
#[must_use]
pub fn rgb_to_color_name(rgb: &Rgb) -> &'static str {
    let (r, g, b) = (rgb.red, rgb.green, rgb.blue);

    if r < 50.0 && g < 50.0 && b < 50.0 {
        return "black";
    }
    if r > 200.0 && g > 200.0 && b > 200.0 {
        return "white";
    }
    if r > 150.0 && g < 100.0 && b < 100.0 {
        return "red";
    }
    if r < 100.0 && g > 150.0 && b < 100.0 {
        return "green";
    }
    if r < 100.0 && g < 100.0 && b > 150.0 {
        return "blue";
    }
    if r > 150.0 && g > 150.0 && b < 100.0 {
        return "yellow";
    }
    if r > 120.0 && g > 80.0 && b < 80.0 {
        return "brown";
    }
    if r > 100.0 && g > 100.0 && b > 100.0 {
        return "grey";
    }
    if r > 150.0 && g > 120.0 && b < 100.0 {
        return "beige";
    }
    "neutral"
}

/// Lowercased descriptions of labels that identify furniture, deduplicated,
/// label order preserved.
#[must_use]
pub fn furniture_terms(labels: &[Label]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for label in labels {
        if vocab::is_furniture_label(&label.description) {
            let term = label.description.to_lowercase();
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
    }
    terms
}

/// Names of the most confident dominant colors.
///
/// Kept as classified, so the diagnostic list can repeat a bucket; the
/// intent boundary deduplicates before scoring.
#[must_use]
pub fn dominant_color_names(colors: &[DominantColor]) -> Vec<String> {
    let mut sorted: Vec<&DominantColor> = colors.iter().collect();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    sorted
        .into_iter()
        .take(DOMINANT_COLOR_COUNT)
        .map(|c| rgb_to_color_name(&c.color).to_string())
        .collect()
}

/// Builds an intent from detected furniture terms and color names.
#[must_use]
pub fn intent_from_image(furniture: &[String], color_names: &[String]) -> SearchIntent {
    let mut intent = SearchIntent::new();
    for term in furniture {
        intent.push_furniture_type(term.clone());
    }
    for color in color_names {
        intent.push_color(color.clone());
    }
    intent
}
