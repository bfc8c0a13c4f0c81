//! Shared vocabulary tables for intent extraction.
//!
//! Static lookup data used by both extraction strategies (entity analysis and
//! pattern matching) and by the image-label path. Keeping one table per
//! concern here prevents the strategies from drifting apart.

/// Bumped whenever a table gains or loses tokens. Diagnostic only.
pub const VOCABULARY_VERSION: u32 = 2;

/// A canonical furniture type with the surface forms that map to it.
#[derive(Debug)]
pub struct FurnitureType {
    /// The canonical token stored in the intent.
    pub canonical: &'static str,
    /// Surface forms matched against input text (substring, lowercase).
    pub surface_forms: &'static [&'static str],
}

/// Canonical furniture types and their surface-form synonyms.
pub static FURNITURE_TYPES: &[FurnitureType] = &[
    FurnitureType {
        canonical: "sofa",
        surface_forms: &["sofa", "couch"],
    },
    FurnitureType {
        canonical: "loveseat",
        surface_forms: &["loveseat"],
    },
    FurnitureType {
        canonical: "sectional",
        surface_forms: &["sectional"],
    },
    FurnitureType {
        canonical: "chair",
        surface_forms: &["chair", "armchair", "recliner"],
    },
    FurnitureType {
        canonical: "table",
        surface_forms: &["table", "coffee table", "dining table", "side table"],
    },
    FurnitureType {
        canonical: "desk",
        surface_forms: &["desk"],
    },
    FurnitureType {
        canonical: "bed",
        surface_forms: &["bed"],
    },
    FurnitureType {
        canonical: "dresser",
        surface_forms: &["dresser", "drawer"],
    },
    FurnitureType {
        canonical: "cabinet",
        surface_forms: &["cabinet"],
    },
    FurnitureType {
        canonical: "shelf",
        surface_forms: &["shelf", "bookcase", "bookshelf"],
    },
    FurnitureType {
        canonical: "wardrobe",
        surface_forms: &["wardrobe"],
    },
    FurnitureType {
        canonical: "nightstand",
        surface_forms: &["nightstand"],
    },
];

/// Color names recognized in prompts, entity names, and catalog entries.
pub static COLORS: &[&str] = &[
    "grey",
    "gray",
    "beige",
    "white",
    "black",
    "blue",
    "navy",
    "green",
    "brown",
    "pink",
    "red",
    "yellow",
    "charcoal",
    "cream",
    "sage",
    "mustard",
    "terracotta",
];

/// Style adjectives recognized in prompts and entity names.
pub static STYLES: &[&str] = &[
    "modern",
    "minimalist",
    "scandinavian",
    "industrial",
    "contemporary",
    "traditional",
    "rustic",
    "vintage",
];

/// Keywords that signal a space-constrained shopper.
pub static SPACE_KEYWORDS: &[&str] = &["small", "compact", "studio", "apartment", "tiny", "space"];

/// Keywords that identify furniture among image labels.
pub static IMAGE_FURNITURE_KEYWORDS: &[&str] = &[
    "furniture",
    "chair",
    "table",
    "sofa",
    "couch",
    "bed",
    "desk",
    "cabinet",
    "shelf",
    "storage",
    "dresser",
    "nightstand",
    "wardrobe",
];

/// Returns the canonical furniture types whose surface forms occur in `text`.
///
/// `text` must already be lowercased. Each canonical token appears at most
/// once, in table order.
#[must_use]
pub fn match_furniture_types(text: &str) -> Vec<&'static str> {
    FURNITURE_TYPES
        .iter()
        .filter(|ft| ft.surface_forms.iter().any(|form| text.contains(form)))
        .map(|ft| ft.canonical)
        .collect()
}

/// Returns the color tokens occurring in `text` (already lowercased).
#[must_use]
pub fn match_colors(text: &str) -> Vec<&'static str> {
    COLORS
        .iter()
        .filter(|color| text.contains(*color))
        .copied()
        .collect()
}

/// Returns the style tokens occurring in `text` (already lowercased).
#[must_use]
pub fn match_styles(text: &str) -> Vec<&'static str> {
    STYLES
        .iter()
        .filter(|style| text.contains(*style))
        .copied()
        .collect()
}

/// Whether `text` (already lowercased) mentions a space constraint.
#[must_use]
pub fn mentions_space_constraint(text: &str) -> bool {
    SPACE_KEYWORDS.iter().any(|kw| text.contains(kw))
}

/// Whether an image label describes furniture.
///
/// Matches case-insensitively so raw label descriptions can be passed as-is.
#[must_use]
pub fn is_furniture_label(label: &str) -> bool {
    let lower = label.to_lowercase();
    IMAGE_FURNITURE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_couch_maps_to_sofa() {
        assert_eq!(match_furniture_types("a white couch"), vec!["sofa"]);
    }

    #[test]
    fn test_armchair_maps_to_chair() {
        assert_eq!(match_furniture_types("grey armchair"), vec!["chair"]);
    }

    #[test]
    fn test_canonical_token_appears_once() {
        // Both surface forms of "sofa" present, one canonical token out.
        assert_eq!(match_furniture_types("sofa or couch?"), vec!["sofa"]);
    }

    #[test]
    fn test_multiple_types_in_table_order() {
        let types = match_furniture_types("a desk and a bookshelf for the bedroom");
        assert_eq!(types, vec!["desk", "bed", "shelf"]);
    }

    #[test]
    fn test_no_furniture() {
        assert!(match_furniture_types("something entirely unrelated").is_empty());
    }

    #[test]
    fn test_match_colors() {
        let colors = match_colors("navy blue with cream accents");
        assert_eq!(colors, vec!["blue", "navy", "cream"]);
    }

    #[test]
    fn test_grey_and_gray_are_distinct_tokens() {
        assert_eq!(match_colors("grey"), vec!["grey"]);
        assert_eq!(match_colors("gray"), vec!["gray"]);
    }

    #[test]
    fn test_match_styles() {
        assert_eq!(
            match_styles("modern scandinavian look"),
            vec!["modern", "scandinavian"]
        );
    }

    #[test]
    fn test_space_constraint() {
        assert!(mentions_space_constraint("for a studio apartment"));
        assert!(mentions_space_constraint("something compact"));
        assert!(!mentions_space_constraint("a grand living room"));
    }

    #[test]
    fn test_furniture_label() {
        assert!(is_furniture_label("Coffee table"));
        assert!(is_furniture_label("Furniture"));
        assert!(!is_furniture_label("Houseplant"));
    }
}
