//! Price detection shared by both extraction strategies.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]

use regex::Regex;
use std::sync::LazyLock;

/// Optional currency prefix, grouped digits, optional two-digit decimals.
static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"R?\s*\d+(?:,\d{3})*(?:\.\d{2})?").expect("static regex: price")
});

/// Scans `text` for numeric quantities and returns the largest one.
///
/// This is a deliberate take-the-largest heuristic, not a range parser:
/// "between 1,500 and 3000" yields `3000.0`. Returns `None` when the text
/// contains no number.
#[must_use]
pub fn detect_max_price(text: &str) -> Option<f64> {
    PRICE_PATTERN
        .find_iter(text)
        .filter_map(|m| {
            let cleaned: String = m
                .as_str()
                .chars()
                .filter(|c| !matches!(c, 'R' | ',') && !c.is_whitespace())
                .collect();
            cleaned.parse::<f64>().ok()
        })
        .fold(None, |max, price| {
            Some(max.map_or(price, |m: f64| m.max(price)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(detect_max_price("white couch under 2000"), Some(2000.0));
    }

    #[test]
    fn test_largest_number_wins() {
        assert_eq!(
            detect_max_price("between 1,500 and 3000 rand"),
            Some(3000.0)
        );
    }

    #[test]
    fn test_currency_prefix_and_grouping() {
        assert_eq!(detect_max_price("a sofa for R12,500"), Some(12500.0));
        assert_eq!(detect_max_price("R 2,000"), Some(2000.0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(detect_max_price("priced at 1999.99"), Some(1999.99));
    }

    #[test]
    fn test_no_number() {
        assert_eq!(detect_max_price("a comfy grey sofa"), None);
        assert_eq!(detect_max_price(""), None);
    }
}
