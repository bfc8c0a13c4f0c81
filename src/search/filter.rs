//! Filter builder: intent → catalog predicate.

use crate::models::{ProductQuery, SearchIntent};

/// Maps an intent onto the catalog predicate.
///
/// Price, category, and space-efficiency clauses are optional and
/// conjunctive. Colors and furniture types widen each other: a candidate
/// passes on either signal, and the furniture-type keywords are themselves a
/// disjunction across types. The in-stock clause is always present, so an
/// empty intent degrades to "all in-stock items" rather than an unfiltered
/// scan.
#[must_use]
pub fn build_query(intent: &SearchIntent) -> ProductQuery {
    ProductQuery {
        max_price: intent.max_price,
        category: intent.category.clone(),
        space_efficient: intent.space_efficient,
        colors: intent.colors.clone(),
        keywords: intent.furniture_types.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_intent_builds_in_stock_only() {
        let query = build_query(&SearchIntent::new());
        assert_eq!(query, ProductQuery::in_stock_only());
    }

    #[test]
    fn test_all_clauses_carry_over() {
        let mut intent = SearchIntent::new();
        intent.push_furniture_type("chair");
        intent.push_furniture_type("sofa");
        intent.push_color("grey");
        intent.record_price(3000.0);
        intent.category = Some("Living Room".to_string());
        intent.space_efficient = true;

        let query = build_query(&intent);
        assert_eq!(query.max_price, Some(3000.0));
        assert_eq!(query.category.as_deref(), Some("Living Room"));
        assert!(query.space_efficient);
        assert_eq!(query.colors, vec!["grey"]);
        assert_eq!(query.keywords, vec!["chair", "sofa"]);
    }

    #[test]
    fn test_styles_do_not_filter() {
        // Styles influence scoring only, never the predicate.
        let mut intent = SearchIntent::new();
        intent.push_style("modern");
        let query = build_query(&intent);
        assert_eq!(query, ProductQuery::in_stock_only());
    }
}
