//! Result selection: ordering and truncation.

use crate::models::ScoredProduct;

/// Sorts descending by score and truncates to `limit`.
///
/// The sort is stable, so ties retain candidate-fetch order and the same
/// input yields the same output across runs.
#[must_use]
pub fn rank(mut scored: Vec<ScoredProduct>, limit: usize) -> Vec<ScoredProduct> {
    scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    scored.truncate(limit);
    scored
}

/// Image-path selection: rank, then drop scores at or below `floor`.
///
/// If the floor empties the set, fall back to the top `fallback_limit`
/// including zero scores; a low-relevance cutoff must never cost the user
/// an empty page.
#[must_use]
pub fn rank_with_floor(
    scored: Vec<ScoredProduct>,
    floor: u32,
    limit: usize,
    fallback_limit: usize,
) -> Vec<ScoredProduct> {
    let sorted = rank(scored, usize::MAX);
    let mut above: Vec<ScoredProduct> = sorted
        .iter()
        .filter(|p| p.relevance_score > floor)
        .cloned()
        .collect();

    if above.is_empty() {
        let mut fallback = sorted;
        fallback.truncate(fallback_limit);
        return fallback;
    }

    above.truncate(limit);
    above
}
