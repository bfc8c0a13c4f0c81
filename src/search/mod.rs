//! The search pipeline: filter building, scoring, selection, orchestration.

mod filter;
mod scorer;
mod selector;
mod service;

pub use filter::build_query;
pub use scorer::{IMAGE_WEIGHTS, ScoreWeights, TEXT_WEIGHTS, score_product};
pub use selector::{rank, rank_with_floor};
pub use service::SearchService;
