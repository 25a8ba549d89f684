//! chatscout-ranker — Weighted, explainable relevance scoring and ranking.

pub mod engine;
pub mod scorer;
pub mod weights;

pub use engine::RelevanceEngine;
pub use scorer::{score_chats, MIN_CONFIDENCE};
pub use weights::WeightVector;
