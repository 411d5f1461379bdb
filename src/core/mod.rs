// Core algorithm exports
pub mod filters;
pub mod normalizer;
pub mod ranker;
pub mod scoring;
pub mod styles;

pub use filters::{apply_filters, matches_filters};
pub use normalizer::{normalize, normalize_level};
pub use ranker::{Ranker, RankResult};
pub use scoring::{calculate_relevance_score, score_breakdown, ScoreBreakdown};
pub use styles::{build_style_dictionary, StyleDictionary};
