//! Partner Match - relevance ranking service for the dance marketplace app
//!
//! This library provides the partner search used by the marketplace client.
//! It normalizes loosely-typed user records, scores them against the
//! requesting user's profile and returns a stable, filtered ranking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Ranker, StyleDictionary, build_style_dictionary, normalize, calculate_relevance_score};
pub use models::{Partner, PartnerFilters, RawProfile, RequesterProfile, ScoringWeights, StyleEntry};
pub use services::{PartnerDirectory, PartnerSearch, SearchOutcome};
