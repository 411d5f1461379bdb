use crate::core::{
    normalizer::normalize,
    scoring::calculate_relevance_score,
    styles::StyleDictionary,
};
use crate::models::{Partner, RawProfile, RequesterProfile, ScoringWeights};

/// Result of ranking one page of candidates
#[derive(Debug)]
pub struct RankResult {
    pub partners: Vec<Partner>,
    pub total_candidates: usize,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Exclude the requesting user
/// 2. Normalize every candidate record
/// 3. Score against the requester's profile
/// 4. Stable sort by descending score
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank a page of raw candidates for a requester
    ///
    /// # Arguments
    /// * `candidates` - Raw records in backend order
    /// * `requester_id` - Id to exclude from the results, if signed in
    /// * `requester` - The requester's own profile; `None` scores everyone 0
    /// * `styles` - Session style dictionary
    ///
    /// # Returns
    /// RankResult with partners ordered by descending relevance. Equal scores
    /// keep the backend order.
    pub fn rank(
        &self,
        candidates: Vec<RawProfile>,
        requester_id: Option<&str>,
        requester: Option<&RequesterProfile>,
        styles: &StyleDictionary,
    ) -> RankResult {
        let total_candidates = candidates.len();

        let mut partners: Vec<Partner> = candidates
            .iter()
            // Stage 1: never show the requester to themselves
            .filter(|raw| requester_id != Some(raw.id.as_str()))
            // Stage 2 & 3: normalize and score
            .map(|raw| {
                let partner = normalize(raw, styles);
                let score = calculate_relevance_score(&partner, requester, &self.weights);
                partner.with_relevance_score(score)
            })
            .collect();

        // sort_by is stable, so ties keep the fetch order
        partners.sort_by(|a, b| b.score().cmp(&a.score()));

        RankResult {
            partners,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
