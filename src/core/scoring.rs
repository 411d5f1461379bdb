use crate::models::domain::UNSPECIFIED;
use crate::models::{Partner, RequesterProfile, ScoringWeights, SkillTier};

/// Per-rule contributions to a relevance score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub style: u32,
    pub level: u32,
    pub location: u32,
    pub availability: u32,
}

impl ScoreBreakdown {
    #[inline]
    pub fn total(&self) -> u32 {
        // Weights come from configuration, so clamp instead of overflowing
        self.style
            .saturating_add(self.level)
            .saturating_add(self.location)
            .saturating_add(self.availability)
    }
}

/// Calculate the relevance score of a candidate for the requesting user
///
/// Scoring formula:
/// score = (
///     style * shared_styles +          # requester's raw styles found on the candidate
///     level_exact | level_adjacent +   # same tier, or one step apart
///     location +                       # candidate city contains requester city
///     availability * shared_slots      # common time slots
/// )
///
/// An anonymous search (no requester) scores every candidate 0.
pub fn calculate_relevance_score(
    candidate: &Partner,
    requester: Option<&RequesterProfile>,
    weights: &ScoringWeights,
) -> u32 {
    score_breakdown(candidate, requester, weights).total()
}

pub fn score_breakdown(
    candidate: &Partner,
    requester: Option<&RequesterProfile>,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let Some(requester) = requester else {
        return ScoreBreakdown::default();
    };

    ScoreBreakdown {
        style: weights.style.saturating_mul(shared_styles(candidate, requester)),
        level: level_score(candidate, requester, weights),
        location: location_score(candidate, requester, weights),
        availability: weights.availability.saturating_mul(shared_slots(candidate, requester)),
    }
}

/// Requester styles are compared as stored, without canonicalization,
/// against the candidate's canonical labels. Matching is exact.
#[inline]
fn shared_styles(candidate: &Partner, requester: &RequesterProfile) -> u32 {
    requester
        .dance_styles
        .iter()
        .filter(|style| candidate.dance_styles.contains(style))
        .count() as u32
}

#[inline]
fn level_score(candidate: &Partner, requester: &RequesterProfile, weights: &ScoringWeights) -> u32 {
    let candidate_tier = candidate.level.tier();
    let requester_tier = requester.level.as_deref().and_then(SkillTier::from_internal);

    match (candidate_tier, requester_tier) {
        (Some(c), Some(r)) if c == r => weights.level_exact,
        (Some(c), Some(r)) if c.is_adjacent(r) => weights.level_adjacent,
        _ => 0,
    }
}

#[inline]
fn location_score(candidate: &Partner, requester: &RequesterProfile, weights: &ScoringWeights) -> u32 {
    // The normalizer's placeholder city means the candidate has none
    if candidate.city.is_empty() || candidate.city == UNSPECIFIED {
        return 0;
    }

    match requester.city.as_deref().filter(|city| !city.is_empty()) {
        Some(city) if candidate.city.contains(city) => weights.location,
        _ => 0,
    }
}

#[inline]
fn shared_slots(candidate: &Partner, requester: &RequesterProfile) -> u32 {
    requester
        .available_times
        .iter()
        .filter(|slot| candidate.available_times.contains(slot))
        .count() as u32
}
