use crate::core::{apply_filters, Ranker, StyleDictionary};
use crate::models::{Partner, PartnerFilters};
use crate::services::directory::PartnerDirectory;

/// Result of one partner search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub partners: Vec<Partner>,
    /// Records fetched from the backend, before exclusion and filtering
    pub total_candidates: usize,
    /// Set when a fetch failed; `partners` is then empty
    pub error: Option<String>,
}

impl SearchOutcome {
    fn failed(message: String) -> Self {
        Self {
            error: Some(message),
            ..Default::default()
        }
    }
}

/// Ranked list assembler
///
/// Fetches one capped page of candidates and the requester's profile,
/// ranks them and applies the client filters.
#[derive(Debug, Clone)]
pub struct PartnerSearch {
    ranker: Ranker,
    page_size: usize,
}

impl PartnerSearch {
    pub const DEFAULT_PAGE_SIZE: usize = 100;

    pub fn new(ranker: Ranker, page_size: usize) -> Self {
        Self { ranker, page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Run a search for `requester_id` (or anonymously when `None`).
    ///
    /// Fetch failures never propagate: they yield an empty list with
    /// `error` set. A requester without a profile document is ranked
    /// as anonymous.
    pub async fn search(
        &self,
        directory: &dyn PartnerDirectory,
        styles: &StyleDictionary,
        requester_id: Option<&str>,
        filters: &PartnerFilters,
    ) -> SearchOutcome {
        let candidates = match directory.fetch_candidates(self.page_size).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::error!("Failed to fetch candidates: {}", e);
                return SearchOutcome::failed(format!("Failed to fetch candidates: {}", e));
            }
        };

        let requester = match requester_id {
            Some(id) => match directory.fetch_profile(id).await {
                Ok(Some(profile)) => Some(profile),
                Ok(None) => {
                    tracing::debug!("No profile for requester {}, ranking anonymously", id);
                    None
                }
                Err(e) => {
                    tracing::error!("Failed to fetch profile for {}: {}", id, e);
                    return SearchOutcome::failed(format!("Failed to fetch requester profile: {}", e));
                }
            },
            None => None,
        };

        let ranked = self.ranker.rank(candidates, requester_id, requester.as_ref(), styles);
        let ranked_count = ranked.partners.len();
        let partners = apply_filters(ranked.partners, filters);

        tracing::debug!(
            "Ranked {} of {} candidates, {} left after filters",
            ranked_count,
            ranked.total_candidates,
            partners.len()
        );

        SearchOutcome {
            partners,
            total_candidates: ranked.total_candidates,
            error: None,
        }
    }
}

impl Default for PartnerSearch {
    fn default() -> Self {
        Self::new(Ranker::default(), Self::DEFAULT_PAGE_SIZE)
    }
}
