use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::{RawProfile, StyleEntry};
use crate::services::directory::{DirectoryError, PartnerDirectory};

/// In-memory partner directory for tests, benchmarks and local runs.
///
/// Users are returned in insertion order, which stands in for the backend's
/// recency ordering.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    styles: Vec<StyleEntry>,
    users: Vec<RawProfile>,
    fail_styles: bool,
    fail_candidates: bool,
    fail_profile: bool,
    style_fetches: AtomicUsize,
}

impl InMemoryDirectory {
    pub fn new(styles: Vec<StyleEntry>, users: Vec<RawProfile>) -> Self {
        Self {
            styles,
            users,
            ..Default::default()
        }
    }

    pub fn with_failing_styles(mut self) -> Self {
        self.fail_styles = true;
        self
    }

    pub fn with_failing_candidates(mut self) -> Self {
        self.fail_candidates = true;
        self
    }

    pub fn with_failing_profile(mut self) -> Self {
        self.fail_profile = true;
        self
    }

    /// How many times the style list has been fetched
    pub fn style_fetches(&self) -> usize {
        self.style_fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl PartnerDirectory for InMemoryDirectory {
    async fn fetch_styles(&self) -> Result<Vec<StyleEntry>, DirectoryError> {
        self.style_fetches.fetch_add(1, Ordering::Relaxed);
        if self.fail_styles {
            return Err(DirectoryError::ApiError("styles unavailable".to_string()));
        }
        Ok(self.styles.clone())
    }

    async fn fetch_candidates(&self, limit: usize) -> Result<Vec<RawProfile>, DirectoryError> {
        if self.fail_candidates {
            return Err(DirectoryError::ApiError("candidates unavailable".to_string()));
        }
        Ok(self.users.iter().take(limit).cloned().collect())
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<RawProfile>, DirectoryError> {
        if self.fail_profile {
            return Err(DirectoryError::ApiError("profile unavailable".to_string()));
        }
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }
}
