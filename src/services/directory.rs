use async_trait::async_trait;
use thiserror::Error;

use crate::models::{RawProfile, StyleEntry};

/// Errors that can occur when reading from the partner directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read-only source of styles and user records
#[async_trait]
pub trait PartnerDirectory: Send + Sync {
    /// All known dance styles
    async fn fetch_styles(&self) -> Result<Vec<StyleEntry>, DirectoryError>;

    /// One page of candidate records, already role-filtered and in recency order
    async fn fetch_candidates(&self, limit: usize) -> Result<Vec<RawProfile>, DirectoryError>;

    /// A single user's record; `Ok(None)` when no such user exists
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<RawProfile>, DirectoryError>;
}
