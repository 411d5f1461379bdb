use serde::{Deserialize, Serialize};
use crate::models::domain::{Partner, StyleEntry};

/// Response for the partner search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPartnersResponse {
    pub partners: Vec<Partner>,
    pub total_candidates: usize,
    pub total_results: usize,
    /// Set when a backend fetch failed and the list was left empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Styles known to the current session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylesResponse {
    pub styles: Vec<StyleEntry>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
