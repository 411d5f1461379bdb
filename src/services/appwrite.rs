use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::models::{RawProfile, StyleEntry};
use crate::services::directory::{DirectoryError, PartnerDirectory};

/// Styles are a small collection; one page covers all of them
const STYLE_PAGE_LIMIT: usize = 500;

/// Appwrite API client
///
/// Handles all reads from the Appwrite backend:
/// - Fetching the dance style catalog
/// - Querying a page of candidate users
/// - Fetching the requester's own profile
pub struct AppwriteDirectory {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: AppwriteCollections,
    candidate_roles: Vec<String>,
}

/// Collection IDs in Appwrite
#[derive(Debug, Clone)]
pub struct AppwriteCollections {
    pub users: String,
    pub dance_styles: String,
}

impl AppwriteDirectory {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: AppwriteCollections,
        candidate_roles: Vec<String>,
    ) -> Result<Self, DirectoryError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
            candidate_roles,
        })
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            collection
        )
    }

    async fn get_json(&self, url: &str) -> Result<Option<Value>, DirectoryError> {
        let response = self
            .client
            .get(url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(Some(response.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DirectoryError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
                tracing::error!("Appwrite request failed: {} - {}", status, body);
                Err(DirectoryError::ApiError(format!("Request failed: {}", status)))
            }
        }
    }

    /// List documents of a collection with Appwrite queries
    async fn list_documents(&self, collection: &str, queries: &[String]) -> Result<Vec<Value>, DirectoryError> {
        let params = queries
            .iter()
            .map(|q| format!("queries[]={}", urlencoding::encode(q)))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{}?{}", self.documents_url(collection), params);

        tracing::debug!("Listing documents from: {}", url);

        let json = self
            .get_json(&url)
            .await?
            .ok_or_else(|| DirectoryError::ApiError(format!("Collection {} not found", collection)))?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .cloned()
            .ok_or_else(|| DirectoryError::InvalidResponse("Missing documents array".into()))?;

        tracing::debug!("Listed {} documents from {} (total: {})", documents.len(), collection, total);

        Ok(documents)
    }
}

/// Queries for one page of candidates: role filter, newest first, capped
pub fn candidate_queries(limit: usize, roles: &[String]) -> Vec<String> {
    let mut queries = Vec::with_capacity(3);

    if !roles.is_empty() {
        let role_filter = roles
            .iter()
            .map(|r| format!("\"{}\"", r))
            .collect::<Vec<_>>()
            .join(",");
        queries.push(format!("equal(\"role\", [{}])", role_filter));
    }

    queries.push("orderDesc(\"$createdAt\")".to_string());
    queries.push(format!("limit({})", limit));

    queries
}

#[async_trait]
impl PartnerDirectory for AppwriteDirectory {
    async fn fetch_styles(&self) -> Result<Vec<StyleEntry>, DirectoryError> {
        let queries = vec![format!("limit({})", STYLE_PAGE_LIMIT)];
        let documents = self.list_documents(&self.collections.dance_styles, &queries).await?;

        Ok(documents.iter().filter_map(StyleEntry::from_document).collect())
    }

    async fn fetch_candidates(&self, limit: usize) -> Result<Vec<RawProfile>, DirectoryError> {
        let queries = candidate_queries(limit, &self.candidate_roles);
        let documents = self.list_documents(&self.collections.users, &queries).await?;

        // The backend cap is relied upon downstream; enforce it locally too
        Ok(documents.iter().take(limit).map(RawProfile::from_document).collect())
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<RawProfile>, DirectoryError> {
        let url = format!(
            "{}/{}",
            self.documents_url(&self.collections.users),
            urlencoding::encode(user_id)
        );

        tracing::debug!("Fetching profile for user: {}", user_id);

        Ok(self.get_json(&url).await?.map(|doc| RawProfile::from_document(&doc)))
    }
}
