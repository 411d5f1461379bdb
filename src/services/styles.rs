use std::sync::Arc;
use std::time::Duration;

use crate::core::styles::{build_style_dictionary, StyleDictionary};
use crate::services::directory::{DirectoryError, PartnerDirectory};

const STYLES_KEY: &str = "styles";

/// Holds the style dictionary for the current session.
///
/// The dictionary is built on first use and kept until the TTL expires.
/// Failed loads are not cached: the caller gets an empty dictionary, so
/// styles pass through unnormalized, and the next search retries.
pub struct StyleCatalog {
    cache: moka::future::Cache<String, Arc<StyleDictionary>>,
}

impl StyleCatalog {
    pub fn new(ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Get the session dictionary, loading it from the directory if needed
    pub async fn dictionary(&self, directory: &dyn PartnerDirectory) -> Arc<StyleDictionary> {
        let loaded = self
            .cache
            .try_get_with(STYLES_KEY.to_string(), async {
                let entries = directory.fetch_styles().await?;
                let dictionary = build_style_dictionary(entries);
                tracing::info!(
                    "Loaded {} dance styles ({} lookup keys)",
                    dictionary.entries().len(),
                    dictionary.len()
                );
                Ok::<_, DirectoryError>(Arc::new(dictionary))
            })
            .await;

        match loaded {
            Ok(dictionary) => dictionary,
            Err(e) => {
                tracing::warn!("Failed to load dance styles, styles will pass through unchanged: {}", e);
                Arc::new(StyleDictionary::default())
            }
        }
    }

    /// Drop the cached dictionary so the next search reloads it
    pub async fn invalidate(&self) {
        self.cache.invalidate(STYLES_KEY).await;
    }
}
