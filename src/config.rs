use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub collection: CollectionSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub styles: StyleSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    pub users: String,
    pub dance_styles: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub page_size: Option<usize>,
    #[serde(default = "default_candidate_roles")]
    pub candidate_roles: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: None,
            candidate_roles: default_candidate_roles(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleSettings {
    pub ttl_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_style_weight")]
    pub style: u32,
    #[serde(default = "default_level_exact_weight")]
    pub level_exact: u32,
    #[serde(default = "default_level_adjacent_weight")]
    pub level_adjacent: u32,
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_availability_weight")]
    pub availability: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            style: default_style_weight(),
            level_exact: default_level_exact_weight(),
            level_adjacent: default_level_adjacent_weight(),
            location: default_location_weight(),
            availability: default_availability_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        ScoringWeights {
            style: config.style,
            level_exact: config.level_exact,
            level_adjacent: config.level_adjacent,
            location: config.location,
            availability: config.availability,
        }
    }
}

fn default_style_weight() -> u32 { 20 }
fn default_level_exact_weight() -> u32 { 15 }
fn default_level_adjacent_weight() -> u32 { 10 }
fn default_location_weight() -> u32 { 15 }
fn default_availability_weight() -> u32 { 5 }

fn default_candidate_roles() -> Vec<String> {
    vec!["student".to_string(), "instructor".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PARTNER__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PARTNER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PARTNER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // Deployments inject the Appwrite key under its conventional name
        if let Ok(api_key) = std::env::var("APPWRITE_API_KEY") {
            builder = builder.set_override("backend.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::from(&WeightsConfig::default());
        assert_eq!(weights, ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_minimal_toml() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [backend]
            endpoint = "https://appwrite.test/v1"
            api_key = "key"
            project_id = "project"
            database_id = "db"

            [collection]
            users = "users"
            dance_styles = "danceStyles"

            [scoring.weights]
            location = 30
        "#;

        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.search.page_size, None);
        assert_eq!(settings.search.candidate_roles, vec!["student", "instructor"]);
        assert_eq!(settings.scoring.weights.location, 30);
        assert_eq!(settings.scoring.weights.style, 20);
        assert_eq!(settings.logging.format, "json");
    }
}
