use serde::{Deserialize, Serialize};

pub const DEFAULT_DISPLAY_NAME: &str = "İsimsiz Kullanıcı";
pub const UNSPECIFIED: &str = "Belirtilmemiş";
pub const DEFAULT_PHOTO: &str = "/images/default-avatar.png";
pub const DEFAULT_RATING: f64 = 4.0;

/// Canonical dance style as stored in the styles collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    pub id: String,
    pub label: String,
    pub value: String,
}

/// Internal skill tier, ordered from beginner to professional
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl SkillTier {
    /// Parse the internal tier name stored on user records.
    /// Only the exact lowercase names are recognized.
    pub fn from_internal(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(SkillTier::Beginner),
            "intermediate" => Some(SkillTier::Intermediate),
            "advanced" => Some(SkillTier::Advanced),
            "professional" => Some(SkillTier::Professional),
            _ => None,
        }
    }

    /// One step up or down the tier ladder
    #[inline]
    pub fn is_adjacent(self, other: SkillTier) -> bool {
        (self as i8 - other as i8).abs() == 1
    }
}

/// Display level shown on a partner card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PartnerLevel {
    #[serde(rename = "Başlangıç")]
    Beginner,
    #[serde(rename = "Orta")]
    Intermediate,
    #[serde(rename = "İleri")]
    Advanced,
    #[serde(rename = "Profesyonel")]
    Professional,
    #[default]
    #[serde(rename = "Belirtilmemiş")]
    Unspecified,
}

impl PartnerLevel {
    pub fn from_tier(tier: Option<SkillTier>) -> Self {
        match tier {
            Some(SkillTier::Beginner) => PartnerLevel::Beginner,
            Some(SkillTier::Intermediate) => PartnerLevel::Intermediate,
            Some(SkillTier::Advanced) => PartnerLevel::Advanced,
            Some(SkillTier::Professional) => PartnerLevel::Professional,
            None => PartnerLevel::Unspecified,
        }
    }

    /// Translate the display level back to its internal tier
    pub fn tier(self) -> Option<SkillTier> {
        match self {
            PartnerLevel::Beginner => Some(SkillTier::Beginner),
            PartnerLevel::Intermediate => Some(SkillTier::Intermediate),
            PartnerLevel::Advanced => Some(SkillTier::Advanced),
            PartnerLevel::Professional => Some(SkillTier::Professional),
            PartnerLevel::Unspecified => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PartnerLevel::Beginner => "Başlangıç",
            PartnerLevel::Intermediate => "Orta",
            PartnerLevel::Advanced => "İleri",
            PartnerLevel::Professional => "Profesyonel",
            PartnerLevel::Unspecified => UNSPECIFIED,
        }
    }

    /// Parse a level filter value: either a display label or an internal tier name
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        [
            PartnerLevel::Beginner,
            PartnerLevel::Intermediate,
            PartnerLevel::Advanced,
            PartnerLevel::Professional,
            PartnerLevel::Unspecified,
        ]
        .into_iter()
        .find(|level| level.label() == value)
        .or_else(|| SkillTier::from_internal(value).map(|tier| PartnerLevel::from_tier(Some(tier))))
    }
}

/// Unprocessed user record with every field optional.
///
/// Built from a backend document by [`RawProfile::from_document`], which
/// resolves the legacy and current document shapes into this one type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub level: Option<String>,
    pub dance_styles: Vec<String>,
    pub city: Option<String>,
    pub available_times: Vec<String>,
    pub photo_url: Option<String>,
    pub rating: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// The signed-in user's own record, used only as scoring input
pub type RequesterProfile = RawProfile;

/// Normalized partner view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub display_name: String,
    pub age: u32,
    pub gender: String,
    pub level: PartnerLevel,
    pub dance_styles: Vec<String>,
    pub city: String,
    pub available_times: Vec<String>,
    pub photo: String,
    pub rating: f64,
    pub relevance_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Partner {
    /// Partner with every field at its default value
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            age: 0,
            gender: UNSPECIFIED.to_string(),
            level: PartnerLevel::Unspecified,
            dance_styles: Vec::new(),
            city: UNSPECIFIED.to_string(),
            available_times: Vec::new(),
            photo: DEFAULT_PHOTO.to_string(),
            rating: DEFAULT_RATING,
            relevance_score: None,
            height: None,
            weight: None,
        }
    }

    pub fn with_relevance_score(mut self, score: u32) -> Self {
        self.relevance_score = Some(score);
        self
    }

    /// Score used for ordering; partners without one sort as zero
    #[inline]
    pub fn score(&self) -> u32 {
        self.relevance_score.unwrap_or(0)
    }
}

/// Client-side filters applied after ranking
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerFilters {
    pub search: Option<String>,
    pub style: Option<String>,
    pub gender: Option<String>,
    pub level: Option<PartnerLevel>,
}

impl PartnerFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.style.is_none() && self.gender.is_none() && self.level.is_none()
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Per shared dance style
    pub style: u32,
    pub level_exact: u32,
    pub level_adjacent: u32,
    pub location: u32,
    /// Per shared availability slot
    pub availability: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            style: 20,
            level_exact: 15,
            level_adjacent: 10,
            location: 15,
            availability: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_adjacency() {
        assert!(SkillTier::Beginner.is_adjacent(SkillTier::Intermediate));
        assert!(SkillTier::Advanced.is_adjacent(SkillTier::Intermediate));
        assert!(SkillTier::Professional.is_adjacent(SkillTier::Advanced));
        assert!(!SkillTier::Beginner.is_adjacent(SkillTier::Advanced));
        assert!(!SkillTier::Intermediate.is_adjacent(SkillTier::Intermediate));
    }

    #[test]
    fn test_tier_from_internal_is_exact() {
        assert_eq!(SkillTier::from_internal("advanced"), Some(SkillTier::Advanced));
        assert_eq!(SkillTier::from_internal("Advanced"), None);
        assert_eq!(SkillTier::from_internal(""), None);
    }

    #[test]
    fn test_level_round_trip_through_tier() {
        for level in [
            PartnerLevel::Beginner,
            PartnerLevel::Intermediate,
            PartnerLevel::Advanced,
            PartnerLevel::Professional,
        ] {
            assert_eq!(PartnerLevel::from_tier(level.tier()), level);
        }
        assert_eq!(PartnerLevel::Unspecified.tier(), None);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(PartnerLevel::parse("İleri"), Some(PartnerLevel::Advanced));
        assert_eq!(PartnerLevel::parse("beginner"), Some(PartnerLevel::Beginner));
        assert_eq!(PartnerLevel::parse("Belirtilmemiş"), Some(PartnerLevel::Unspecified));
        assert_eq!(PartnerLevel::parse("expert"), None);
    }

    #[test]
    fn test_level_serializes_as_label() {
        let json = serde_json::to_string(&PartnerLevel::Intermediate).unwrap();
        assert_eq!(json, "\"Orta\"");
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.style, 20);
        assert_eq!(weights.level_exact, 15);
        assert_eq!(weights.level_adjacent, 10);
        assert_eq!(weights.location, 15);
        assert_eq!(weights.availability, 5);
    }
}
