use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{PartnerFilters, PartnerLevel};

/// Request to search for dance partners
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchPartnersRequest {
    /// Signed-in user; absent for an anonymous search
    #[validate(length(min = 1, max = 128))]
    #[serde(alias = "requester_id", rename = "requesterId", default)]
    pub requester_id: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub search: Option<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub style: Option<String>,
    #[validate(length(max = 64))]
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

impl SearchPartnersRequest {
    /// Build filters. Blank values and the UI's "all" sentinel mean no filter;
    /// an unknown level is rejected.
    pub fn filters(&self) -> Result<PartnerFilters, String> {
        let level = match non_blank(&self.level) {
            Some(level) => Some(
                PartnerLevel::parse(&level).ok_or_else(|| format!("Unknown level: {}", level))?,
            ),
            None => None,
        };

        Ok(PartnerFilters {
            search: non_blank(&self.search),
            style: non_blank(&self.style),
            gender: non_blank(&self.gender),
            level,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
        .map(str::to_string)
}
