use crate::models::{Partner, PartnerFilters};

/// Check if a partner passes the client-side filters
///
/// Text search is a case-insensitive substring match on the display name;
/// style, gender and level must match exactly.
#[inline]
pub fn matches_filters(partner: &Partner, filters: &PartnerFilters) -> bool {
    if let Some(search) = &filters.search {
        if !partner.display_name.to_lowercase().contains(&search.to_lowercase()) {
            return false;
        }
    }

    if let Some(style) = &filters.style {
        if !partner.dance_styles.contains(style) {
            return false;
        }
    }

    if let Some(gender) = &filters.gender {
        if &partner.gender != gender {
            return false;
        }
    }

    if let Some(level) = filters.level {
        if partner.level != level {
            return false;
        }
    }

    true
}

/// Keep the partners that pass the filters, preserving their order
pub fn apply_filters(partners: Vec<Partner>, filters: &PartnerFilters) -> Vec<Partner> {
    if filters.is_empty() {
        return partners;
    }

    partners
        .into_iter()
        .filter(|partner| matches_filters(partner, filters))
        .collect()
}
