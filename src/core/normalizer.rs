use crate::core::styles::StyleDictionary;
use crate::models::domain::{
    Partner, PartnerLevel, RawProfile, SkillTier, DEFAULT_DISPLAY_NAME, DEFAULT_PHOTO,
    DEFAULT_RATING, UNSPECIFIED,
};

/// Convert a raw profile into the partner card view.
///
/// Total over its input: absent or empty fields take their defaults,
/// unknown levels become "Belirtilmemiş" and unknown styles are kept as-is.
pub fn normalize(raw: &RawProfile, styles: &StyleDictionary) -> Partner {
    Partner {
        id: raw.id.clone(),
        display_name: text_or(&raw.display_name, DEFAULT_DISPLAY_NAME),
        age: raw.age.unwrap_or(0),
        gender: text_or(&raw.gender, UNSPECIFIED),
        level: normalize_level(raw.level.as_deref()),
        dance_styles: raw
            .dance_styles
            .iter()
            .map(|style| styles.canonical_label(style))
            .collect(),
        city: text_or(&raw.city, UNSPECIFIED),
        available_times: raw.available_times.clone(),
        photo: text_or(&raw.photo_url, DEFAULT_PHOTO),
        // Zero means "not rated yet" on the backend
        rating: raw.rating.filter(|r| *r > 0.0).unwrap_or(DEFAULT_RATING),
        relevance_score: None,
        height: raw.height.filter(|h| *h > 0.0),
        weight: raw.weight.filter(|w| *w > 0.0),
    }
}

/// Map an internal level name to its display level
#[inline]
pub fn normalize_level(level: Option<&str>) -> PartnerLevel {
    PartnerLevel::from_tier(level.and_then(SkillTier::from_internal))
}

fn text_or(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::styles::build_style_dictionary;
    use crate::models::StyleEntry;

    fn dictionary() -> StyleDictionary {
        build_style_dictionary(vec![
            StyleEntry {
                id: "salsa".to_string(),
                label: "Salsa".to_string(),
                value: "salsa".to_string(),
            },
            StyleEntry {
                id: "bachata".to_string(),
                label: "Bachata".to_string(),
                value: "bachata".to_string(),
            },
        ])
    }

    #[test]
    fn test_empty_profile_gets_defaults() {
        let raw = RawProfile {
            id: "u1".to_string(),
            ..Default::default()
        };

        assert_eq!(normalize(&raw, &dictionary()), Partner::placeholder("u1"));
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(normalize_level(Some("beginner")), PartnerLevel::Beginner);
        assert_eq!(normalize_level(Some("intermediate")), PartnerLevel::Intermediate);
        assert_eq!(normalize_level(Some("advanced")), PartnerLevel::Advanced);
        assert_eq!(normalize_level(Some("professional")), PartnerLevel::Professional);
        assert_eq!(normalize_level(Some("expert")), PartnerLevel::Unspecified);
        assert_eq!(normalize_level(None), PartnerLevel::Unspecified);
    }

    #[test]
    fn test_styles_canonicalized_in_order_with_duplicates() {
        let raw = RawProfile {
            id: "u2".to_string(),
            dance_styles: vec![
                "BACHATA".to_string(),
                "kizomba".to_string(),
                "salsa".to_string(),
                "Salsa".to_string(),
            ],
            ..Default::default()
        };

        let partner = normalize(&raw, &dictionary());

        assert_eq!(partner.dance_styles, vec!["Bachata", "kizomba", "Salsa", "Salsa"]);
    }

    #[test]
    fn test_blank_strings_use_defaults() {
        let raw = RawProfile {
            id: "u3".to_string(),
            display_name: Some("   ".to_string()),
            city: Some(String::new()),
            rating: Some(0.0),
            ..Default::default()
        };

        let partner = normalize(&raw, &dictionary());

        assert_eq!(partner.display_name, DEFAULT_DISPLAY_NAME);
        assert_eq!(partner.city, UNSPECIFIED);
        assert_eq!(partner.rating, DEFAULT_RATING);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = RawProfile {
            id: "u4".to_string(),
            display_name: Some("Elif".to_string()),
            age: Some(31),
            level: Some("professional".to_string()),
            dance_styles: vec!["salsa".to_string()],
            city: Some("İzmir".to_string()),
            rating: Some(4.6),
            height: Some(168.0),
            ..Default::default()
        };
        let dict = dictionary();

        assert_eq!(normalize(&raw, &dict), normalize(&raw, &dict));
    }
}
