// Integration tests for Partner Match

use partner_match::core::build_style_dictionary;
use partner_match::models::{PartnerFilters, PartnerLevel, RawProfile, StyleEntry};
use partner_match::services::{InMemoryDirectory, PartnerSearch, StyleCatalog};
use serde_json::json;

fn styles() -> Vec<StyleEntry> {
    vec![
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
    ]
}

/// Mixed current and legacy documents, newest first
fn users() -> Vec<RawProfile> {
    [
        json!({
            "$id": "requester",
            "displayName": "Ben",
            "level": "intermediate",
            "danceStyles": ["Salsa", "Bachata"],
            "city": "İstanbul",
            "availableTimes": ["weekday-evening", "weekend"],
        }),
        json!({
            "$id": "c1",
            "displayName": "Aylin",
            "gender": "Kadın",
            "level": "intermediate",
            "danceStyles": ["salsa", "bachata"],
            "city": "İstanbul/Kadıköy",
            "availableTimes": ["weekend"],
        }),
        json!({
            "$id": "c2",
            "name": "Burak",
            "gender": "Erkek",
            "danceLevel": "advanced",
            "styles": "salsa",
            "location": "Ankara",
        }),
        json!({
            "$id": "c3",
            "displayName": "Ceren",
            "gender": "Kadın",
            "danceStyles": ["Zouk"],
            "city": "İzmir",
        }),
        json!({
            "$id": "c4",
            "displayName": "Derya",
            "gender": "Kadın",
            "level": "beginner",
            "danceStyles": ["SALSA"],
            "city": "Bursa",
            "availableTimes": ["weekday-evening"],
        }),
    ]
    .iter()
    .map(RawProfile::from_document)
    .collect()
}

fn ids(partners: &[partner_match::Partner]) -> Vec<&str> {
    partners.iter().map(|p| p.id.as_str()).collect()
}

#[tokio::test]
async fn test_integration_end_to_end_search() {
    let directory = InMemoryDirectory::new(styles(), users());
    let catalog = StyleCatalog::new(60);
    let search = PartnerSearch::default();

    let dictionary = catalog.dictionary(&directory).await;
    let outcome = search
        .search(&directory, &dictionary, Some("requester"), &PartnerFilters::default())
        .await;

    assert!(outcome.error.is_none());
    assert_eq!(outcome.total_candidates, 5);

    // c1: 2 styles (40) + same level (15) + city (15) + 1 slot (5) = 75
    // c2: 1 style (20) + adjacent level (10) = 30
    // c4: 1 style (20) + adjacent level (10) + 1 slot (5) = 35
    // c3: nothing in common = 0
    assert_eq!(ids(&outcome.partners), vec!["c1", "c4", "c2", "c3"]);
    let scores: Vec<Option<u32>> = outcome.partners.iter().map(|p| p.relevance_score).collect();
    assert_eq!(scores, vec![Some(75), Some(35), Some(30), Some(0)]);

    let burak = &outcome.partners[2];
    assert_eq!(burak.display_name, "Burak");
    assert_eq!(burak.level, PartnerLevel::Advanced);
    assert_eq!(burak.dance_styles, vec!["Salsa"]);
}

#[tokio::test]
async fn test_scores_sorted_descending() {
    let directory = InMemoryDirectory::new(styles(), users());
    let dictionary = build_style_dictionary(styles());
    let outcome = PartnerSearch::default()
        .search(&directory, &dictionary, Some("requester"), &PartnerFilters::default())
        .await;

    for pair in outcome.partners.windows(2) {
        assert!(pair[0].score() >= pair[1].score(), "Partners not sorted by score");
    }
}

#[tokio::test]
async fn test_equal_scores_keep_fetch_order() {
    let requester = RawProfile {
        id: "me".to_string(),
        dance_styles: vec!["Salsa".to_string()],
        available_times: vec!["sat".to_string()],
        ..Default::default()
    };
    let c1 = RawProfile {
        id: "C1".to_string(),
        dance_styles: vec!["Salsa".to_string()],
        ..Default::default()
    };
    let c2 = RawProfile {
        id: "C2".to_string(),
        dance_styles: vec!["salsa".to_string()],
        ..Default::default()
    };
    let c3 = RawProfile {
        id: "C3".to_string(),
        available_times: vec!["sat".to_string()],
        ..Default::default()
    };

    let directory = InMemoryDirectory::new(styles(), vec![c1, c2, c3, requester]);
    let dictionary = build_style_dictionary(styles());
    let outcome = PartnerSearch::default()
        .search(&directory, &dictionary, Some("me"), &PartnerFilters::default())
        .await;

    assert_eq!(ids(&outcome.partners), vec!["C1", "C2", "C3"]);
    let scores: Vec<u32> = outcome.partners.iter().map(|p| p.score()).collect();
    assert_eq!(scores, vec![20, 20, 5]);
}

#[tokio::test]
async fn test_filters_narrow_ranked_list() {
    let directory = InMemoryDirectory::new(styles(), users());
    let dictionary = build_style_dictionary(styles());
    let search = PartnerSearch::default();

    let filters = PartnerFilters {
        gender: Some("Kadın".to_string()),
        style: Some("Salsa".to_string()),
        ..Default::default()
    };
    let outcome = search.search(&directory, &dictionary, Some("requester"), &filters).await;
    assert_eq!(ids(&outcome.partners), vec!["c1", "c4"]);

    let by_name = PartnerFilters {
        search: Some("der".to_string()),
        ..Default::default()
    };
    let outcome = search.search(&directory, &dictionary, Some("requester"), &by_name).await;
    assert_eq!(ids(&outcome.partners), vec!["c4"]);
}

#[tokio::test]
async fn test_styles_outage_passes_styles_through() {
    let directory = InMemoryDirectory::new(styles(), users()).with_failing_styles();
    let catalog = StyleCatalog::new(60);

    let dictionary = catalog.dictionary(&directory).await;
    let outcome = PartnerSearch::default()
        .search(&directory, &dictionary, Some("requester"), &PartnerFilters::default())
        .await;

    assert!(outcome.error.is_none());
    let aylin = outcome.partners.iter().find(|p| p.id == "c1").unwrap();
    assert_eq!(aylin.dance_styles, vec!["salsa", "bachata"]);
}

#[tokio::test]
async fn test_candidate_outage_returns_empty_list() {
    let directory = InMemoryDirectory::new(styles(), users()).with_failing_candidates();
    let dictionary = build_style_dictionary(styles());

    let outcome = PartnerSearch::default()
        .search(&directory, &dictionary, Some("requester"), &PartnerFilters::default())
        .await;

    assert!(outcome.partners.is_empty());
    assert_eq!(outcome.total_candidates, 0);
    assert!(outcome.error.is_some());
}
