//! Edge cases: empty queries, AND semantics, odd input.

use super::common::{make_entry, small_catalog, titles, uniform_catalog, BUILTIN};
use docsearch::{search, search_scored, search_with_options, Catalog, SearchOptions};

#[test]
fn test_empty_query_returns_nothing() {
    assert!(search(&BUILTIN, "").is_empty());
}

#[test]
fn test_whitespace_query_returns_nothing() {
    assert!(search(&BUILTIN, "   ").is_empty());
    assert!(search(&BUILTIN, "\t \n").is_empty());
}

#[test]
fn test_all_terms_must_match() {
    // "mqtt" and "volume" never co-occur in one entry.
    assert!(search(&BUILTIN, "mqtt volume").is_empty());
    assert!(!search(&BUILTIN, "mqtt").is_empty());
    assert!(!search(&BUILTIN, "volume").is_empty());
}

#[test]
fn test_extra_whitespace_between_terms() {
    assert_eq!(titles(&BUILTIN, "  home   assistant  "), titles(&BUILTIN, "home assistant"));
}

#[test]
fn test_substring_inside_word_matches() {
    // "kiosk" is a substring of "KingKiosk".
    assert!(titles(&BUILTIN, "kiosk").contains(&"window.KingKiosk API"));
}

#[test]
fn test_section_is_not_searched() {
    let catalog = small_catalog();
    assert!(search(&catalog, "guide").is_empty());
    assert!(search(&catalog, "security").is_empty());
}

#[test]
fn test_url_is_not_searched() {
    let catalog = Catalog::new(vec![make_entry("Plain", "")]);
    assert!(search(&catalog, "example.com").is_empty());
}

#[test]
fn test_no_match_returns_empty() {
    assert!(search(&BUILTIN, "qwertyuiop").is_empty());
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::default();
    assert!(search(&catalog, "anything").is_empty());
}

#[test]
fn test_unicode_query() {
    // The em dash in "Platform Setup — Android" is matchable as-is.
    assert!(titles(&BUILTIN, "— android").contains(&"Platform Setup — Android"));
    assert!(titles(&BUILTIN, "0.0–1.0").contains(&"set_volume"));
}

#[test]
fn test_limit_zero_returns_nothing() {
    let catalog = uniform_catalog(5);
    assert!(search_with_options(&catalog, "common", &SearchOptions::with_limit(0)).is_empty());
}

#[test]
fn test_limit_above_match_count() {
    let catalog = uniform_catalog(5);
    assert_eq!(search_with_options(&catalog, "common", &SearchOptions::with_limit(50)).len(), 5);
}

#[test]
fn test_huge_weights_saturate_and_keep_catalog_order() {
    let catalog = Catalog::new(vec![
        make_entry("Audio", "volume"),
        make_entry("volume", "volume"),
        make_entry("volume knob", ""),
    ]);
    let options: SearchOptions =
        serde_json::from_str(r#"{"weights": {"title": 4294967295, "tags": 1}}"#).unwrap();

    let hits = search_scored(&catalog, "volume", &options);
    let ranked: Vec<(&str, u32)> = hits
        .iter()
        .map(|hit| (catalog.get(hit.doc_id).unwrap().title.as_str(), hit.score))
        .collect();

    assert_eq!(
        ranked,
        vec![("volume", u32::MAX), ("volume knob", u32::MAX), ("Audio", 1)]
    );
}
