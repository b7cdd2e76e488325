//! Ranking over the built-in catalog.
//!
//! Expected scores are worked out by hand from the 10/5/2 field weights.

use super::common::{score_of, scored_titles, titles, BUILTIN};
use docsearch::{search, MAX_RESULTS};

#[test]
fn test_android_ranks_platform_setup_first() {
    let results = search(&BUILTIN, "android");
    assert_eq!(results[0].title, "Platform Setup — Android");
    assert_eq!(results[0].section, "User Guide");
}

#[test]
fn test_android_title_and_tag_beats_description_only() {
    // Title + tag = 15; "Kiosk Lockdown" only mentions (Android) in its description.
    assert_eq!(
        scored_titles(&BUILTIN, "android"),
        vec![("Platform Setup — Android", 15), ("Kiosk Lockdown", 2)]
    );
}

#[test]
fn test_volume_scores_all_three_fields() {
    // "set_volume": title 10 + tags 5 + "Set audio volume" 2.
    assert_eq!(score_of(&BUILTIN, "volume", "set_volume"), Some(17));
    // Media Player: tag 5 + "set_volume" in the description 2.
    assert_eq!(score_of(&BUILTIN, "volume", "Media Player Commands"), Some(7));
    assert_eq!(titles(&BUILTIN, "volume")[0], "set_volume");
}

#[test]
fn test_multi_term_scores_add_up() {
    // "home" and "assistant" both hit title, tags and description.
    assert_eq!(score_of(&BUILTIN, "home assistant", "Home Assistant Integration"), Some(30));
    assert_eq!(titles(&BUILTIN, "home assistant")[0], "Home Assistant Integration");
}

#[test]
fn test_title_hit_outranks_tag_hit() {
    let results = titles(&BUILTIN, "webrtc");
    assert_eq!(results[0], "WebRTC Intercom");
    assert!(results.contains(&"Camera Widget"));
}

#[test]
fn test_anchor_entry_can_win() {
    let results = search(&BUILTIN, "hmac");
    assert_eq!(results[0].url, "#security");
    assert!(results[0].is_anchor());
}

#[test]
fn test_case_insensitive_query() {
    assert_eq!(titles(&BUILTIN, "WIDGET sdk"), titles(&BUILTIN, "widget SDK"));
    assert_eq!(titles(&BUILTIN, "WIDGET sdk"), vec!["Custom Widget SDK Overview"]);
}

#[test]
fn test_broad_query_is_capped() {
    // "widget" appears in well over twelve entries.
    let results = search(&BUILTIN, "widget");
    assert_eq!(results.len(), MAX_RESULTS);
    assert_eq!(results[0].title, "Custom Widget SDK Overview");
}

#[test]
fn test_ties_keep_catalog_order() {
    // All three command titles contain "set_" and nothing else distinguishes them.
    let scored = scored_titles(&BUILTIN, "set_");
    assert_eq!(
        &scored[..3],
        &[("set_brightness", 15), ("set_volume", 15), ("set_schedule", 15)]
    );
}
