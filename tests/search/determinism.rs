//! Repeated searches must agree exactly.
//!
//! Ordering depends only on score and catalog position, so the same query
//! against the same catalog always yields the same list.

use super::common::{uniform_catalog, BUILTIN};
use docsearch::{search_scored, Catalog, SearchOptions};

#[test]
fn test_repeated_search_identical() {
    let options = SearchOptions::default();
    for query in ["widget", "camera", "kiosk", "e", "home assistant"] {
        let first = search_scored(&BUILTIN, query, &options);
        let second = search_scored(&BUILTIN, query, &options);
        assert_eq!(first, second, "query {:?} not deterministic", query);
    }
}

#[test]
fn test_fresh_catalog_same_results() {
    let options = SearchOptions::default();
    let other = Catalog::builtin();
    assert_eq!(
        search_scored(&BUILTIN, "camera", &options),
        search_scored(&other, "camera", &options)
    );
}

#[test]
fn test_all_ties_take_first_entries() {
    let catalog = uniform_catalog(20);
    let hits = search_scored(&catalog, "common", &SearchOptions::default());
    let ids: Vec<usize> = hits.iter().map(|h| h.doc_id).collect();
    assert_eq!(ids, (0..12).collect::<Vec<_>>());
}

#[test]
fn test_query_term_order_irrelevant() {
    let options = SearchOptions::default();
    assert_eq!(
        search_scored(&BUILTIN, "audio video", &options),
        search_scored(&BUILTIN, "video audio", &options)
    );
}
