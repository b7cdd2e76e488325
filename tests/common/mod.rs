//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::LazyLock;

use docsearch::{search_scored, Catalog, DocEntry, SearchOptions};

// Re-export canonical test utilities from docsearch::testing
pub use docsearch::testing::{make_anchor_entry, make_entry, make_entry_in, uniform_catalog};

// ============================================================================
// CACHED CATALOGS
// ============================================================================

/// The built-in catalog, built once per test binary.
pub static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::builtin);

/// A tiny mixed catalog: one anchor per page section plus external links.
pub fn small_catalog() -> Catalog {
    Catalog::new(vec![
        make_entry_in("User Guide", "Getting Started", "install setup"),
        make_entry_in("MQTT Reference", "set_volume", "volume audio"),
        make_entry_in("MQTT Reference", "Media Player", "volume video"),
        DocEntry {
            section: "Security".to_string(),
            ..make_anchor_entry("Command Signing", "security")
        },
    ])
}

// ============================================================================
// RESULT HELPERS
// ============================================================================

/// Titles of the default-option results, best-first.
pub fn titles<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a str> {
    docsearch::search(catalog, query)
        .into_iter()
        .map(|entry| entry.title.as_str())
        .collect()
}

/// `(title, score)` pairs for the default-option results.
pub fn scored_titles<'a>(catalog: &'a Catalog, query: &str) -> Vec<(&'a str, u32)> {
    search_scored(catalog, query, &SearchOptions::default())
        .into_iter()
        .filter_map(|hit| catalog.get(hit.doc_id).map(|e| (e.title.as_str(), hit.score)))
        .collect()
}

/// Score of a single titled entry for a query, if it matched.
pub fn score_of(catalog: &Catalog, query: &str, title: &str) -> Option<u32> {
    scored_titles(catalog, query)
        .into_iter()
        .find(|(t, _)| *t == title)
        .map(|(_, score)| score)
}
