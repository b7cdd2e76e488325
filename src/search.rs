// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: where the rubber meets the road.
//!
//! The catalog is small (tens of entries), so there is no index beyond the
//! lowercased fields computed at catalog build time. A search is:
//!
//! 1. Parse the query into lowercased whitespace-separated terms.
//! 2. Scan every entry; keep those whose haystack contains *every* term.
//! 3. Sum the per-term field weights (see `scoring`).
//! 4. Stable sort by descending score, so ties keep catalog order.
//! 5. Truncate to the limit.
//!
//! An empty or whitespace-only query returns nothing. The caller treats that
//! as "close the panel", not "no matches".

use crate::catalog::Catalog;
use crate::contracts::check_hits_well_formed;
use crate::scoring::{entry_score, SearchOptions};
use crate::types::{DocEntry, SearchHit};
use crate::utils::parse_query;

/// Search the catalog with the default weights and result cap.
///
/// Returns matching entries best-first, at most [`MAX_RESULTS`](crate::MAX_RESULTS).
///
/// # Example
///
/// ```
/// use docsearch::{search, Catalog};
///
/// let catalog = Catalog::builtin();
/// let results = search(&catalog, "set_volume");
/// assert_eq!(results[0].title, "set_volume");
/// ```
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a DocEntry> {
    search_with_options(catalog, query, &SearchOptions::default())
}

/// Search with explicit options, returning entries.
pub fn search_with_options<'a>(
    catalog: &'a Catalog,
    query: &str,
    options: &SearchOptions,
) -> Vec<&'a DocEntry> {
    search_scored(catalog, query, options)
        .into_iter()
        .filter_map(|hit| catalog.get(hit.doc_id))
        .collect()
}

/// The core search: returns `(doc_id, score)` hits best-first.
///
/// Exposed separately so callers that display scores (the CLI) or need
/// catalog positions (the browser bindings) don't have to re-score.
pub fn search_scored(catalog: &Catalog, query: &str, options: &SearchOptions) -> Vec<SearchHit> {
    let terms = parse_query(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = catalog
        .iter_indexed()
        .filter_map(|(doc_id, entry)| {
            entry_score(entry, &terms, &options.weights).map(|score| SearchHit { doc_id, score })
        })
        .collect();

    // INVARIANT: stable sort - equal scores keep catalog order (curatorial priority)
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    let matched = hits.len();
    hits.truncate(options.limit);

    check_hits_well_formed(&hits, catalog.len(), options.limit);

    tracing::debug!(
        query,
        terms = terms.len(),
        matched,
        returned = hits.len(),
        "search complete"
    );

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_entry;

    fn catalog_of(titles: &[(&str, &str)]) -> Catalog {
        Catalog::new(
            titles
                .iter()
                .map(|(title, tags)| make_entry(title, tags))
                .collect(),
        )
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let catalog = Catalog::builtin();
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "   ").is_empty());
        assert!(search(&catalog, "\t\n").is_empty());
    }

    #[test]
    fn test_and_semantics() {
        let catalog = catalog_of(&[("alpha", "one two"), ("beta", "two three"), ("gamma", "one three")]);
        let results = search(&catalog, "one three");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "gamma");
    }

    #[test]
    fn test_substring_inside_word_matches() {
        let catalog = catalog_of(&[("Screenshot", "capture")]);
        assert_eq!(search(&catalog, "eensh").len(), 1);
    }

    #[test]
    fn test_case_insensitive_query() {
        let catalog = catalog_of(&[("Home Assistant Integration", "ha")]);
        assert_eq!(search(&catalog, "HOME assistant").len(), 1);
    }

    #[test]
    fn test_title_outranks_tags() {
        let catalog = catalog_of(&[("First", "widget"), ("Widget Second", "")]);
        let results = search(&catalog, "widget");
        assert_eq!(results[0].title, "Widget Second");
        assert_eq!(results[1].title, "First");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = catalog_of(&[("c", "shared"), ("a", "shared"), ("b", "shared")]);
        let titles: Vec<&str> = search(&catalog, "shared").iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_results_capped() {
        let entries: Vec<(String, &str)> = (0..30).map(|i| (format!("Doc {}", i), "common")).collect();
        let borrowed: Vec<(&str, &str)> = entries.iter().map(|(t, g)| (t.as_str(), *g)).collect();
        let catalog = catalog_of(&borrowed);

        let results = search(&catalog, "common");
        assert_eq!(results.len(), crate::MAX_RESULTS);
        assert_eq!(results[0].title, "Doc 0");
        assert_eq!(results[11].title, "Doc 11");
    }

    #[test]
    fn test_custom_limit() {
        let catalog = Catalog::builtin();
        let hits = search_scored(&catalog, "widget", &SearchOptions::with_limit(3));
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_zero_limit() {
        let catalog = Catalog::builtin();
        assert!(search_scored(&catalog, "widget", &SearchOptions::with_limit(0)).is_empty());
    }

    #[test]
    fn test_scores_sorted_descending() {
        let catalog = Catalog::builtin();
        let hits = search_scored(&catalog, "camera", &SearchOptions::default());
        assert!(!hits.is_empty());
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(search(&catalog, "anything").is_empty());
    }
}
