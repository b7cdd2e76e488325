// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API over the built-in catalog
//! to verify it never panics and never returns a malformed ranking.

#![no_main]

use docsearch::{haystack, parse_query, search_scored, Catalog, SearchOptions, MAX_RESULTS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    static CATALOG: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();
    let catalog = CATALOG.get_or_init(Catalog::builtin);

    let query = String::from_utf8_lossy(query);
    let hits = search_scored(catalog, &query, &SearchOptions::default());

    // INVARIANT 1: Results are bounded by the cap
    assert!(hits.len() <= MAX_RESULTS, "got {} results", hits.len());

    // INVARIANT 2: Every doc_id is a real entry that contains every term
    let terms = parse_query(&query);
    for hit in &hits {
        let entry = catalog.get(hit.doc_id).expect("doc_id in range");
        let hay = haystack(&entry.title, &entry.description, &entry.tags);
        for term in &terms {
            assert!(hay.contains(term.as_str()), "{:?} lacks {:?}", entry.title, term);
        }
    }

    // INVARIANT 3: Descending score, catalog order within ties
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].doc_id < pair[1].doc_id);
        }
    }

    // INVARIANT 4: No terms, no results
    if terms.is_empty() {
        assert!(hits.is_empty());
    }
});
