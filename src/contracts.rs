//! Runtime contracts for search results and session state.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on.
//! They are zero-cost in release builds (`debug_assert!`) and fail loudly
//! during development and under the test suite.
//!
//! | Contract                     | Property                                         |
//! |------------------------------|--------------------------------------------------|
//! | `check_hits_well_formed`     | capped, valid doc ids, descending, stable ties   |
//! | `check_cursor_in_range`      | active index is `None` or `< results.len()`      |
//! | (const block)                | title weight dominates tags + description        |

use crate::scoring::{DESCRIPTION_WEIGHT, MAX_RESULTS, TAG_WEIGHT, TITLE_WEIGHT};
use crate::types::SearchHit;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // INVARIANT: title_dominance
    // A title hit beats a tags + description hit for the same term.
    assert!(TITLE_WEIGHT > TAG_WEIGHT + DESCRIPTION_WEIGHT); // 10 > 7 ✓

    // INVARIANT: tags_beat_description
    assert!(TAG_WEIGHT > DESCRIPTION_WEIGHT); // 5 > 2 ✓

    // A zero cap would make every search look like "no results".
    assert!(MAX_RESULTS > 0);
};

// ============================================================================
// SEARCH RESULT CONTRACTS
// ============================================================================

/// Check that a ranked hit list is well-formed.
///
/// # Panics (debug builds only)
/// - more than `limit` hits
/// - a `doc_id` outside the catalog
/// - scores not in descending order
/// - equal scores out of catalog order (the tie-break)
#[inline]
pub fn check_hits_well_formed(hits: &[SearchHit], catalog_len: usize, limit: usize) {
    debug_assert!(
        hits.len() <= limit,
        "Contract violation: {} hits exceed limit {}",
        hits.len(),
        limit
    );

    for hit in hits {
        debug_assert!(
            hit.doc_id < catalog_len,
            "Contract violation: doc_id {} >= catalog len {}",
            hit.doc_id,
            catalog_len
        );
    }

    for pair in hits.windows(2) {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: score {} (doc {}) ranked above higher score {} (doc {})",
            pair[0].score,
            pair[0].doc_id,
            pair[1].score,
            pair[1].doc_id
        );
        debug_assert!(
            pair[0].score != pair[1].score || pair[0].doc_id < pair[1].doc_id,
            "Contract violation: tie at score {} broken against catalog order ({} before {})",
            pair[0].score,
            pair[0].doc_id,
            pair[1].doc_id
        );
    }
}

// ============================================================================
// SESSION CONTRACTS
// ============================================================================

/// Check that the selection cursor points at a result (or at nothing).
#[inline]
pub fn check_cursor_in_range(active: Option<usize>, results_len: usize) {
    if let Some(index) = active {
        debug_assert!(
            index < results_len,
            "Contract violation: active index {} >= results len {}",
            index,
            results_len
        );
    }
}
