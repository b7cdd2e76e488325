// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Scores are additive integers. Every query term contributes independently,
//! and within a term each field it hits adds its weight:
//!
//! ```text
//! term ⊂ title        → +10
//! term ⊂ tags         → +5
//! term ⊂ description  → +2
//! ```
//!
//! So a single term can contribute 0, 2, 5, 7, 10, 12, 15 or 17. Nothing is
//! normalized by field length or term frequency. The weights are tuned for the
//! result panel and ranking behavior depends on them exactly, so they live here
//! as named constants and [`ScoringWeights::default`] reproduces them.
//!
//! # Key Invariant: Title Dominance
//!
//! ```text
//! TITLE_WEIGHT > TAG_WEIGHT + DESCRIPTION_WEIGHT   (10 > 7)
//! ```
//!
//! For a single-term query, an entry whose title contains the term always
//! outranks one that only mentions it in tags and description. Checked at
//! compile time in `contracts`.

use serde::Deserialize;

use crate::catalog::IndexedEntry;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Weight for a term found in the title.
pub const TITLE_WEIGHT: u32 = 10;

/// Weight for a term found in the tags.
pub const TAG_WEIGHT: u32 = 5;

/// Weight for a term found in the description.
pub const DESCRIPTION_WEIGHT: u32 = 2;

/// Maximum number of results a search returns.
pub const MAX_RESULTS: usize = 12;

/// Per-field weights. Defaults to the tuned constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub title: u32,
    pub tags: u32,
    pub description: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title: TITLE_WEIGHT,
            tags: TAG_WEIGHT,
            description: DESCRIPTION_WEIGHT,
        }
    }
}

/// Search options: result cap and field weights.
///
/// Deserializable so the browser bindings can pass `{ limit, weights }`
/// straight through; missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of results to return (default: 12)
    pub limit: usize,
    /// Field weights (default: 10/5/2)
    pub weights: ScoringWeights,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: MAX_RESULTS,
            weights: ScoringWeights::default(),
        }
    }
}

impl SearchOptions {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }
}

/// Score one term against one entry.
///
/// All three checks run against lowercased fields, including tags. A
/// capitalized tag such as `"MQTT"` still earns the tag weight for `mqtt`.
///
/// Caller-supplied weights can be arbitrarily large, so sums saturate at
/// `u32::MAX` instead of overflowing.
#[inline]
pub fn term_score(entry: &IndexedEntry, term: &str, weights: &ScoringWeights) -> u32 {
    let mut score = 0u32;
    if entry.title.contains(term) {
        score = score.saturating_add(weights.title);
    }
    if entry.tags.contains(term) {
        score = score.saturating_add(weights.tags);
    }
    if entry.description.contains(term) {
        score = score.saturating_add(weights.description);
    }
    score
}

/// Score an entry against all query terms, or `None` if any term is missing
/// from the haystack.
///
/// AND semantics: one missing term rejects the entry outright, no partial
/// credit.
pub fn entry_score(entry: &IndexedEntry, terms: &[String], weights: &ScoringWeights) -> Option<u32> {
    let mut total = 0u32;
    for term in terms {
        // INVARIANT: every term must be a substring of the haystack
        if !entry.haystack.contains(term.as_str()) {
            return None;
        }
        total = total.saturating_add(term_score(entry, term, weights));
    }
    Some(total)
}
