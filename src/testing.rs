//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::types::DocEntry;

/// Create a test entry with an external url and a neutral description.
///
/// This is the canonical implementation used across all tests.
pub fn make_entry(title: &str, tags: &str) -> DocEntry {
    DocEntry::new(
        title,
        &format!("Reference for {}.", title),
        "Reference",
        &format!("https://docs.example.com/{}", title.to_lowercase().replace(' ', "-")),
        tags,
    )
}

/// Create a test entry in a given section.
pub fn make_entry_in(section: &str, title: &str, tags: &str) -> DocEntry {
    DocEntry {
        section: section.to_string(),
        ..make_entry(title, tags)
    }
}

/// Create a test entry that navigates to an in-page anchor.
pub fn make_anchor_entry(title: &str, anchor: &str) -> DocEntry {
    DocEntry {
        url: format!("#{}", anchor),
        ..make_entry(title, "")
    }
}

/// Catalog of `n` entries that all carry the tag `common`, titled `Doc 0..n`.
pub fn uniform_catalog(n: usize) -> Catalog {
    Catalog::new(
        (0..n)
            .map(|i| make_entry(&format!("Doc {}", i), "common"))
            .collect(),
    )
}
