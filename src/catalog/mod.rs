// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed documentation catalog.
//!
//! A [`Catalog`] is built once and never mutated. Construction lowercases every
//! searchable field up front, so a search is a linear scan of `contains` calls
//! with no per-query allocation beyond the terms themselves.
//!
//! Sources:
//! - [`Catalog::builtin`]: the page's own documentation index.
//! - [`Catalog::from_json_str`] / [`Catalog::load`]: a JSON array of entries,
//!   validated on the way in.

mod builtin;

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::types::DocEntry;
use crate::utils::{haystack, normalize};

/// Lowercased searchable fields of one entry, computed at catalog build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEntry {
    pub title: String,
    pub description: String,
    pub tags: String,
    /// `title description tags`, lowercased.
    pub haystack: String,
}

impl IndexedEntry {
    pub fn from_entry(entry: &DocEntry) -> Self {
        Self {
            title: normalize(&entry.title),
            description: normalize(&entry.description),
            tags: normalize(&entry.tags),
            haystack: haystack(&entry.title, &entry.description, &entry.tags),
        }
    }
}

/// An immutable, ordered list of documentation entries.
///
/// Order is meaningful: it is the curatorial priority used to break score
/// ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<DocEntry>,
    indexed: Vec<IndexedEntry>,
}

impl Catalog {
    /// Build a catalog from entries in curatorial order.
    ///
    /// No validation: trusted sources (the built-in list, tests) go through
    /// here. External input should use [`Catalog::try_new`].
    pub fn new(entries: Vec<DocEntry>) -> Self {
        let indexed = entries.iter().map(IndexedEntry::from_entry).collect();
        Self { entries, indexed }
    }

    /// The documentation index shipped with the page.
    pub fn builtin() -> Self {
        Self::new(builtin::entries())
    }

    /// Build a catalog from untrusted entries, rejecting any that could
    /// never render or navigate.
    pub fn try_new(entries: Vec<DocEntry>) -> Result<Self> {
        validate_entries(&entries)?;
        Ok(Self::new(entries))
    }

    /// Parse and validate a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<DocEntry> = serde_json::from_str(json)?;
        tracing::debug!(entries = entries.len(), "catalog parsed");
        Self::try_new(entries)
    }

    /// Read a catalog file. Called once at startup; the result is fixed for
    /// the rest of the process.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    pub fn get(&self, doc_id: usize) -> Option<&DocEntry> {
        self.entries.get(doc_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their lowercased fields, in catalog order.
    pub(crate) fn iter_indexed(&self) -> impl Iterator<Item = (usize, &IndexedEntry)> {
        self.indexed.iter().enumerate()
    }

    /// Distinct sections in order of first appearance.
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !sections.contains(&entry.section.as_str()) {
                sections.push(&entry.section);
            }
        }
        sections
    }
}

/// Reject entries that could never render or navigate.
fn validate_entries(entries: &[DocEntry]) -> Result<()> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.title.trim().is_empty() {
            return Err(CatalogError::EmptyField { index, field: "title" });
        }
        if entry.url.trim().is_empty() {
            return Err(CatalogError::EmptyField { index, field: "url" });
        }
        if entry.section.trim().is_empty() {
            tracing::warn!(index, title = %entry.title, "catalog entry has no section");
        }
    }
    Ok(())
}
