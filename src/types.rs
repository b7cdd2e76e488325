// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the documentation search.
//!
//! A catalog is a fixed list of [`DocEntry`] records. Searching produces
//! [`SearchHit`]s (catalog position plus score), the session keeps the matching
//! entries, and activating one of them yields a [`NavigationAction`] for the
//! host page to carry out.
//!
//! # Invariants
//!
//! - **DocEntry**: `title` and `url` are non-empty for catalogs loaded from JSON.
//!   The built-in catalog satisfies this by construction.
//!
//! - **SearchHit**: `doc_id < catalog.len()`. Hits are only ever produced by
//!   scanning the catalog they point into.
//!
//! - **NavigationAction**: `ScrollTo` iff the url starts with `#`. The url decides
//!   navigation, never the section or anything computed at search time.

use serde::{Deserialize, Serialize};

/// Header height the host subtracts when smooth-scrolling to an anchor,
/// so the target isn't hidden under the fixed navigation bar.
pub const SCROLL_OFFSET_PX: i32 = 80;

/// One documentation record in the catalog.
///
/// Immutable once the catalog is built. `title`, `description` and `tags`
/// are searched case-insensitively; `section` only drives grouping and `url`
/// only drives navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocEntry {
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub section: String,
    pub url: String,
    /// Space-separated keywords, not necessarily unique.
    #[serde(default)]
    pub tags: String,
}

impl DocEntry {
    pub fn new(title: &str, description: &str, section: &str, url: &str, tags: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            section: section.to_string(),
            url: url.to_string(),
            tags: tags.to_string(),
        }
    }

    /// In-page anchors (`#server`) scroll; everything else opens externally.
    #[inline]
    pub fn is_anchor(&self) -> bool {
        self.url.starts_with('#')
    }

    /// Where a rendered link for this entry should open.
    pub fn link_target(&self) -> LinkTarget {
        if self.is_anchor() {
            LinkTarget::SameContext
        } else {
            LinkTarget::NewContext
        }
    }
}

/// The `target` attribute a result link renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    #[serde(rename = "_self")]
    SameContext,
    #[serde(rename = "_blank")]
    NewContext,
}

impl LinkTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkTarget::SameContext => "_self",
            LinkTarget::NewContext => "_blank",
        }
    }
}

/// A matching catalog entry with its additive relevance score.
///
/// `doc_id` is the entry's position in the catalog, which doubles as the
/// tie-break key: equal scores keep catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub doc_id: usize,
    pub score: u32,
}

/// What the host page should do after the user confirms a result.
///
/// The engine never scrolls or opens anything itself; it reports intent and
/// the UI adapter performs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NavigationAction {
    /// Smooth-scroll to an in-page anchor, offset by [`SCROLL_OFFSET_PX`].
    ScrollTo {
        #[serde(rename = "targetUrl")]
        target_url: String,
    },
    /// Open the url in a new browsing context.
    OpenExternal {
        #[serde(rename = "targetUrl")]
        target_url: String,
    },
}

impl NavigationAction {
    /// Classify a url: a leading `#` means an in-page anchor.
    pub fn for_url(url: &str) -> Self {
        if url.starts_with('#') {
            NavigationAction::ScrollTo {
                target_url: url.to_string(),
            }
        } else {
            NavigationAction::OpenExternal {
                target_url: url.to_string(),
            }
        }
    }

    pub fn target_url(&self) -> &str {
        match self {
            NavigationAction::ScrollTo { target_url } => target_url,
            NavigationAction::OpenExternal { target_url } => target_url,
        }
    }

    pub fn is_scroll(&self) -> bool {
        matches!(self, NavigationAction::ScrollTo { .. })
    }
}

/// Cursor movement through the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// `+1` / `-1`, the step applied to the cursor.
    pub fn step(self) -> i64 {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}
