// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-interaction search state: the query, the result panel and its cursor.
//!
//! # State machine
//!
//! ```text
//!                 query_changed(non-empty)
//!   ┌────────┐ ─────────────────────────────▶ ┌──────────────────────────┐
//!   │ Closed │                                │ Open { results, active } │ ◀─┐
//!   └────────┘ ◀───────────────────────────── └──────────────────────────┘   │
//!              query_changed(empty) | close |            │ move_selection   │
//!              activate_selection                        └──────────────────┘
//! ```
//!
//! Initial state is `Closed`. There is no terminal state; the session is
//! reused for the whole page lifetime.
//!
//! Results are replaced wholesale on every query change and never edited in
//! place. Only the cursor moves while the panel stays open.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::contracts::check_cursor_in_range;
use crate::scoring::SearchOptions;
use crate::search::search_with_options;
use crate::types::{Direction, DocEntry, NavigationAction};

/// Whether the result panel is presented, and what it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionState {
    #[default]
    Closed,
    /// Open with possibly zero results: "no results" is a visible state,
    /// distinct from closed.
    Open {
        results: Vec<DocEntry>,
        #[serde(rename = "activeIndex")]
        active: Option<usize>,
    },
}

/// The mutable search state for one UI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    query: String,
    state: SessionState,
    options: SearchOptions,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that searches with non-default weights or cap.
    pub fn with_options(options: SearchOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open { .. })
    }

    /// Current results; always empty while closed.
    pub fn results(&self) -> &[DocEntry] {
        match &self.state {
            SessionState::Open { results, .. } => results,
            SessionState::Closed => &[],
        }
    }

    /// Selection cursor; `None` means nothing is highlighted.
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            SessionState::Open { active, .. } => active,
            SessionState::Closed => None,
        }
    }

    /// The cursor as the `-1`-based integer the page script expects.
    pub fn active_index_signed(&self) -> i64 {
        self.active_index().map_or(-1, |i| i as i64)
    }

    pub fn active_entry(&self) -> Option<&DocEntry> {
        self.active_index().and_then(|i| self.results().get(i))
    }

    /// The query box changed.
    ///
    /// Blank input closes the panel. Anything else re-runs the search,
    /// resets the cursor and opens the panel, even with zero results.
    pub fn on_query_changed(&mut self, catalog: &Catalog, raw_input: &str) {
        self.query = raw_input.to_string();

        if raw_input.trim().is_empty() {
            self.state = SessionState::Closed;
            tracing::debug!("query cleared, panel closed");
            return;
        }

        let results: Vec<DocEntry> = search_with_options(catalog, raw_input, &self.options)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(query = raw_input, results = results.len(), "panel opened");
        self.state = SessionState::Open {
            results,
            active: None,
        };
    }

    /// Move the cursor one step, clamping at both ends. Ignored while closed.
    ///
    /// `Next` from the last result stays on the last result; `Previous` from
    /// the first result drops back to no selection.
    pub fn move_selection(&mut self, direction: Direction) {
        let SessionState::Open { results, active } = &mut self.state else {
            return;
        };

        // INVARIANT: cursor stays in -1..len, -1 meaning no selection
        let last = results.len() as i64 - 1;
        let current = active.map_or(-1, |i| i as i64);
        let moved = (current + direction.step()).clamp(-1, last);

        *active = usize::try_from(moved).ok();
        check_cursor_in_range(*active, results.len());
    }

    /// Confirm the highlighted result.
    ///
    /// Returns the navigation the host should perform and closes the panel,
    /// so a repeated Enter can't navigate again off a stale result list.
    /// Without a valid selection this does nothing and the panel stays open.
    pub fn activate_selection(&mut self) -> Option<NavigationAction> {
        let action = self
            .active_entry()
            .map(|entry| NavigationAction::for_url(&entry.url))?;

        tracing::debug!(target_url = action.target_url(), "result activated");
        // INVARIANT: a successful activation always leaves the session closed
        self.close();
        Some(action)
    }

    /// Reset to the initial state: empty query, closed panel, no cursor.
    pub fn close(&mut self) {
        self.query.clear();
        self.state = SessionState::Closed;
    }
}
