// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine facade: one catalog, one session, events in, intents out.
//!
//! This is what a UI adapter talks to. The adapter forwards input events,
//! renders [`EngineView`], and performs whatever [`NavigationAction`] comes
//! back. All behavior lives in `session`; this layer only routes events and
//! applies the "keys are ignored while closed" rule.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::grouping::{group_by_section, ResultGroup, EMPTY_RESULTS_MESSAGE};
use crate::input::{SearchEvent, SearchKey};
use crate::scoring::SearchOptions;
use crate::session::SearchSession;
use crate::types::NavigationAction;

/// Owns the fixed catalog and the session driven against it.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Catalog,
    session: SearchSession,
}

/// Serializable snapshot of what the panel should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineView<'a> {
    pub query: &'a str,
    pub is_open: bool,
    /// `-1` when nothing is highlighted.
    pub active_index: i64,
    pub result_count: usize,
    /// Set when the panel is open but empty.
    pub empty_message: Option<&'static str>,
    pub groups: Vec<ResultGroup<'a>>,
}

impl SearchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: SearchSession::new(),
        }
    }

    pub fn with_options(catalog: Catalog, options: SearchOptions) -> Self {
        Self {
            catalog,
            session: SearchSession::with_options(options),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Apply one input event. Returns a navigation intent when a result was
    /// confirmed.
    pub fn handle(&mut self, event: SearchEvent) -> Option<NavigationAction> {
        match event {
            SearchEvent::QueryChanged(raw) => {
                self.session.on_query_changed(&self.catalog, &raw);
                None
            }
            SearchEvent::ClickOutside => {
                self.session.close();
                None
            }
            // Navigation keys only mean something while the panel is up.
            _ if !self.session.is_open() => None,
            SearchEvent::Move(direction) => {
                self.session.move_selection(direction);
                None
            }
            SearchEvent::Confirm => self.session.activate_selection(),
            SearchEvent::Dismiss => {
                self.session.close();
                None
            }
        }
    }

    /// Unconditional reset, regardless of the current state.
    pub fn close(&mut self) {
        self.session.close();
    }

    /// Route a DOM key name. Returns `(handled, action)`: `handled` tells the
    /// adapter whether to suppress the key's default behavior.
    pub fn handle_key(&mut self, key: &str) -> (bool, Option<NavigationAction>) {
        let Some(search_key) = SearchKey::from_key_name(key) else {
            return (false, None);
        };
        if !self.session.is_open() {
            return (false, None);
        }
        // Enter with nothing highlighted keeps its default behavior.
        if search_key == SearchKey::Confirm && self.session.active_entry().is_none() {
            return (false, None);
        }
        (true, self.handle(search_key.to_event()))
    }

    pub fn view(&self) -> EngineView<'_> {
        let results = self.session.results();
        let is_open = self.session.is_open();
        EngineView {
            query: self.session.query(),
            is_open,
            active_index: self.session.active_index_signed(),
            result_count: results.len(),
            empty_message: (is_open && results.is_empty()).then_some(EMPTY_RESULTS_MESSAGE),
            groups: group_by_section(results, self.session.active_index()),
        }
    }
}
