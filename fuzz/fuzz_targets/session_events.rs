// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the session state machine.
//!
//! Replays arbitrary sequences of typing, arrow keys, Enter, Escape and
//! outside clicks through the engine and checks the cursor and panel
//! invariants after every step.

#![no_main]

use arbitrary::Arbitrary;
use docsearch::{Catalog, Direction, SearchEngine, SearchEvent};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Step {
    Type(String),
    Key(KeyName),
    Down,
    Up,
    Confirm,
    Dismiss,
    ClickOutside,
}

#[derive(Debug, Arbitrary)]
enum KeyName {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl KeyName {
    fn as_str(&self) -> &'static str {
        match self {
            KeyName::ArrowDown => "ArrowDown",
            KeyName::ArrowUp => "ArrowUp",
            KeyName::Enter => "Enter",
            KeyName::Escape => "Escape",
            KeyName::Other => "a",
        }
    }
}

fuzz_target!(|steps: Vec<Step>| {
    let mut engine = SearchEngine::new(Catalog::builtin());

    for step in steps.into_iter().take(64) {
        let was_open = engine.session().is_open();
        let action = match step {
            Step::Type(text) => engine.handle(SearchEvent::QueryChanged(text)),
            Step::Key(key) => engine.handle_key(key.as_str()).1,
            Step::Down => engine.handle(SearchEvent::Move(Direction::Next)),
            Step::Up => engine.handle(SearchEvent::Move(Direction::Previous)),
            Step::Confirm => engine.handle(SearchEvent::Confirm),
            Step::Dismiss => engine.handle(SearchEvent::Dismiss),
            Step::ClickOutside => engine.handle(SearchEvent::ClickOutside),
        };

        let session = engine.session();

        // INVARIANT 1: Cursor stays within -1..len
        let active = session.active_index_signed();
        assert!(active >= -1 && active < session.results().len() as i64);

        // INVARIANT 2: A navigation closes the panel and only happens while open
        if action.is_some() {
            assert!(was_open);
            assert!(!session.is_open());
            assert_eq!(session.query(), "");
        }

        // INVARIANT 3: Closed means no results
        if !session.is_open() {
            assert!(session.results().is_empty());
        }
    }
});
