//! Keyboard and pointer input, reduced to engine events.
//!
//! The host page forwards raw DOM key names and a little focus context; this
//! module decides what they mean. Nothing here touches the DOM.

use serde::Deserialize;

use crate::types::Direction;

/// The key that jumps to the search box from anywhere on the page.
pub const FOCUS_SHORTCUT_KEY: &str = "/";

/// Elements that keep `/` for themselves while focused.
const TEXT_ENTRY_TAGS: &[&str] = &["INPUT", "TEXTAREA", "SELECT"];

/// Everything the engine reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    QueryChanged(String),
    Move(Direction),
    Confirm,
    Dismiss,
    ClickOutside,
}

/// Keys the search box handles while it has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Next,
    Previous,
    Confirm,
    Dismiss,
}

impl SearchKey {
    /// Map a DOM `KeyboardEvent.key` name. Other keys belong to the text field.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(SearchKey::Next),
            "ArrowUp" => Some(SearchKey::Previous),
            "Enter" => Some(SearchKey::Confirm),
            "Escape" => Some(SearchKey::Dismiss),
            _ => None,
        }
    }

    pub fn to_event(self) -> SearchEvent {
        match self {
            SearchKey::Next => SearchEvent::Move(Direction::Next),
            SearchKey::Previous => SearchEvent::Move(Direction::Previous),
            SearchKey::Confirm => SearchEvent::Confirm,
            SearchKey::Dismiss => SearchEvent::Dismiss,
        }
    }
}

/// A global key press with its modifier state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyPress {
    pub key: String,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub alt_key: bool,
}

impl KeyPress {
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    fn has_modifier(&self) -> bool {
        self.ctrl_key || self.meta_key || self.alt_key
    }
}

/// Should this key press move focus to the search box?
///
/// `focused_tag` is the tag name of the currently focused element, if any.
/// Typing `/` into another text field is just typing.
pub fn is_focus_shortcut(press: &KeyPress, focused_tag: Option<&str>) -> bool {
    if press.key != FOCUS_SHORTCUT_KEY || press.has_modifier() {
        return false;
    }
    match focused_tag {
        Some(tag) => !TEXT_ENTRY_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag)),
        None => true,
    }
}

/// Whether the `/` hint next to the search box should be visible.
///
/// Hidden while the box has focus; after blur it only comes back if the
/// box is empty.
pub fn hint_visible(focused: bool, input_value: &str) -> bool {
    !focused && input_value.is_empty()
}
