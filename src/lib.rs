//! In-page documentation search with keyboard navigation.
//!
//! A small, fixed catalog of documentation entries is searched with
//! multi-term substring matching and simple additive scoring. A session
//! tracks the result panel and its selection cursor, and confirming a result
//! yields a navigation intent for the host page to carry out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  catalog.rs │────▶│  scoring.rs  │────▶│  search.rs  │
//! │ (DocEntry,  │     │ (10/5/2,     │     │ (AND match, │
//! │  lowercased)│     │  options)    │     │  rank, cap) │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//!                                                 ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  input.rs   │────▶│  engine.rs   │────▶│ session.rs  │
//! │ (key names, │     │ (events in,  │     │ (Closed /   │
//! │  shortcut)  │     │  view out)   │     │  Open)      │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                  grouping.rs, wasm.rs
//! ```
//!
//! # Usage
//!
//! ```
//! use docsearch::{Catalog, Direction, NavigationAction, SearchSession};
//!
//! let catalog = Catalog::builtin();
//! let mut session = SearchSession::new();
//!
//! session.on_query_changed(&catalog, "hmac signing");
//! session.move_selection(Direction::Next);
//!
//! let action = session.activate_selection();
//! assert_eq!(
//!     action,
//!     Some(NavigationAction::ScrollTo { target_url: "#security".to_string() })
//! );
//! assert!(!session.is_open());
//! ```

// Module declarations
mod catalog;
pub mod contracts;
mod engine;
mod error;
mod grouping;
mod input;
mod scoring;
mod search;
mod session;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{Catalog, IndexedEntry};
pub use engine::{EngineView, SearchEngine};
pub use error::CatalogError;
pub use grouping::{group_by_section, GroupItem, ResultGroup, EMPTY_RESULTS_MESSAGE};
pub use input::{hint_visible, is_focus_shortcut, KeyPress, SearchEvent, SearchKey, FOCUS_SHORTCUT_KEY};
pub use scoring::{
    entry_score, term_score, ScoringWeights, SearchOptions, DESCRIPTION_WEIGHT, MAX_RESULTS,
    TAG_WEIGHT, TITLE_WEIGHT,
};
pub use search::{search, search_scored, search_with_options};
pub use session::{SearchSession, SessionState};
pub use types::{Direction, DocEntry, LinkTarget, NavigationAction, SearchHit, SCROLL_OFFSET_PX};
pub use utils::{haystack, normalize, parse_query};

#[cfg(feature = "wasm")]
pub use wasm::DocSearch;
