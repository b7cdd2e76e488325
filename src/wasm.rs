//! WebAssembly bindings for the documentation search.
//!
//! The page script stays a thin adapter: it forwards `input`, `keydown` and
//! outside-click events to [`DocSearch`], renders the returned view, and
//! performs any navigation the engine reports.
//!
//! ```js
//! const search = DocSearch.builtin();
//! input.addEventListener('input', () => render(search.input(input.value)));
//! input.addEventListener('keydown', (e) => {
//!     const { handled, action, view } = search.key(e.key);
//!     if (handled) e.preventDefault();
//!     if (action) navigate(action);
//!     render(view);
//! });
//! ```

use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::catalog::Catalog;
use crate::engine::{EngineView, SearchEngine};
use crate::input::{hint_visible, is_focus_shortcut, KeyPress, SearchEvent};
use crate::scoring::SearchOptions;
use crate::search::search_scored;
use crate::types::{DocEntry, NavigationAction, SCROLL_OFFSET_PX};

/// Search result output for the page script's own rendering.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    title: &'a str,
    description: &'a str,
    section: &'a str,
    url: &'a str,
    score: u32,
}

/// Reply to a key press.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyOutput<'a> {
    /// Whether the page should `preventDefault()`.
    handled: bool,
    action: Option<NavigationAction>,
    /// Pixels to subtract from the anchor's top when scrolling.
    scroll_offset: i32,
    view: EngineView<'a>,
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM-accessible search box controller.
#[wasm_bindgen]
pub struct DocSearch {
    engine: SearchEngine,
}

#[wasm_bindgen]
impl DocSearch {
    /// Create a controller over a catalog passed as an array of entries.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue) -> Result<DocSearch, JsValue> {
        let entries: Vec<DocEntry> = from_value(catalog).map_err(js_error)?;
        let catalog = Catalog::try_new(entries).map_err(js_error)?;
        Ok(DocSearch {
            engine: SearchEngine::new(catalog),
        })
    }

    /// Controller over the built-in documentation index.
    #[wasm_bindgen]
    pub fn builtin() -> DocSearch {
        DocSearch {
            engine: SearchEngine::new(Catalog::builtin()),
        }
    }

    /// Get the number of catalog entries.
    #[wasm_bindgen(js_name = entryCount)]
    pub fn entry_count(&self) -> usize {
        self.engine.catalog().len()
    }

    /// The query box changed. Returns the new view.
    #[wasm_bindgen]
    pub fn input(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.engine.handle(SearchEvent::QueryChanged(value.to_string()));
        self.view()
    }

    /// A key was pressed inside the query box.
    #[wasm_bindgen]
    pub fn key(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let (handled, action) = self.engine.handle_key(key);
        to_value(&KeyOutput {
            handled,
            action,
            scroll_offset: SCROLL_OFFSET_PX,
            view: self.engine.view(),
        })
        .map_err(js_error)
    }

    /// A click landed outside the search widget.
    #[wasm_bindgen(js_name = clickOutside)]
    pub fn click_outside(&mut self) -> Result<JsValue, JsValue> {
        self.engine.handle(SearchEvent::ClickOutside);
        self.view()
    }

    #[wasm_bindgen]
    pub fn close(&mut self) -> Result<JsValue, JsValue> {
        self.engine.close();
        self.view()
    }

    /// Current panel state: query, open flag, active index, grouped results.
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_value(&self.engine.view()).map_err(js_error)
    }

    /// Stateless search with optional `{ limit, weights }`.
    ///
    /// Omitted or `null` options use the defaults. Options that do not match
    /// that shape are an error, not silently replaced.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, options: Option<JsValue>) -> Result<JsValue, JsValue> {
        let options: SearchOptions = match options {
            Some(opts) if !opts.is_null() && !opts.is_undefined() => {
                from_value(opts).map_err(js_error)?
            }
            _ => SearchOptions::default(),
        };

        let catalog = self.engine.catalog();
        let results: Vec<SearchResultOutput<'_>> = search_scored(catalog, query, &options)
            .into_iter()
            .filter_map(|hit| {
                catalog.get(hit.doc_id).map(|entry| SearchResultOutput {
                    title: &entry.title,
                    description: &entry.description,
                    section: &entry.section,
                    url: &entry.url,
                    score: hit.score,
                })
            })
            .collect();

        to_value(&results).map_err(js_error)
    }

    /// Should a document-level key press focus the search box?
    ///
    /// `press` is `{ key, ctrlKey, metaKey, altKey }`; `focused_tag` is
    /// `document.activeElement?.tagName`.
    #[wasm_bindgen(js_name = isFocusShortcut)]
    pub fn is_focus_shortcut(press: JsValue, focused_tag: Option<String>) -> bool {
        from_value::<KeyPress>(press)
            .map(|press| is_focus_shortcut(&press, focused_tag.as_deref()))
            .unwrap_or(false)
    }

    /// Whether the `/` hint should be visible.
    #[wasm_bindgen(js_name = hintVisible)]
    pub fn hint_visible(focused: bool, input_value: &str) -> bool {
        hint_visible(focused, input_value)
    }
}
