// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog JSON parsing.
//!
//! Untrusted catalog files must either load into a searchable catalog or
//! fail with an error. Never a panic.

#![no_main]

use docsearch::{search, Catalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(catalog) = Catalog::from_json_str(json) {
        // Every loaded entry has a title and url to navigate to
        for entry in catalog.entries() {
            assert!(!entry.title.trim().is_empty());
            assert!(!entry.url.trim().is_empty());
        }
        let _ = search(&catalog, "a");
    }
});
