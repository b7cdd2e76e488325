// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsearch command-line interface.
//!
//! Three subcommands: `search` runs a one-shot query, `catalog` lists the
//! indexed entries by section, and `repl` drives an interactive session from
//! stdin so keyboard navigation can be exercised without a browser.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsearch",
    about = "Search the documentation catalog from the terminal",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog entries against a query
    Search {
        /// Search query (whitespace-separated terms, all must match)
        query: String,

        /// JSON catalog to search instead of the built-in one
        #[arg(short, long, env = "DOCSEARCH_CATALOG")]
        catalog: Option<PathBuf>,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "12")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every catalog entry grouped by section
    Catalog {
        /// JSON catalog to list instead of the built-in one
        #[arg(short, long, env = "DOCSEARCH_CATALOG")]
        catalog: Option<PathBuf>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: type queries, navigate with :down / :up / :enter / :esc
    Repl {
        /// JSON catalog to search instead of the built-in one
        #[arg(short, long, env = "DOCSEARCH_CATALOG")]
        catalog: Option<PathBuf>,
    },
}
