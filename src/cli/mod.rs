// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the notepub command-line interface.
//!
//! Three subcommands: `search` runs the same engine the theme ships against a
//! built site directory or a live origin, `slug` prints heading anchors, and
//! `inspect` summarizes a `search.json` before it is deployed.

pub mod display;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use notepub::SearchMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "notepub",
    about = "Search and anchor tooling for the notepub blog theme",
    version
)]
pub struct Cli {
    /// Log engine activity (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a query the way the search modal or page would
    #[command(group(ArgGroup::new("source").required(true).args(["site", "origin"])))]
    Search {
        /// Search query
        query: String,

        /// Built site directory to read search.json from
        #[arg(long)]
        site: Option<PathBuf>,

        /// Live site origin, e.g. https://example.com
        #[arg(long)]
        origin: Option<String>,

        /// Backend to use (defaults to the config file, then static)
        #[arg(long)]
        mode: Option<SearchMode>,

        /// Path prefix the site is served under
        #[arg(long, env = "NOTEPUB_BASE_URL")]
        base: Option<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// JSON config file (same shape as the object passed to `boot`)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Surface whose markup `--format html` reproduces
        #[arg(long, value_enum, default_value_t = SurfaceArg::Page)]
        surface: SurfaceArg,
    },

    /// Print the anchor id each heading text would get
    Slug {
        /// Heading texts, in document order
        #[arg(required = true)]
        texts: Vec<String>,

        /// Number repeated slugs (-2, -3, ...) as headings on one page would be
        #[arg(short, long)]
        unique: bool,
    },

    /// Summarize a search.json file
    Inspect {
        /// Path to search.json
        file: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Html,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceArg {
    Modal,
    Page,
}

impl From<SurfaceArg> for notepub::Surface {
    fn from(surface: SurfaceArg) -> Self {
        match surface {
            SurfaceArg::Modal => notepub::Surface::Modal,
            SurfaceArg::Page => notepub::Surface::Page,
        }
    }
}
