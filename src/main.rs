// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `notepub` command-line tool.
//!
//! ```text
//! notepub search "rust" --site public/ --base /blog
//! notepub search "rust" --origin https://example.com --mode server --format json
//! notepub slug "Привет, мир" "Tips & Tricks"
//! notepub inspect public/search.json
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    native::init_tracing(cli.verbose);
    native::run(cli.command).await
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use crate::cli::display::{self, row, section_bot, section_mid, section_top};
    use crate::cli::{Commands, Format, SurfaceArg};
    use anyhow::{bail, Context, Result};
    use notepub::fetch::decode_response;
    use notepub::fetch::site::SiteFetcher;
    use notepub::{
        slugify, AnchorAllocator, Fetcher, Renderer, SearchConfig, SearchEngine, SearchItem,
        SearchMode, SearchResponse,
    };
    use std::collections::HashSet;
    use std::path::Path;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    /// `warn` unless `RUST_LOG` says otherwise; `--verbose` forces `info`.
    pub fn init_tracing(verbose: bool) {
        let filter = if verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    pub async fn run(command: Commands) -> Result<()> {
        match command {
            Commands::Search {
                query,
                site,
                origin,
                mode,
                base,
                limit,
                config,
                format,
                surface,
            } => {
                let config = load_config(config.as_deref(), mode, base, limit)?;
                match (site, origin) {
                    (Some(dir), _) => {
                        let fetcher = SiteFetcher::new(&dir).mounted_at(&config.base_path);
                        let source = dir.display().to_string();
                        run_search(config, fetcher, &source, &query, format, surface).await
                    }
                    (None, Some(origin)) => {
                        run_remote(config, &origin, &query, format, surface).await
                    }
                    (None, None) => bail!("either --site or --origin is required"),
                }
            }
            Commands::Slug { texts, unique } => {
                print_slugs(&texts, unique);
                Ok(())
            }
            Commands::Inspect { file } => inspect(&file).await,
        }
    }

    /// Config file first, then flags on top.
    fn load_config(
        path: Option<&Path>,
        mode: Option<SearchMode>,
        base: Option<String>,
        limit: Option<usize>,
    ) -> Result<SearchConfig> {
        let mut config = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read config {}", path.display()))?;
                SearchConfig::from_json(&json)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => SearchConfig::default(),
        };
        if let Some(mode) = mode {
            config.mode = mode;
        }
        if let Some(base) = base {
            config.base_path = base;
        }
        if let Some(limit) = limit {
            config.limit = limit;
        }
        Ok(config.validate()?)
    }

    #[cfg(feature = "http")]
    async fn run_remote(
        config: SearchConfig,
        origin: &str,
        query: &str,
        format: Format,
        surface: SurfaceArg,
    ) -> Result<()> {
        use notepub::fetch::http::HttpFetcher;

        let origin_url = url::Url::parse(origin).with_context(|| format!("bad origin {origin}"))?;
        let fetcher = HttpFetcher::new(origin_url)?;
        run_search(config, fetcher, origin, query, format, surface).await
    }

    #[cfg(not(feature = "http"))]
    async fn run_remote(
        _config: SearchConfig,
        _origin: &str,
        _query: &str,
        _format: Format,
        _surface: SurfaceArg,
    ) -> Result<()> {
        bail!("--origin needs the `http` feature")
    }

    async fn run_search<F: Fetcher>(
        config: SearchConfig,
        fetcher: F,
        source: &str,
        query: &str,
        format: Format,
        surface: SurfaceArg,
    ) -> Result<()> {
        let renderer = Renderer::new(&config);
        let mode = config.mode;
        let engine = SearchEngine::new(config, fetcher);
        let items = engine.search(query).await;
        info!(query, %mode, results = items.len(), "search finished");

        match format {
            Format::Json => {
                let response = SearchResponse { items };
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            Format::Html => println!("{}", renderer.render(surface.into(), query, &items)),
            Format::Text => print_results(&renderer, source, mode, query, &items),
        }
        Ok(())
    }

    fn print_results(
        renderer: &Renderer,
        source: &str,
        mode: SearchMode,
        query: &str,
        items: &[SearchItem],
    ) {
        section_top("SEARCH");
        display::field("query", query);
        display::field("mode", &display::mode_badge(mode));
        display::field("source", &display::truncate(source, 56));
        section_mid(&format!("RESULTS ({})", items.len()));
        if items.is_empty() {
            row(&format!(" {}", display::muted("nothing found")));
        }
        for (i, item) in items.iter().enumerate() {
            row(&format!(
                " {} {}",
                display::rank(i + 1),
                display::truncate(&item.title, 60)
            ));
            row(&format!(
                "      {}",
                display::muted(&display::truncate(&renderer.href(item), 64))
            ));
            if !item.snippet.is_empty() {
                row(&format!("      {}", display::truncate(&item.snippet, 64)));
            }
        }
        section_bot();
    }

    fn print_slugs(texts: &[String], unique: bool) {
        let mut anchors = AnchorAllocator::new();
        for text in texts {
            let slug = if unique {
                anchors.allocate(text, |_| false).unwrap_or_default()
            } else {
                slugify(text)
            };
            if slug.is_empty() {
                println!("{}", display::muted("(no anchor)"));
            } else {
                println!("{}", slug);
            }
        }
    }

    /// Counts worth checking before deploying an index.
    #[derive(Debug, Default, PartialEq, Eq)]
    pub struct IndexStats {
        pub items: usize,
        pub untitled: usize,
        pub without_path: usize,
        pub with_snippet: usize,
        pub with_thumbnail: usize,
        pub duplicate_paths: usize,
    }

    impl IndexStats {
        pub fn from_items(items: &[SearchItem]) -> Self {
            let mut seen = HashSet::new();
            let mut stats = IndexStats {
                items: items.len(),
                ..Self::default()
            };
            for item in items {
                stats.untitled += usize::from(item.title.trim().is_empty());
                stats.without_path += usize::from(item.path.is_empty());
                stats.with_snippet += usize::from(!item.snippet.is_empty());
                stats.with_thumbnail += usize::from(item.thumbnail_src().is_some());
                if !item.path.is_empty() && !seen.insert(item.path.as_str()) {
                    stats.duplicate_paths += 1;
                }
            }
            stats
        }
    }

    async fn inspect(file: &Path) -> Result<()> {
        let body = tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("cannot read {}", file.display()))?;
        let response = decode_response(&body)
            .with_context(|| format!("{} is not a search index", file.display()))?;
        let stats = IndexStats::from_items(&response.items);

        section_top("INDEX");
        display::field("file", &display::truncate(&file.display().to_string(), 56));
        display::field("items", &stats.items.to_string());
        display::field("snippets", &stats.with_snippet.to_string());
        display::field("images", &stats.with_thumbnail.to_string());
        section_mid("PROBLEMS");
        display::field("untitled", &display::problem_count(stats.untitled));
        display::field("no path", &display::problem_count(stats.without_path));
        display::field("dup paths", &display::problem_count(stats.duplicate_paths));
        section_bot();
        Ok(())
    }

}
