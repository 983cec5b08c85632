//! # gh-changelog
//!
//! Reads the GitHub changelog RSS feed and prints it in the terminal.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → Renderer
//!                      ↘ Launcher
//! ```
//!
//! - [`fetcher`]: one HTTP GET for the feed document
//! - [`normalizer`]: decodes RSS items and sorts them newest first
//! - [`render`]: compact table or verbose digest
//! - [`launcher`]: opens an entry's link by its display index
//!
//! ## Quick Start
//!
//! ```bash
//! # Latest entries
//! gh-changelog
//!
//! # Full text of every entry
//! gh-changelog --pretty
//!
//! # Open entry #3 in the browser
//! gh-changelog open 3
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// fetcher, normalizer and opener.
pub mod app;

/// Command-line interface using clap.
///
/// - no subcommand - list entries (`--pretty` for full text)
/// - `open <id>` - open an entry in the browser
pub mod cli;

/// Configuration loaded from `~/.config/gh-changelog/config.toml`.
pub mod config;

/// Core domain model: [`FeedEntry`](domain::FeedEntry).
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for feed fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Date and HTML-to-text formatting.
pub mod format;

/// Display index resolution and browser hand-off.
pub mod launcher;

/// RSS decoding and canonical ordering.
pub mod normalizer;

/// Compact and verbose output.
pub mod render;
