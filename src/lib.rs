// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # lc-page-finder
//!
//! Finds one connection in a Linked Connections feed by walking its Hydra
//! pagination.
//!
//! Each page of the feed is a JSON-LD document with an `@id`, a `@graph` of
//! connections and a `hydra:next` link. The walker starts at a
//! departure-time-anchored page and follows `hydra:next` until the target
//! connection shows up or the feed runs out.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lc_page_finder::{FinderConfig, HttpClient, PageWalker, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = FinderConfig::default();
//!     let client = HttpClient::with_config(config.http_config())?;
//!     let walker = PageWalker::new(client).on_page(|page| println!("{}", page.id));
//!
//!     let (connection, page_id) = walker
//!         .find_connection(&config.start_uri(), &config.target)
//!         .await?;
//!     println!("{} is on {page_id}", connection.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  cli: Runner  ── FinderConfig (file + flags)           │
//! └───────────────────────────┬────────────────────────────┘
//!                             │
//! ┌───────────────────────────┴────────────────────────────┐
//! │  pagination: PageWalker                                │
//! │    Pending ──fetch──▶ Found | Exhausted | Failed       │
//! └───────────────────────────┬────────────────────────────┘
//!                             │ PageSource
//! ┌───────────────────────────┴────────────────────────────┐
//! │  http: HttpClient  ──▶  hydra: Page { @id, @graph }    │
//! └────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Hydra page and connection model
pub mod hydra;

/// HTTP client
pub mod http;

/// Page walking over hydra:next
pub mod pagination;

/// Search configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::FinderConfig;
pub use error::{Error, Result};
pub use http::{HttpClient, HttpClientConfig};
pub use hydra::{Connection, Page};
pub use pagination::{PageSource, PageWalker, WalkOutcome, WalkReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
