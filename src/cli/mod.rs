//! CLI module
//!
//! Command-line interface for searching a feed.
//!
//! # Commands
//!
//! - `find` - Walk the feed until a connection is found (default)
//! - `pages` - List page ids along the hydra:next chain

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
