//! Pagination module
//!
//! Walks a Hydra-paginated feed by following `hydra:next`.
//!
//! # Overview
//!
//! A [`PageWalker`] pulls pages from a [`PageSource`] one at a time. Each walk
//! is a small state machine: it stays [`WalkState::Pending`] while there is a
//! page to fetch and ends in one of three [`WalkOutcome`]s:
//!
//! - `Found` - the target connection was on the last fetched page
//! - `Exhausted` - the feed ended without a match
//! - `Failed` - a fetch, decode or page-limit error

mod types;
mod walker;

pub use types::{PageSource, WalkOutcome, WalkReport, WalkState};
pub use walker::{resolve_next, PageCallback, PageWalker};
