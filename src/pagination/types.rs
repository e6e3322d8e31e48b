//! Walk types and traits
//!
//! Defines the page source abstraction and the states a walk moves through.

use crate::error::{Error, Result};
use crate::hydra::{Connection, Page};
use async_trait::async_trait;
use std::sync::Arc;

/// Anything that can hand out feed pages by URI
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and decode the page at `uri`
    async fn fetch_page(&self, uri: &str) -> Result<Page>;
}

#[async_trait]
impl<T: PageSource + ?Sized> PageSource for Arc<T> {
    async fn fetch_page(&self, uri: &str) -> Result<Page> {
        (**self).fetch_page(uri).await
    }
}

/// State of a walk
///
/// A walk starts `Pending` on the start URI and moves forward one page per
/// step until it reaches `Done`.
#[derive(Debug)]
pub enum WalkState {
    /// Next page to fetch
    Pending {
        /// URI of that page
        uri: String,
    },
    /// Terminal
    Done(WalkOutcome),
}

impl WalkState {
    /// Start a walk at `uri`
    pub fn start(uri: impl Into<String>) -> Self {
        Self::Pending { uri: uri.into() }
    }

    /// Check if the walk has reached a terminal state
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// How a walk ended
#[derive(Debug)]
pub enum WalkOutcome {
    /// The target was on a page
    Found {
        /// The matching connection
        connection: Connection,
        /// `@id` of the page it was on
        page_id: String,
    },
    /// The feed ran out without a match
    Exhausted {
        /// `@id` of the last page read
        last_page_id: String,
    },
    /// A fetch, decode or limit error stopped the walk
    Failed(Error),
}

impl WalkOutcome {
    /// Check if this is an exhausted result
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// Check if this is a failed result
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// A finished walk
#[derive(Debug)]
pub struct WalkReport {
    /// Terminal outcome
    pub outcome: WalkOutcome,
    /// `@id` of every page fetched, in traversal order
    pub visited: Vec<String>,
}

impl WalkReport {
    /// Number of pages fetched
    pub fn pages_fetched(&self) -> usize {
        self.visited.len()
    }

    /// Turn the report into the found connection and its page id
    ///
    /// An exhausted walk becomes [`Error::ConnectionNotFound`].
    pub fn into_result(self, target_id: &str) -> Result<(Connection, String)> {
        match self.outcome {
            WalkOutcome::Found {
                connection,
                page_id,
            } => Ok((connection, page_id)),
            WalkOutcome::Exhausted { .. } => Err(Error::not_found(target_id, self.visited.len())),
            WalkOutcome::Failed(error) => Err(error),
        }
    }
}
