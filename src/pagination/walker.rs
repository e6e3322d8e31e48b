//! Page walker
//!
//! Follows `hydra:next` from a start page, one page at a time, scanning each
//! page's `@graph` for a target connection.

use super::types::{PageSource, WalkOutcome, WalkReport, WalkState};
use crate::error::{Error, Result};
use crate::hydra::{Connection, Page};
use futures::stream::{self, Stream};
use tracing::{debug, info, warn};
use url::Url;

/// Called with every page as soon as it is fetched
pub type PageCallback = Box<dyn Fn(&Page) + Send + Sync>;

/// Sequential walker over a Hydra-paginated feed
///
/// Each page's continuation is only known once it has been fetched, so pages
/// are requested strictly one after another.
pub struct PageWalker<S> {
    source: S,
    max_pages: Option<u32>,
    on_page: Option<PageCallback>,
}

impl<S: PageSource> PageWalker<S> {
    /// Create a walker over `source` with no page limit
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_pages: None,
            on_page: None,
        }
    }

    /// Stop with [`Error::PageLimitReached`] instead of fetching more than
    /// `max_pages` pages
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Set the per-page callback
    #[must_use]
    pub fn on_page<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Page) + Send + Sync + 'static,
    {
        self.on_page = Some(Box::new(callback));
        self
    }

    /// Get the page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Search for `target_id`, returning the connection and its page `@id`
    ///
    /// Running out of pages is reported as [`Error::ConnectionNotFound`].
    pub async fn find_connection(
        &self,
        start_uri: &str,
        target_id: &str,
    ) -> Result<(Connection, String)> {
        self.walk(start_uri, target_id)
            .await
            .into_result(target_id)
    }

    /// Walk from `start_uri` until the target is found, the feed ends, or an
    /// error occurs
    pub async fn walk(&self, start_uri: &str, target_id: &str) -> WalkReport {
        let mut visited = Vec::new();
        let mut state = WalkState::start(start_uri);

        loop {
            state = match state {
                WalkState::Pending { uri } => self.step(uri, target_id, &mut visited).await,
                WalkState::Done(outcome) => {
                    match &outcome {
                        WalkOutcome::Found { page_id, .. } => {
                            info!(page = %page_id, pages = visited.len(), "Found connection");
                        }
                        WalkOutcome::Exhausted { last_page_id } => {
                            info!(
                                last_page = %last_page_id,
                                pages = visited.len(),
                                "Reached the last page without a match"
                            );
                        }
                        WalkOutcome::Failed(e) => {
                            warn!(error = %e, pages = visited.len(), "Walk failed");
                        }
                    }
                    return WalkReport { outcome, visited };
                }
            };
        }
    }

    /// Fetch one page and decide where the walk goes next
    async fn step(&self, uri: String, target_id: &str, visited: &mut Vec<String>) -> WalkState {
        if let Some(max_pages) = self.max_pages {
            if visited.len() >= max_pages as usize {
                return WalkState::Done(WalkOutcome::Failed(Error::PageLimitReached { max_pages }));
            }
        }

        let mut page = match self.source.fetch_page(&uri).await {
            Ok(page) => page,
            Err(e) => return WalkState::Done(WalkOutcome::Failed(e)),
        };

        debug!(page = %page.id, items = page.items.len(), "Fetched page");
        if let Some(callback) = &self.on_page {
            callback(&page);
        }
        visited.push(page.id.clone());

        let next = page.take_next();
        let page_id = std::mem::take(&mut page.id);

        if let Some(connection) = page.into_connection(target_id) {
            return WalkState::Done(WalkOutcome::Found {
                connection,
                page_id,
            });
        }

        match next {
            Some(next) => match resolve_next(&page_id, &uri, &next) {
                Ok(uri) => WalkState::Pending { uri },
                Err(e) => WalkState::Done(WalkOutcome::Failed(e)),
            },
            None => WalkState::Done(WalkOutcome::Exhausted {
                last_page_id: page_id,
            }),
        }
    }

    /// Stream every page along the `hydra:next` chain
    ///
    /// The stream ends after the last page, or right after yielding the first
    /// error. A page whose `hydra:next` cannot be resolved is still yielded,
    /// followed by the resolution error. The page limit and callback do not
    /// apply here.
    pub fn pages(&self, start_uri: &str) -> impl Stream<Item = Result<Page>> + '_ {
        stream::unfold(Some(Ok(start_uri.to_string())), move |next| async move {
            let uri = match next? {
                Ok(uri) => uri,
                Err(e) => return Some((Err(e), None)),
            };

            let page = match self.source.fetch_page(&uri).await {
                Ok(page) => page,
                Err(e) => return Some((Err(e), None)),
            };
            debug!(page = %page.id, items = page.items.len(), "Fetched page");

            let next = page
                .next_page_uri()
                .map(|next| resolve_next(&page.id, &uri, next));
            Some((Ok(page), next))
        })
    }
}

impl<S> std::fmt::Debug for PageWalker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageWalker")
            .field("max_pages", &self.max_pages)
            .field("has_callback", &self.on_page.is_some())
            .finish_non_exhaustive()
    }
}

/// Resolve a `hydra:next` link
///
/// Absolute links are returned verbatim. Relative links are joined onto the
/// page `@id`, or onto the URI the page was fetched from when the `@id` is
/// not itself absolute. With no absolute base at all the link is used as is.
pub fn resolve_next(page_id: &str, fetched_uri: &str, next: &str) -> Result<String> {
    match Url::parse(next) {
        Ok(_) => Ok(next.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            match Url::parse(page_id).or_else(|_| Url::parse(fetched_uri)) {
                Ok(base) => Ok(base.join(next)?.to_string()),
                Err(_) => Ok(next.to_string()),
            }
        }
        Err(e) => Err(e.into()),
    }
}
