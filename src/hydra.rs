//! Hydra page model
//!
//! A Linked Connections feed is served as JSON-LD pages. Each page carries its
//! own `@id`, the connections it contains under `@graph`, and `hydra:next` /
//! `hydra:previous` links to its neighbours. Only those fields are read; the
//! rest of the document (`@context`, `hydra:search`, ...) is ignored.

use crate::types::{JsonObject, OptionStringExt};
use serde::{Deserialize, Serialize};

/// One transit connection
///
/// Only `@id` is interpreted. Every other field is kept verbatim so the
/// record can be written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Connection URI
    #[serde(rename = "@id")]
    pub id: String,

    /// Remaining fields, untouched
    #[serde(flatten)]
    pub fields: JsonObject,
}

impl Connection {
    /// Create a connection with no extra fields
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: JsonObject::new(),
        }
    }

    /// Add a passthrough field
    #[must_use]
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// One fetched page of the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page URI
    #[serde(rename = "@id")]
    pub id: String,

    /// Connections on this page, in feed order
    #[serde(rename = "@graph")]
    pub items: Vec<Connection>,

    /// Link to the following page
    #[serde(
        rename = "hydra:next",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next: Option<String>,

    /// Link to the preceding page (parsed, never followed)
    #[serde(
        rename = "hydra:previous",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub previous: Option<String>,
}

impl Page {
    /// Create an empty page
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
            next: None,
            previous: None,
        }
    }

    /// Set the connections on this page
    #[must_use]
    pub fn with_items(mut self, items: Vec<Connection>) -> Self {
        self.items = items;
        self
    }

    /// Set the next page link
    #[must_use]
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    /// Next page URI, if the feed continues
    ///
    /// A blank link counts as the end of the feed.
    pub fn next_page_uri(&self) -> Option<&str> {
        self.next
            .as_deref()
            .map(str::trim)
            .filter(|next| !next.is_empty())
    }

    /// Take the next page URI out of the page
    pub fn take_next(&mut self) -> Option<String> {
        self.next
            .take()
            .none_if_empty()
            .map(|next| next.trim().to_string())
    }

    /// Find a connection by URI
    pub fn find(&self, connection_id: &str) -> Option<&Connection> {
        self.items.iter().find(|c| c.id == connection_id)
    }

    /// Consume the page, keeping only the matching connection
    pub fn into_connection(self, connection_id: &str) -> Option<Connection> {
        self.items.into_iter().find(|c| c.id == connection_id)
    }
}
