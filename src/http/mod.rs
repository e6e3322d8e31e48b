//! HTTP client module
//!
//! Fetches feed pages over HTTP and implements [`PageSource`] for the walker.
//!
//! [`PageSource`]: crate::pagination::PageSource

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, JSON_LD_ACCEPT};
