//! Error types for lc-page-finder
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every error is fatal to a walk: nothing in the crate retries.

use thiserror::Error;

/// The main error type for lc-page-finder
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Walk Errors
    // ============================================================================
    #[error("Malformed page at '{uri}': {message}")]
    MalformedPage { uri: String, message: String },

    #[error("Connection '{target}' not found after {pages} page(s)")]
    ConnectionNotFound { target: String, pages: usize },

    #[error("Page limit of {max_pages} reached before the walk finished")]
    PageLimitReached { max_pages: u32 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a malformed page error
    pub fn malformed_page(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedPage {
            uri: uri.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(target: impl Into<String>, pages: usize) -> Self {
        Self::ConnectionNotFound {
            target: target.into(),
            pages,
        }
    }

    /// True when the walk ran out of pages rather than failing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConnectionNotFound { .. })
    }
}

/// Result type alias for lc-page-finder
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::not_found("http://irail.be/connections/X", 3);
        assert_eq!(
            err.to_string(),
            "Connection 'http://irail.be/connections/X' not found after 3 page(s)"
        );

        let err = Error::PageLimitReached { max_pages: 5 };
        assert_eq!(
            err.to_string(),
            "Page limit of 5 reached before the walk finished"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("x", 1).is_not_found());
        assert!(!Error::http_status(500, "").is_not_found());
        assert!(!Error::malformed_page("p0", "eof").is_not_found());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
