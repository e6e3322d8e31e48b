//! Finder configuration
//!
//! Where a search starts, what it looks for, and how far it may go. The
//! defaults reproduce the stock search against the SNCB feed; a YAML or JSON
//! file can replace any of them.
//!
//! ```yaml
//! base_url: https://lc.dylanvanassche.be/sncb/connections
//! departure_time: 2019-03-15T14:00:00.000Z
//! target: http://irail.be/connections/IC2336/20190316/8892205
//! max_pages: 500
//! timeout_secs: 30
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default Linked Connections collection
pub const DEFAULT_BASE_URL: &str = "https://lc.dylanvanassche.be/sncb/connections";

/// Default connection to look for
pub const DEFAULT_TARGET: &str = "http://irail.be/connections/IC2336/20190316/8892205";

/// 2019-03-15T14:00:00Z
const DEFAULT_DEPARTURE_TIMESTAMP: i64 = 1_552_658_400;

/// Query parameter that anchors a page request in time
pub const DEPARTURE_TIME_PARAM: &str = "departureTime";

/// Configuration for one search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Connections collection URL, without the departure time query
    pub base_url: String,

    /// Departure time of the first page to fetch
    pub departure_time: DateTime<Utc>,

    /// `@id` of the connection to find
    pub target: String,

    /// Give up after this many pages (unbounded when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            departure_time: DateTime::from_timestamp(DEFAULT_DEPARTURE_TIMESTAMP, 0)
                .unwrap_or_default(),
            target: DEFAULT_TARGET.to_string(),
            max_pages: None,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl FinderConfig {
    /// Load a config file (YAML, or JSON which is valid YAML)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config file '{}'", path.display())
                });
            }
        };
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a config document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values a search cannot run with
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_value("base_url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.target.trim().is_empty() {
            return Err(Error::invalid_value("target", "cannot be empty"));
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be at least 1"));
        }

        if self.max_pages == Some(0) {
            return Err(Error::invalid_value("max_pages", "must be at least 1"));
        }

        Ok(())
    }

    /// URI of the first page
    ///
    /// The departure time is written as ISO 8601 with millisecond precision
    /// and a `Z` suffix, e.g. `?departureTime=2019-03-15T14:00:00.000Z`.
    pub fn start_uri(&self) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}={}",
            self.base_url,
            separator,
            DEPARTURE_TIME_PARAM,
            self.departure_time
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// HTTP client settings for this search
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().timeout(self.timeout());
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}
