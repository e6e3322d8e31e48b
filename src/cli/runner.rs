//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::FinderConfig;
use crate::error::{Result, ResultExt};
use crate::http::HttpClient;
use crate::hydra::{Connection, Page};
use crate::pagination::PageWalker;
use futures::StreamExt;
use serde_json::{json, Value};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.finder_config()?;
        match &self.cli.command {
            None | Some(Commands::Find { .. }) => self.find(&config).await,
            Some(Commands::Pages { limit }) => self.pages(&config, *limit).await,
        }
    }

    /// Build the search config: file (or defaults), then command line overrides
    pub fn finder_config(&self) -> Result<FinderConfig> {
        let mut config = match &self.cli.config {
            Some(path) => FinderConfig::from_file(path)?,
            None => FinderConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(departure_time) = self.cli.departure_time {
            config.departure_time = departure_time;
        }
        if let Some(max_pages) = self.cli.max_pages {
            config.max_pages = Some(max_pages);
        }
        if let Some(timeout) = self.cli.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(Commands::Find {
            target: Some(target),
        }) = &self.cli.command
        {
            config.target.clone_from(target);
        }

        config.validate()?;
        Ok(config)
    }

    /// Walk the feed until the target connection turns up
    async fn find(&self, config: &FinderConfig) -> Result<()> {
        let client = HttpClient::with_config(config.http_config())?;
        let format = self.cli.format;

        let mut walker = PageWalker::new(client).on_page(move |page| output_page(format, page));
        if let Some(max_pages) = config.max_pages {
            walker = walker.with_max_pages(max_pages);
        }

        let start_uri = config.start_uri();
        info!(start = %start_uri, target = %config.target, "Searching for connection");

        let (connection, page_id) = walker.find_connection(&start_uri, &config.target).await?;
        self.output_found(&connection, &page_id)
    }

    /// Print page ids along the chain without searching
    async fn pages(&self, config: &FinderConfig, limit: usize) -> Result<()> {
        let client = HttpClient::with_config(config.http_config())?;
        let walker = PageWalker::new(client);

        let limit = config
            .max_pages
            .map_or(limit, |max_pages| limit.min(max_pages as usize));

        let start_uri = config.start_uri();
        info!(start = %start_uri, limit, "Listing pages");

        let mut pages = Box::pin(walker.pages(&start_uri).take(limit));
        while let Some(page) = pages.next().await {
            output_page(self.cli.format, &page?);
        }

        Ok(())
    }

    fn output_found(&self, connection: &Connection, page_id: &str) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                let connection =
                    serde_json::to_value(connection).context("Failed to serialize connection")?;
                output_message(&json!({
                    "type": "FOUND",
                    "page": page_id,
                    "connection": connection
                }));
            }
            OutputFormat::Pretty => {
                let connection = serde_json::to_string_pretty(connection)
                    .context("Failed to serialize connection")?;
                println!("Found connection");
                println!("{connection}");
                println!("{page_id}");
            }
        }
        Ok(())
    }
}

/// Print one fetched page
fn output_page(format: OutputFormat, page: &Page) {
    match format {
        OutputFormat::Json => output_message(&json!({
            "type": "PAGE",
            "id": page.id,
            "connections": page.items.len()
        })),
        OutputFormat::Pretty => println!("{}", page.id),
    }
}

/// Print one JSON message per line
fn output_message(msg: &Value) {
    println!("{}", serde_json::to_string(msg).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BASE_URL, DEFAULT_TARGET};
    use crate::error::Error;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["lc-page-finder"];
        argv.extend_from_slice(args);
        Runner::new(Cli::parse_from(argv))
    }

    #[test]
    fn test_defaults_without_arguments() {
        let config = runner(&[]).finder_config().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.target, DEFAULT_TARGET);
        assert_eq!(
            config.start_uri(),
            "https://lc.dylanvanassche.be/sncb/connections?departureTime=2019-03-15T14:00:00.000Z"
        );
    }

    #[test]
    fn test_command_line_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://localhost:3000/nmbs/connections").unwrap();
        writeln!(file, "target: http://irail.be/connections/from-file").unwrap();
        writeln!(file, "max_pages: 5").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = runner(&[
            "-C",
            &path,
            "--max-pages",
            "9",
            "find",
            "--target",
            "http://irail.be/connections/from-cli",
        ])
        .finder_config()
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:3000/nmbs/connections");
        assert_eq!(config.target, "http://irail.be/connections/from-cli");
        assert_eq!(config.max_pages, Some(9));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let err = runner(&["--timeout", "0"]).finder_config().unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }
}
