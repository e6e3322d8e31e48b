//! CLI commands and argument parsing

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Find a connection in a Linked Connections feed by following hydra:next
#[derive(Parser, Debug)]
#[command(name = "lc-page-finder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Connections collection URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Departure time of the first page (RFC 3339)
    #[arg(long, global = true)]
    pub departure_time: Option<DateTime<Utc>>,

    /// Give up after this many pages
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `find`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Walk the feed until a connection is found
    Find {
        /// Connection @id to look for
        #[arg(long)]
        target: Option<String>,
    },

    /// Print the @id of each page along the hydra:next chain
    Pages {
        /// Number of pages to fetch
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Pretty,
    /// JSON output (one message per line)
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["lc-page-finder"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_find_with_overrides() {
        let cli = Cli::try_parse_from([
            "lc-page-finder",
            "find",
            "--target",
            "http://irail.be/connections/IC538/20190316/8821006",
            "--departure-time",
            "2019-03-16T08:00:00Z",
            "--max-pages",
            "50",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Find {
                target: Some("http://irail.be/connections/IC538/20190316/8821006".to_string())
            })
        );
        assert_eq!(
            cli.departure_time.unwrap().to_rfc3339(),
            "2019-03-16T08:00:00+00:00"
        );
        assert_eq!(cli.max_pages, Some(50));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_pages_default_limit() {
        let cli = Cli::try_parse_from(["lc-page-finder", "pages"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Pages { limit: 10 }));
    }

    #[test]
    fn test_rejects_bad_departure_time() {
        let result = Cli::try_parse_from(["lc-page-finder", "--departure-time", "noon"]);
        assert!(result.is_err());
    }
}
