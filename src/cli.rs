//! CLI argument parsing for cinerec
//!
//! Global flags: --data-dir, --format, --quiet, --verbose, --log-level,
//! --log-json

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use cinerec_core::error::CinerecError;
use cinerec_core::format::OutputFormat;
use cinerec_core::recommend::DEFAULT_LIMIT;

/// Cinerec - content-based movie recommendation CLI
#[derive(Parser, Debug)]
#[command(name = "cinerec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding catalog tables and similarity caches
    #[arg(long, global = true, env = "CINEREC_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging (cinerec=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest the raw TMDB CSV exports into catalog tables
    Ingest {
        /// Directory holding tmdb_5000_movies.csv and tmdb_5000_credits.csv
        #[arg(long, default_value = "Files")]
        source: PathBuf,
    },

    /// Build or refresh the cached similarity matrices
    Build {
        /// Drop cached matrices and regenerate from the current corpus
        #[arg(long)]
        rebuild: bool,
    },

    /// Recommend movies similar to a seed title
    Recommend {
        /// Seed movie title (exact catalog title)
        title: String,

        /// Number of recommendations to return
        #[arg(long, short = 'k', default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Resolve an externally formatted title against the catalog
    Resolve {
        /// Title as reported by an external feed, e.g. "Up (2009)"
        title: String,
    },

    /// Show catalog details for a title
    Show {
        /// Exact catalog title
        title: String,
    },

    /// List a person's filmography and match it against the catalog
    Filmography {
        /// Person identifier in the metadata provider
        person_id: i64,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, CinerecError> {
    OutputFormat::from_str(s)
}
