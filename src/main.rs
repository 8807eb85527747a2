//! Cinerec - content-based movie recommendation CLI
//!
//! Recommends movies similar to a seed title by comparing textual metadata
//! (plot, genres, cast, crew, keywords) via cached cosine-similarity
//! matrices over a bag-of-words tag corpus.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cinerec_core::error::ExitCode as CinerecExitCode;
use cinerec_core::format::OutputFormat;
use cinerec_core::logging;

use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli) {
        Ok(()) => ExitCode::from(CinerecExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}
