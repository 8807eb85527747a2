//! Command dispatch logic for cinerec

use cinerec_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Ingest { source } => commands::ingest::execute(cli, source),
        Commands::Build { rebuild } => commands::build::execute(cli, *rebuild),
        Commands::Recommend { title, limit } => commands::recommend::execute(cli, title, *limit),
        Commands::Resolve { title } => commands::resolve::execute(cli, title),
        Commands::Show { title } => commands::show::execute(cli, title),
        Commands::Filmography { person_id } => commands::filmography::execute(cli, *person_id),
    }
}
