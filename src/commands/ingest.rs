//! `cinerec ingest` command - build catalog tables from the raw CSV exports

use std::path::Path;

use cinerec_core::catalog::ingest;
use cinerec_core::catalog::store::CatalogStore;
use cinerec_core::corpus;
use cinerec_core::error::Result;
use cinerec_core::format::OutputFormat;

use crate::cli::Cli;

pub fn execute(cli: &Cli, source: &Path) -> Result<()> {
    let catalog = ingest::ingest(source)?;
    let tag_corpus = corpus::build_corpus(&catalog);

    let store = CatalogStore::new(&cli.data_dir);
    store.save(&catalog, &tag_corpus)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "movies": catalog.len(),
                    "data_dir": cli.data_dir,
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "ingested {} movies into {}",
                    catalog.len(),
                    cli.data_dir.display()
                );
            }
        }
    }

    Ok(())
}
