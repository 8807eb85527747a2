//! `cinerec resolve` command - match an external title to the catalog

use cinerec_core::catalog::store::CatalogStore;
use cinerec_core::error::Result;
use cinerec_core::format::OutputFormat;
use cinerec_core::resolve::resolve_title;

use crate::cli::Cli;

pub fn execute(cli: &Cli, title: &str) -> Result<()> {
    let store = CatalogStore::new(&cli.data_dir);
    let catalog = store.load_catalog()?;

    let resolved = resolve_title(title, &catalog);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "title": title,
                    "resolved": resolved,
                })
            );
        }
        OutputFormat::Human => match resolved {
            Some(canonical) => println!("{}", canonical),
            None => {
                if !cli.quiet {
                    eprintln!("no catalog match for '{}'", title);
                }
            }
        },
    }

    Ok(())
}
