//! `cinerec filmography` command - cross-reference a person's filmography
//!
//! Titles from the provider feed are loosely formatted; each one is resolved
//! against the catalog so the caller knows which entries it can recommend
//! from.

use cinerec_core::catalog::store::CatalogStore;
use cinerec_core::error::Result;
use cinerec_core::format::OutputFormat;
use cinerec_core::resolve::resolve_title;

use crate::cli::Cli;
use crate::commands;

pub fn execute(cli: &Cli, person_id: i64) -> Result<()> {
    let store = CatalogStore::new(&cli.data_dir);
    let catalog = store.load_catalog()?;

    let provider = commands::provider();
    let (profile_url, biography) = provider.fetch_person(person_id);
    let entries = provider.fetch_filmography(person_id);

    match cli.format {
        OutputFormat::Json => {
            let movies: Vec<_> = entries
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "title": entry.title,
                        "poster_url": entry.poster_url,
                        "catalog_title": resolve_title(&entry.title, &catalog),
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({
                    "person_id": person_id,
                    "profile_url": profile_url,
                    "biography": biography,
                    "movies": movies,
                })
            );
        }
        OutputFormat::Human => {
            if !biography.is_empty() {
                println!("{}\n", biography);
            }
            if entries.is_empty() {
                if !cli.quiet {
                    eprintln!("no filmography for person {}", person_id);
                }
                return Ok(());
            }
            for entry in &entries {
                match resolve_title(&entry.title, &catalog) {
                    Some(canonical) => println!("{} -> {}", entry.title, canonical),
                    None => println!("{} (not in catalog)", entry.title),
                }
            }
        }
    }

    Ok(())
}
