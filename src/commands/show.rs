//! `cinerec show` command - catalog accessor for one title

use cinerec_core::catalog::store::CatalogStore;
use cinerec_core::error::Result;
use cinerec_core::format::OutputFormat;

use crate::cli::Cli;

pub fn execute(cli: &Cli, title: &str) -> Result<()> {
    let store = CatalogStore::new(&cli.data_dir);
    let catalog = store.load_catalog()?;

    let Some(entry) = catalog.lookup(title) else {
        tracing::warn!(title, "title not found in catalog");
        if cli.format == OutputFormat::Json {
            println!("{}", serde_json::json!({ "title": title, "found": false }));
        } else if !cli.quiet {
            eprintln!("title not found: '{}'", title);
        }
        return Ok(());
    };

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "found": true,
                    "id": entry.record.id,
                    "title": entry.record.title,
                    "overview": entry.record.overview,
                    "genres": entry.record.genres,
                    "keywords": entry.record.keywords,
                    "top_cast": entry.record.top_cast,
                    "director": entry.record.director,
                    "production_companies": entry.record.production_companies,
                    "release_date": entry.record.release_date,
                    "details": {
                        "budget": entry.details.budget,
                        "revenue": entry.details.revenue,
                        "runtime": entry.details.runtime,
                        "vote_average": entry.details.vote_average,
                        "vote_count": entry.details.vote_count,
                        "popularity": entry.details.popularity,
                        "status": entry.details.status,
                        "spoken_languages": entry.details.spoken_languages,
                    },
                })
            );
        }
        OutputFormat::Human => {
            println!("{} (id {})", entry.record.title, entry.record.id);
            if let Some(date) = entry.record.release_date {
                println!("released: {}", date);
            }
            if !entry.record.genres.is_empty() {
                println!("genres: {}", entry.record.genres.join(", "));
            }
            if let Some(director) = &entry.record.director {
                println!("director: {}", director);
            }
            if !entry.record.top_cast.is_empty() {
                println!("cast: {}", entry.record.top_cast.join(", "));
            }
            println!(
                "rating: {:.1} ({} votes)",
                entry.details.vote_average, entry.details.vote_count
            );
            if !entry.record.overview.is_empty() {
                println!("\n{}", entry.record.overview);
            }
        }
    }

    Ok(())
}
