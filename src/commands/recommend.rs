//! `cinerec recommend` command - ranked top-K similar titles

use cinerec_core::catalog::store::CatalogStore;
use cinerec_core::corpus::Feature;
use cinerec_core::error::Result;
use cinerec_core::format::OutputFormat;
use cinerec_core::recommend::RecommendationService;
use cinerec_core::similarity::SimilarityEngine;

use crate::cli::Cli;
use crate::commands;

pub fn execute(cli: &Cli, title: &str, limit: usize) -> Result<()> {
    let store = CatalogStore::new(&cli.data_dir);
    let catalog = store.load_catalog()?;
    let corpus = store.load_corpus()?;

    let engine = SimilarityEngine::new(&cli.data_dir);
    let tags_matrix = engine.build_or_load(Feature::Tags, &corpus)?;

    let service = RecommendationService::new(&catalog, tags_matrix.as_ref());
    let provider = commands::provider();
    let results = service.recommend(provider.as_ref(), title, limit);

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = results
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "title": r.title,
                        "score": r.score,
                        "poster_url": r.poster_url,
                    })
                })
                .collect();
            println!("{}", serde_json::json!(output));
        }
        OutputFormat::Human => {
            if results.is_empty() {
                if !cli.quiet {
                    eprintln!("no recommendations for '{}'", title);
                }
                return Ok(());
            }
            for (rank, r) in results.iter().enumerate() {
                println!("{:2}. {} ({:.3})", rank + 1, r.title, r.score);
                if cli.verbose {
                    println!("    {}", r.poster_url);
                }
            }
        }
    }

    Ok(())
}
