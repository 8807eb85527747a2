//! `cinerec build` command - build or refresh cached similarity matrices

use cinerec_core::catalog::store::CatalogStore;
use cinerec_core::corpus::Feature;
use cinerec_core::error::Result;
use cinerec_core::format::OutputFormat;
use cinerec_core::similarity::SimilarityEngine;

use crate::cli::Cli;

pub fn execute(cli: &Cli, rebuild: bool) -> Result<()> {
    let store = CatalogStore::new(&cli.data_dir);
    let corpus = store.load_corpus()?;
    let engine = SimilarityEngine::new(&cli.data_dir);

    let mut statuses = Vec::new();
    for feature in Feature::ALL {
        let matrix = if rebuild {
            engine.build(feature, &corpus)?
        } else {
            engine.build_or_load(feature, &corpus)?
        };
        statuses.push((feature, matrix.map(|m| m.len())));
    }

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = statuses
                .iter()
                .map(|(feature, rows)| {
                    serde_json::json!({
                        "feature": feature.as_str(),
                        "available": rows.is_some(),
                        "rows": rows,
                    })
                })
                .collect();
            println!("{}", serde_json::json!(output));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                for (feature, rows) in &statuses {
                    match rows {
                        Some(rows) => println!("{}: {} x {} matrix", feature, rows, rows),
                        None => println!("{}: unavailable (empty vocabulary)", feature),
                    }
                }
            }
        }
    }

    Ok(())
}
