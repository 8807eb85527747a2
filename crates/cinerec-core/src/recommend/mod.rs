//! Top-K recommendation queries against the tags similarity matrix

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::provider::MetadataProvider;
use crate::similarity::SimilarityMatrix;

/// Default number of recommendations returned
pub const DEFAULT_LIMIT: usize = 25;

/// One ranked recommendation with its display poster
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub score: f64,
    pub poster_url: String,
}

/// Ranks catalog rows by tags-matrix similarity to a seed title.
///
/// Holds only borrows; the caller owns the catalog and matrix lifetimes.
pub struct RecommendationService<'a> {
    catalog: &'a Catalog,
    tags_matrix: Option<&'a SimilarityMatrix>,
}

impl<'a> RecommendationService<'a> {
    pub fn new(catalog: &'a Catalog, tags_matrix: Option<&'a SimilarityMatrix>) -> Self {
        RecommendationService {
            catalog,
            tags_matrix,
        }
    }

    /// Top `limit` movies most similar to `seed_title`, excluding the seed
    /// itself. An unknown seed or an unavailable tags matrix yields an empty
    /// result, never an error. Output length is `min(limit, N-1)` for a
    /// valid seed.
    #[tracing::instrument(skip(self, provider))]
    pub fn recommend(
        &self,
        provider: &dyn MetadataProvider,
        seed_title: &str,
        limit: usize,
    ) -> Vec<Recommendation> {
        let Some(seed_row) = self.catalog.index_of_title(seed_title) else {
            tracing::warn!(title = seed_title, "unknown title, returning no recommendations");
            return Vec::new();
        };
        let Some(matrix) = self.tags_matrix else {
            tracing::warn!("tags similarity matrix unavailable, returning no recommendations");
            return Vec::new();
        };
        // A matrix built from a differently-sized catalog cannot be indexed
        // by catalog row; treat it as unavailable
        if matrix.len() != self.catalog.len() {
            tracing::warn!(
                matrix_rows = matrix.len(),
                catalog_rows = self.catalog.len(),
                "tags similarity matrix does not match catalog size, returning no recommendations"
            );
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = matrix
            .row(seed_row)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(row, _)| row != seed_row)
            .collect();
        // Descending by score; ties broken by ascending catalog row for a
        // stable, deterministic order
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(limit);

        scored
            .into_iter()
            .map(|(row, score)| {
                let record = &self.catalog.records()[row];
                Recommendation {
                    title: record.title.clone(),
                    score,
                    poster_url: provider.fetch_poster(record.id),
                }
            })
            .collect()
    }
}
