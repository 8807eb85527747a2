//! Similarity engine: per-feature cosine matrices with a disk cache
//!
//! Matrices are built in batch, persisted once per feature, and treated as
//! immutable afterward. Construction and storage are O(rows^2); this is the
//! dominant scaling constraint of the whole system, acceptable for catalogs
//! in the thousands of rows. Once loaded, a matrix is read-only and can be
//! shared across any number of concurrent queries.

mod cache;
mod vectorize;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::corpus::{Feature, TagCorpus};
use crate::error::Result;

pub use vectorize::MAX_FEATURES;

/// Square, symmetric cosine-similarity matrix for one feature.
///
/// Entry (i, j) is the cosine similarity of catalog rows i and j. The
/// diagonal is 1.0 except for rows whose count vector has zero norm, which
/// score 0.0 against everything including themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Number of catalog rows covered
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Similarity scores of row `i` against every catalog row
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

/// Builds, caches and reloads similarity matrices keyed by feature name
#[derive(Debug)]
pub struct SimilarityEngine {
    cache_dir: PathBuf,
}

impl SimilarityEngine {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        SimilarityEngine {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Load the cached matrix for `feature`, or build it from the corpus and
    /// persist it. A cached matrix whose row count no longer matches the
    /// corpus is stale (the catalog was re-ingested since it was built) and
    /// gets rebuilt like a corrupt one. `Ok(None)` means the feature is
    /// unavailable (empty corpus or empty vocabulary) and dependent queries
    /// must degrade to empty results.
    #[tracing::instrument(skip(self, corpus), fields(%feature, rows = corpus.len()))]
    pub fn build_or_load(
        &self,
        feature: Feature,
        corpus: &TagCorpus,
    ) -> Result<Option<SimilarityMatrix>> {
        let path = cache::matrix_path(&self.cache_dir, feature);
        if let Some(matrix) = cache::load(&path, feature) {
            if matrix.len() == corpus.len() {
                return Ok(Some(matrix));
            }
            tracing::warn!(
                %feature,
                cached_rows = matrix.len(),
                corpus_rows = corpus.len(),
                "cached similarity matrix does not match catalog size, rebuilding"
            );
        }
        self.build(feature, corpus)
    }

    /// Build the matrix from the current corpus, overwriting any cached
    /// artifact. Rebuilding from an unchanged corpus produces identical
    /// bytes.
    pub fn build(&self, feature: Feature, corpus: &TagCorpus) -> Result<Option<SimilarityMatrix>> {
        let documents = corpus.column(feature);
        let Some(counts) = vectorize::count_matrix(documents) else {
            // Logged once per build; the caller treats the feature as absent
            tracing::warn!(%feature, "no usable vocabulary, feature unavailable");
            return Ok(None);
        };

        let matrix = vectorize::cosine_matrix(&counts);
        cache::store(&cache::matrix_path(&self.cache_dir, feature), &matrix)?;
        tracing::info!(%feature, rows = matrix.len(), "built similarity matrix");
        Ok(Some(matrix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn corpus(tags: &[&str]) -> TagCorpus {
        TagCorpus {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SimilarityEngine::new(dir.path());
        let corpus = corpus(&["space adventure war", "space battle war"]);

        let built = engine.build(Feature::Tags, &corpus).unwrap().unwrap();
        let loaded = engine.build_or_load(Feature::Tags, &corpus).unwrap().unwrap();

        assert_eq!(built, loaded);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SimilarityEngine::new(dir.path());
        let corpus = corpus(&["space adventure war", "space battle war", "quiet dinner"]);
        let path = cache::matrix_path(dir.path(), Feature::Tags);

        engine.build(Feature::Tags, &corpus).unwrap().unwrap();
        let first = fs::read(&path).unwrap();
        engine.build(Feature::Tags, &corpus).unwrap().unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_cache_rebuilt() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SimilarityEngine::new(dir.path());
        let corpus = corpus(&["space adventure", "space battle"]);
        let path = cache::matrix_path(dir.path(), Feature::Tags);

        let built = engine.build(Feature::Tags, &corpus).unwrap().unwrap();
        fs::write(&path, "not json at all").unwrap();

        let recovered = engine.build_or_load(Feature::Tags, &corpus).unwrap().unwrap();
        assert_eq!(recovered, built);

        // Overwritten with a valid artifact
        let reloaded = engine.build_or_load(Feature::Tags, &corpus).unwrap().unwrap();
        assert_eq!(reloaded, built);
    }

    #[test]
    fn test_stale_cache_size_mismatch_rebuilt() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SimilarityEngine::new(dir.path());

        engine
            .build(Feature::Tags, &corpus(&["space adventure", "space battle"]))
            .unwrap()
            .unwrap();

        // The catalog grew since the matrix was cached
        let grown = corpus(&["space adventure", "space battle", "quiet dinner"]);
        let matrix = engine.build_or_load(Feature::Tags, &grown).unwrap().unwrap();
        assert_eq!(matrix.len(), 3);

        // And shrank again
        let shrunk = corpus(&["space adventure"]);
        let matrix = engine.build_or_load(Feature::Tags, &shrunk).unwrap().unwrap();
        assert_eq!(matrix.len(), 1);
    }

    #[test]
    fn test_empty_feature_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SimilarityEngine::new(dir.path());
        let corpus = corpus(&["space adventure", "space battle"]);

        // The genres column is empty in this corpus
        assert!(engine
            .build_or_load(Feature::Genres, &corpus)
            .unwrap()
            .is_none());
        assert!(!cache::matrix_path(dir.path(), Feature::Genres).exists());
    }

    #[test]
    fn test_matrix_properties_hold_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let engine = SimilarityEngine::new(dir.path());
        let corpus = corpus(&["space adventure war", "space battle war", ""]);

        engine.build(Feature::Tags, &corpus).unwrap().unwrap();
        let matrix = engine.build_or_load(Feature::Tags, &corpus).unwrap().unwrap();

        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert!((matrix.get(0, 0) - 1.0).abs() < 1e-12);
        // Zero-norm row
        assert_eq!(matrix.get(2, 2), 0.0);
    }
}
