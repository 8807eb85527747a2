//! Disk cache for similarity matrices, one artifact per feature

use std::path::{Path, PathBuf};

use super::SimilarityMatrix;
use crate::artifact;
use crate::corpus::Feature;
use crate::error::Result;

/// Cache artifact path for a feature, keyed by feature name
pub(crate) fn matrix_path(dir: &Path, feature: Feature) -> PathBuf {
    dir.join(format!("similarity_{}.json", feature))
}

/// Load a cached matrix. Absent or unreadable artifacts both yield `None`;
/// a corrupt artifact is logged and recovered by rebuilding, never surfaced.
pub(crate) fn load(path: &Path, feature: Feature) -> Option<SimilarityMatrix> {
    match artifact::read_json::<SimilarityMatrix>(path) {
        Ok(Some(matrix)) => {
            tracing::debug!(%feature, rows = matrix.len(), "loaded similarity matrix from cache");
            Some(matrix)
        }
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(%feature, error = %err, "similarity cache corrupt, rebuilding");
            None
        }
    }
}

/// Persist a matrix, atomically replacing any stale artifact
pub(crate) fn store(path: &Path, matrix: &SimilarityMatrix) -> Result<()> {
    artifact::write_json_atomic(path, matrix)
}
