//! Column-oriented persistence for the catalog
//!
//! One artifact per logical table: raw movie records, secondary metadata,
//! and the derived tag corpus. Reloading the tables skips re-deriving the
//! corpus when nothing changed.

use std::path::{Path, PathBuf};

use super::{Catalog, MovieDetails, MovieRecord};
use crate::artifact;
use crate::corpus::TagCorpus;
use crate::error::Result;

pub const MOVIES_TABLE: &str = "movies.json";
pub const DETAILS_TABLE: &str = "movie_details.json";
pub const CORPUS_TABLE: &str = "tag_corpus.json";

/// Disk-backed catalog tables rooted at a data directory
#[derive(Debug)]
pub struct CatalogStore {
    dir: PathBuf,
}

impl CatalogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CatalogStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist catalog tables and the derived corpus
    pub fn save(&self, catalog: &Catalog, corpus: &TagCorpus) -> Result<()> {
        let (records, details) = catalog.tables();
        artifact::write_json_atomic(&self.dir.join(MOVIES_TABLE), &records)?;
        artifact::write_json_atomic(&self.dir.join(DETAILS_TABLE), &details)?;
        artifact::write_json_atomic(&self.dir.join(CORPUS_TABLE), corpus)?;
        tracing::debug!(dir = %self.dir.display(), rows = catalog.len(), "saved catalog tables");
        Ok(())
    }

    /// Reload the catalog; missing tables are fatal
    pub fn load_catalog(&self) -> Result<Catalog> {
        let records: Vec<MovieRecord> =
            artifact::read_json_required(&self.dir.join(MOVIES_TABLE))?;
        let details: Vec<MovieDetails> =
            artifact::read_json_required(&self.dir.join(DETAILS_TABLE))?;
        Ok(Catalog::new(records, details))
    }

    /// Reload the derived tag corpus; missing table is fatal
    pub fn load_corpus(&self) -> Result<TagCorpus> {
        artifact::read_json_required(&self.dir.join(CORPUS_TABLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_record;
    use crate::corpus;

    #[test]
    fn test_catalog_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());

        let records = vec![
            test_record(1, "First", "a space adventure"),
            test_record(2, "Second", "a quiet dinner"),
        ];
        let details = vec![MovieDetails::default(), MovieDetails::default()];
        let catalog = Catalog::new(records, details);
        let tag_corpus = corpus::build_corpus(&catalog);

        store.save(&catalog, &tag_corpus).unwrap();

        let reloaded = store.load_catalog().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.records(), catalog.records());

        let reloaded_corpus = store.load_corpus().unwrap();
        assert_eq!(reloaded_corpus, tag_corpus);
    }

    #[test]
    fn test_missing_tables_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        assert!(store.load_catalog().is_err());
        assert!(store.load_corpus().is_err());
    }
}
