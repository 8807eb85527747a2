//! Movie catalog: typed record arena with a title lookup index
//!
//! Records are created during ingestion and never mutated afterward; the
//! only way to change the catalog is a full rebuild. Titles are intended to
//! be unique but this is not enforced - on duplicates the first occurrence
//! wins in the title index.

pub mod ingest;
pub mod store;

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable catalog entry holding the fields that feed the tag corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Top-billed cast, capped at 10 during ingestion
    #[serde(default)]
    pub top_cast: Vec<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

/// Secondary metadata table, aligned 1:1 with [`MovieRecord`] rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub runtime: Option<f64>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub spoken_languages: Vec<String>,
}

/// A catalog row together with its index and secondary metadata
#[derive(Debug, Clone, Copy)]
pub struct MovieEntry<'a> {
    pub row: usize,
    pub record: &'a MovieRecord,
    pub details: &'a MovieDetails,
}

/// The movie catalog: record arena, parallel details table, title index
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    details: Vec<MovieDetails>,
    title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from parallel record and details rows.
    ///
    /// Rows without the hard-required fields (id, title) are dropped so the
    /// corpus row-alignment invariant holds for everything downstream.
    pub fn new(records: Vec<MovieRecord>, details: Vec<MovieDetails>) -> Self {
        debug_assert_eq!(records.len(), details.len());

        let mut kept_records = Vec::with_capacity(records.len());
        let mut kept_details = Vec::with_capacity(details.len());
        for (record, detail) in records.into_iter().zip(details) {
            if record.id == 0 || record.title.is_empty() {
                tracing::debug!(id = record.id, "dropping record missing id/title");
                continue;
            }
            kept_records.push(record);
            kept_details.push(detail);
        }

        let mut title_index = HashMap::with_capacity(kept_records.len());
        for (row, record) in kept_records.iter().enumerate() {
            // First occurrence wins on duplicate titles
            title_index.entry(record.title.clone()).or_insert(row);
        }

        Catalog {
            records: kept_records,
            details: kept_details,
            title_index,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn record(&self, row: usize) -> Option<&MovieRecord> {
        self.records.get(row)
    }

    /// Row index for an exact title, first occurrence on duplicates
    pub fn index_of_title(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Catalog accessor exposed to the presentation layer: id, title and
    /// full metadata for an exact title
    pub fn lookup(&self, title: &str) -> Option<MovieEntry<'_>> {
        let row = self.index_of_title(title)?;
        Some(MovieEntry {
            row,
            record: &self.records[row],
            details: &self.details[row],
        })
    }

    pub(crate) fn tables(&self) -> (&[MovieRecord], &[MovieDetails]) {
        (&self.records, &self.details)
    }
}

#[cfg(test)]
pub(crate) fn test_record(id: i64, title: &str, overview: &str) -> MovieRecord {
    MovieRecord {
        id,
        title: title.to_string(),
        overview: overview.to_string(),
        genres: Vec::new(),
        keywords: Vec::new(),
        top_cast: Vec::new(),
        director: None,
        production_companies: Vec::new(),
        release_date: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(titles: &[&str]) -> Catalog {
        let records: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| test_record(i as i64 + 1, t, "overview"))
            .collect();
        let details = vec![MovieDetails::default(); records.len()];
        Catalog::new(records, details)
    }

    #[test]
    fn test_title_index_first_occurrence_wins() {
        let c = catalog(&["Alpha", "Beta", "Alpha"]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.index_of_title("Alpha"), Some(0));
        assert_eq!(c.index_of_title("Beta"), Some(1));
    }

    #[test]
    fn test_rows_missing_required_fields_dropped() {
        let mut records = vec![
            test_record(1, "Kept", "x"),
            test_record(0, "No Id", "x"),
            test_record(3, "", "x"),
            test_record(4, "Also Kept", "x"),
        ];
        records[1].id = 0;
        let details = vec![MovieDetails::default(); records.len()];
        let c = Catalog::new(records, details);

        assert_eq!(c.len(), 2);
        assert_eq!(c.index_of_title("Also Kept"), Some(1));
    }

    #[test]
    fn test_lookup_returns_aligned_details() {
        let records = vec![test_record(7, "Solo", "x")];
        let details = vec![MovieDetails {
            budget: 55,
            ..Default::default()
        }];
        let c = Catalog::new(records, details);

        let entry = c.lookup("Solo").unwrap();
        assert_eq!(entry.row, 0);
        assert_eq!(entry.record.id, 7);
        assert_eq!(entry.details.budget, 55);
        assert!(c.lookup("Duo").is_none());
    }
}
