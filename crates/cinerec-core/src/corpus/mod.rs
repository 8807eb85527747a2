//! Tag corpus construction
//!
//! Turns raw per-movie metadata fields into normalized token sequences, one
//! column per feature family, aligned 1:1 with catalog row order. Building
//! is pure and deterministic: the same catalog always yields byte-identical
//! columns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, MovieRecord};
use crate::text;

/// Feature families that get their own similarity matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Tags,
    Genres,
    Keywords,
    Cast,
    Companies,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Tags,
        Feature::Genres,
        Feature::Keywords,
        Feature::Cast,
        Feature::Companies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Tags => "tags",
            Feature::Genres => "genres",
            Feature::Keywords => "keywords",
            Feature::Cast => "cast",
            Feature::Companies => "companies",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized token columns, row i describes catalog row i
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagCorpus {
    pub tags: Vec<String>,
    pub genres: Vec<String>,
    pub keywords: Vec<String>,
    pub cast: Vec<String>,
    pub companies: Vec<String>,
}

impl TagCorpus {
    pub fn column(&self, feature: Feature) -> &[String] {
        match feature {
            Feature::Tags => &self.tags,
            Feature::Genres => &self.genres,
            Feature::Keywords => &self.keywords,
            Feature::Cast => &self.cast,
            Feature::Companies => &self.companies,
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Build all corpus columns for a catalog
#[tracing::instrument(skip(catalog), fields(rows = catalog.len()))]
pub fn build_corpus(catalog: &Catalog) -> TagCorpus {
    let mut corpus = TagCorpus::default();
    for record in catalog.records() {
        corpus.tags.push(row_tags(record));
        corpus.genres.push(squash_join(&record.genres));
        corpus.keywords.push(row_keywords(record));
        corpus.cast.push(squash_join(&record.top_cast));
        corpus
            .companies
            .push(squash_join(&record.production_companies));
    }
    corpus
}

/// The combined tags column: overview + genres + keywords + cast + director.
///
/// Overview and keyword tokens are stemmed; entity names (genres, cast,
/// director) are squashed into single tokens and left unstemmed.
fn row_tags(record: &MovieRecord) -> String {
    let mut tokens = Vec::new();
    for word in record.overview.split_whitespace() {
        tokens.push(text::stem(word));
    }
    for genre in &record.genres {
        tokens.push(text::squash(genre));
    }
    for keyword in &record.keywords {
        tokens.push(text::stem(&text::squash(keyword)));
    }
    for name in &record.top_cast {
        tokens.push(text::squash(name));
    }
    if let Some(director) = &record.director {
        tokens.push(text::squash(director));
    }
    finish(tokens)
}

fn row_keywords(record: &MovieRecord) -> String {
    let tokens = record
        .keywords
        .iter()
        .map(|k| text::stem(&text::squash(k)))
        .collect();
    finish(tokens)
}

/// Entity-name columns: squashed, lowercased, space-joined, no filtering
fn squash_join(names: &[String]) -> String {
    names
        .iter()
        .map(|n| text::squash(n))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shared tail of tag normalization: lowercase, drop stop words and short
/// tokens, strip punctuation, join with single spaces
fn finish(tokens: Vec<String>) -> String {
    let mut kept = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.to_lowercase();
        if text::is_stop_word(&token) {
            continue;
        }
        if token.chars().count() <= 2 {
            continue;
        }
        let token = text::strip_punctuation(&token);
        if token.is_empty() {
            continue;
        }
        kept.push(token);
    }
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{test_record, MovieDetails};

    fn catalog_of(records: Vec<MovieRecord>) -> Catalog {
        let details = vec![MovieDetails::default(); records.len()];
        Catalog::new(records, details)
    }

    #[test]
    fn test_corpus_aligned_with_catalog() {
        let catalog = catalog_of(vec![
            test_record(1, "A", "space adventure"),
            test_record(2, "B", "romantic dinner"),
        ]);
        let corpus = build_corpus(&catalog);
        assert_eq!(corpus.len(), catalog.len());
        for feature in Feature::ALL {
            assert_eq!(corpus.column(feature).len(), catalog.len());
        }
    }

    #[test]
    fn test_tags_combine_all_fields() {
        let mut record = test_record(1, "Avatar", "Marines explore distant moons");
        record.genres = vec!["Science Fiction".to_string()];
        record.keywords = vec!["space war".to_string()];
        record.top_cast = vec!["Sam Worthington".to_string()];
        record.director = Some("James Cameron".to_string());

        let corpus = build_corpus(&catalog_of(vec![record]));
        let tags = &corpus.tags[0];

        // Stemmed overview tokens
        assert!(tags.contains("marin"));
        assert!(tags.contains("explor"));
        // Squashed entity names
        assert!(tags.contains("sciencefiction"));
        assert!(tags.contains("spacewar"));
        assert!(tags.contains("samworthington"));
        assert!(tags.contains("jamescameron"));
    }

    #[test]
    fn test_stop_words_and_short_tokens_dropped() {
        let record = t_record_with_overview("The ox fled to a bog");
        let corpus = build_corpus(&catalog_of(vec![record]));
        // "the", "to", "a" are stop words; "ox" is too short
        assert_eq!(corpus.tags[0], "fled bog");
    }

    #[test]
    fn test_punctuation_stripped() {
        let record = t_record_with_overview("sci-fi masterpiece, truly unforgettable!");
        let corpus = build_corpus(&catalog_of(vec![record]));
        assert!(corpus.tags[0].contains("scifi"));
        assert!(!corpus.tags[0].contains('!'));
        assert!(!corpus.tags[0].contains(','));
    }

    #[test]
    fn test_missing_fields_contribute_nothing() {
        let record = test_record(1, "Bare", "");
        let corpus = build_corpus(&catalog_of(vec![record]));
        assert_eq!(corpus.tags[0], "");
        assert_eq!(corpus.genres[0], "");
        assert_eq!(corpus.cast[0], "");
    }

    #[test]
    fn test_deterministic() {
        let mut record = test_record(1, "Avatar", "Marines explore distant moons");
        record.genres = vec!["Action".to_string(), "Adventure".to_string()];
        record.keywords = vec!["culture clash".to_string(), "future".to_string()];
        let catalog = catalog_of(vec![record]);

        let first = build_corpus(&catalog);
        let second = build_corpus(&catalog);
        assert_eq!(first, second);
    }

    fn t_record_with_overview(overview: &str) -> MovieRecord {
        test_record(1, "T", overview)
    }
}
