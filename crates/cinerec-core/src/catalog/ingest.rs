//! One-time catalog ingestion from the raw TMDB CSV exports
//!
//! `tmdb_5000_movies.csv` carries the movie table with JSON-encoded list
//! columns (genres, keywords, production companies, spoken languages);
//! `tmdb_5000_credits.csv` carries cast and crew, also JSON-encoded. The two
//! tables are merged on title. Malformed list cells contribute no tokens
//! rather than failing the row.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::{Catalog, MovieDetails, MovieRecord};
use crate::error::{CinerecError, Result};

pub const MOVIES_CSV: &str = "tmdb_5000_movies.csv";
pub const CREDITS_CSV: &str = "tmdb_5000_credits.csv";

/// Cap on top-billed cast names kept per movie
const TOP_CAST_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
struct MovieRow {
    /// Empty id cells deserialize to `None`; the row is dropped downstream
    #[serde(default)]
    id: Option<i64>,
    title: String,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    genres: String,
    #[serde(default)]
    keywords: String,
    #[serde(default)]
    production_companies: String,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    budget: Option<u64>,
    #[serde(default)]
    revenue: Option<u64>,
    #[serde(default)]
    runtime: Option<f64>,
    #[serde(default)]
    popularity: Option<f64>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    spoken_languages: String,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    vote_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct CreditsRow {
    title: String,
    #[serde(default)]
    cast: String,
    #[serde(default)]
    crew: String,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CrewMember {
    name: String,
    #[serde(default)]
    job: String,
}

/// Build the catalog from the raw CSV files in `source_dir`.
///
/// Missing source tables are fatal; this is the only ingestion-time
/// structural error surfaced to the operator.
#[tracing::instrument(skip(source_dir), fields(source = %source_dir.display()))]
pub fn ingest(source_dir: &Path) -> Result<Catalog> {
    let movies_path = source_dir.join(MOVIES_CSV);
    let credits_path = source_dir.join(CREDITS_CSV);
    for path in [&movies_path, &credits_path] {
        if !path.exists() {
            return Err(CinerecError::MissingCatalog { path: path.clone() });
        }
    }

    let credits = read_credits(&credits_path)?;

    let mut records = Vec::new();
    let mut details = Vec::new();
    let mut reader = csv::Reader::from_path(&movies_path)?;
    for row in reader.deserialize() {
        let row: MovieRow = row?;
        let (top_cast, director) = match credits.get(&row.title) {
            Some((cast, director)) => (cast.clone(), director.clone()),
            None => (Vec::new(), None),
        };

        records.push(MovieRecord {
            id: row.id.unwrap_or_default(),
            title: row.title,
            overview: row.overview,
            genres: parse_names(&row.genres),
            keywords: parse_names(&row.keywords),
            top_cast,
            director,
            production_companies: parse_names(&row.production_companies),
            release_date: NaiveDate::parse_from_str(&row.release_date, "%Y-%m-%d").ok(),
        });
        details.push(MovieDetails {
            budget: row.budget.unwrap_or_default(),
            revenue: row.revenue.unwrap_or_default(),
            runtime: row.runtime,
            vote_average: row.vote_average.unwrap_or_default(),
            vote_count: row.vote_count.unwrap_or_default(),
            popularity: row.popularity.unwrap_or_default(),
            status: row.status,
            spoken_languages: parse_names(&row.spoken_languages),
        });
    }

    let catalog = Catalog::new(records, details);
    tracing::info!(movies = catalog.len(), "ingested catalog");
    Ok(catalog)
}

/// Read the credits table keyed by title; first occurrence wins
fn read_credits(path: &Path) -> Result<HashMap<String, (Vec<String>, Option<String>)>> {
    let mut credits = HashMap::new();
    let mut reader = csv::Reader::from_path(path)?;
    for row in reader.deserialize() {
        let row: CreditsRow = row?;
        let cast = parse_top_cast(&row.cast);
        let director = parse_director(&row.crew);
        credits.entry(row.title).or_insert((cast, director));
    }
    Ok(credits)
}

/// Extract `name` fields from a JSON-encoded list cell; empty on malformed input
fn parse_names(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<Named>>(raw)
        .map(|entries| entries.into_iter().map(|e| e.name).collect())
        .unwrap_or_default()
}

fn parse_top_cast(raw: &str) -> Vec<String> {
    let mut names = parse_names(raw);
    names.truncate(TOP_CAST_LIMIT);
    names
}

fn parse_director(raw: &str) -> Option<String> {
    serde_json::from_str::<Vec<CrewMember>>(raw)
        .ok()?
        .into_iter()
        .find(|member| member.job == "Director")
        .map(|member| member.name)
}
