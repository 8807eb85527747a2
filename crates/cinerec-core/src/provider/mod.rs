//! Movie metadata provider collaborators
//!
//! The recommendation core only ever sees the [`MetadataProvider`] trait.
//! Implementations absorb every network or API failure locally and answer
//! with placeholder values, so a provider error can never propagate into a
//! recommendation query.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{CinerecError, Result};

const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shown when no poster or profile image can be fetched
pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/780x1170?text=Poster+Unavailable";

/// Cap on filmography entries returned per person
const FILMOGRAPHY_LIMIT: usize = 8;

/// One movie from an external filmography feed
#[derive(Debug, Clone, PartialEq)]
pub struct FilmographyEntry {
    /// Loosely-formatted title as reported by the feed
    pub title: String,
    pub poster_url: String,
}

/// External movie-metadata source consumed by the recommendation core
pub trait MetadataProvider {
    /// Poster URL for a movie; a placeholder on any failure, never an error
    fn fetch_poster(&self, movie_id: i64) -> String;

    /// Profile image URL and biography for a person; biography defaults to
    /// an empty string when unavailable
    fn fetch_person(&self, person_id: i64) -> (String, String);

    /// Filmography listing for a person; empty on any provider error
    fn fetch_filmography(&self, person_id: i64) -> Vec<FilmographyEntry>;
}

/// Offline provider used when no API key is configured, and in tests
#[derive(Debug, Default)]
pub struct PlaceholderProvider;

impl MetadataProvider for PlaceholderProvider {
    fn fetch_poster(&self, _movie_id: i64) -> String {
        PLACEHOLDER_IMAGE.to_string()
    }

    fn fetch_person(&self, _person_id: i64) -> (String, String) {
        (PLACEHOLDER_IMAGE.to_string(), String::new())
    }

    fn fetch_filmography(&self, _person_id: i64) -> Vec<FilmographyEntry> {
        Vec::new()
    }
}

#[derive(Debug, Deserialize)]
struct MovieResponse {
    poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PersonResponse {
    profile_path: Option<String>,
    #[serde(default)]
    biography: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreditsResponse {
    #[serde(default)]
    cast: Vec<CreditEntry>,
}

#[derive(Debug, Deserialize)]
struct CreditEntry {
    title: Option<String>,
    poster_path: Option<String>,
}

/// TMDB-backed provider using a blocking HTTP client
#[derive(Debug)]
pub struct TmdbProvider {
    api_key: String,
}

impl TmdbProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        TmdbProvider {
            api_key: api_key.into(),
        }
    }

    /// Build from the `TMDB_API_KEY` environment variable if set
    pub fn from_env() -> Option<Self> {
        std::env::var("TMDB_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(Self::new)
    }

    fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}?api_key={}", TMDB_API_BASE, path, self.api_key);
        let response = ureq::get(&url)
            .timeout(REQUEST_TIMEOUT)
            .call()
            .map_err(|e| CinerecError::Provider(e.to_string()))?;
        response
            .into_json()
            .map_err(|e| CinerecError::Provider(e.to_string()))
    }
}

impl MetadataProvider for TmdbProvider {
    fn fetch_poster(&self, movie_id: i64) -> String {
        let poster_path = self
            .get::<MovieResponse>(&format!("/movie/{}", movie_id))
            .map(|movie| movie.poster_path)
            .unwrap_or_else(|err| {
                tracing::warn!(movie_id, error = %err, "poster fetch failed");
                None
            });

        match poster_path {
            Some(path) => format!("{}/w780{}", TMDB_IMAGE_BASE, path),
            None => PLACEHOLDER_IMAGE.to_string(),
        }
    }

    fn fetch_person(&self, person_id: i64) -> (String, String) {
        match self.get::<PersonResponse>(&format!("/person/{}", person_id)) {
            Ok(person) => {
                let image = match person.profile_path {
                    Some(path) => format!("{}/w220_and_h330_face{}", TMDB_IMAGE_BASE, path),
                    None => PLACEHOLDER_IMAGE.to_string(),
                };
                (image, person.biography.unwrap_or_default())
            }
            Err(err) => {
                tracing::warn!(person_id, error = %err, "person fetch failed");
                (PLACEHOLDER_IMAGE.to_string(), String::new())
            }
        }
    }

    fn fetch_filmography(&self, person_id: i64) -> Vec<FilmographyEntry> {
        let credits = match self.get::<CreditsResponse>(&format!(
            "/person/{}/movie_credits",
            person_id
        )) {
            Ok(credits) => credits,
            Err(err) => {
                tracing::warn!(person_id, error = %err, "filmography fetch failed");
                return Vec::new();
            }
        };

        credits
            .cast
            .into_iter()
            .filter_map(|entry| match (entry.title, entry.poster_path) {
                (Some(title), Some(path)) => Some(FilmographyEntry {
                    title,
                    poster_url: format!("{}/w500{}", TMDB_IMAGE_BASE, path),
                }),
                _ => None,
            })
            .take(FILMOGRAPHY_LIMIT)
            .collect()
    }
}
