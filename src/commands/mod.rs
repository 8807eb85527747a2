//! Command implementations for cinerec

pub mod build;
pub mod dispatch;
pub mod filmography;
pub mod ingest;
pub mod recommend;
pub mod resolve;
pub mod show;

use cinerec_core::provider::{MetadataProvider, PlaceholderProvider, TmdbProvider};

/// Select the metadata provider: TMDB when an API key is configured,
/// offline placeholders otherwise
pub(crate) fn provider() -> Box<dyn MetadataProvider> {
    match TmdbProvider::from_env() {
        Some(tmdb) => Box::new(tmdb),
        None => {
            tracing::debug!("TMDB_API_KEY not set, using placeholder provider");
            Box::new(PlaceholderProvider)
        }
    }
}
