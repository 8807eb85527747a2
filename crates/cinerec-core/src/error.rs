//! Error types and exit codes for cinerec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing catalog tables, unresolvable titles)
//!
//! Query-time conditions (unknown title, unavailable feature) are recoverable
//! and surface as empty results rather than errors; the variants below exist
//! so callers that do want to propagate them have a typed vocabulary.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the cinerec CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing catalog, unknown title (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during cinerec operations
#[derive(Error, Debug)]
pub enum CinerecError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("required catalog table not found: {path:?}")]
    MissingCatalog { path: PathBuf },

    #[error("unknown title: {title}")]
    UnknownTitle { title: String },

    // Recovered locally by rebuilding; never user-facing
    #[error("similarity cache for feature '{feature}' is corrupt: {reason}")]
    CacheCorrupt { feature: String, reason: String },

    // Feature degraded to unavailable; dependent queries return empty
    #[error("feature '{feature}' yields no usable vocabulary")]
    EmptyVocabulary { feature: String },

    // Absorbed by provider implementations via placeholder values
    #[error("metadata provider error: {0}")]
    Provider(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

impl CinerecError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            CinerecError::UnknownFormat(_) | CinerecError::UsageError(_) => ExitCode::Usage,

            // Data errors
            CinerecError::MissingCatalog { .. } | CinerecError::UnknownTitle { .. } => {
                ExitCode::Data
            }

            // Generic failures
            CinerecError::CacheCorrupt { .. }
            | CinerecError::EmptyVocabulary { .. }
            | CinerecError::Provider(_)
            | CinerecError::Io(_)
            | CinerecError::Json(_)
            | CinerecError::Csv(_)
            | CinerecError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CinerecError::UnknownFormat(_) => "unknown_format",
            CinerecError::UsageError(_) => "usage_error",
            CinerecError::MissingCatalog { .. } => "missing_catalog",
            CinerecError::UnknownTitle { .. } => "unknown_title",
            CinerecError::CacheCorrupt { .. } => "cache_corrupt",
            CinerecError::EmptyVocabulary { .. } => "empty_vocabulary",
            CinerecError::Provider(_) => "provider_error",
            CinerecError::Io(_) => "io_error",
            CinerecError::Json(_) => "json_error",
            CinerecError::Csv(_) => "csv_error",
            CinerecError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for cinerec operations
pub type Result<T> = std::result::Result<T, CinerecError>;
