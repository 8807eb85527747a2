//! Cinerec Core Library
//!
//! Content-based movie recommendation: tag corpus construction,
//! bag-of-words vectorization, cached cosine-similarity matrices,
//! top-K ranking, and fuzzy title resolution.

pub mod artifact;
pub mod catalog;
pub mod corpus;
pub mod error;
pub mod format;
pub mod logging;
pub mod provider;
pub mod recommend;
pub mod resolve;
pub mod similarity;
pub mod text;
