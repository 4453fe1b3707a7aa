//! Error types for the search engine.
//!
//! Configuration problems are reported once, when a [`FuzzySearch`] is built.
//! After that a query never fails on its input; the only runtime error is a
//! cancelled scan.
//!
//! [`FuzzySearch`]: crate::search::FuzzySearch

use thiserror::Error;

/// Invalid engine settings, rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `n` must be at least 1
    #[error("n-gram length must be at least 1")]
    ZeroNgramLength,
}

/// Errors raised while running a query.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The stop flag was raised before the scan finished
    #[error("search cancelled")]
    Cancelled,
}

pub type Result<T, E = SearchError> = std::result::Result<T, E>;
