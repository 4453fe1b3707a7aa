//! Fuzzy word search over n-gram tolerance tables.
//!
//! A query runs in three stages, all scoped to the call:
//!
//! 1. [`tables`] splits the query into n-grams and builds one tolerance table
//!    per position.
//! 2. [`scanner`] fills every table from the text, one task per table.
//! 3. [`verify`] merges the hits and finds their exact offsets.
//!
//! ```
//! use nfind::search::{FuzzySearch, SearchConfig};
//!
//! let search = FuzzySearch::new("CAT cat Cat", SearchConfig::new(false, 3, 0)).unwrap();
//! let results = search.find("cat");
//!
//! assert_eq!(results["CAT"], vec![0]);
//! assert_eq!(results["cat"], vec![4]);
//! assert_eq!(results["Cat"], vec![8]);
//! ```

pub mod config;
pub mod scanner;
pub mod tables;
pub mod types;
pub mod verify;

pub use config::SearchConfig;
pub use scanner::PositionScanner;
pub use tables::{build_tables, ngram_at, split, window};
pub use types::{Ngram, PositionTable, ResultMap, Text, WordMatch};
pub use verify::{ResultVerifier, literal_offsets};

use crate::error::{ConfigError, Result};
use std::sync::atomic::AtomicBool;
use tracing::debug;

/// Search engine over one text.
///
/// Holds only the text and its settings. Every call to [`find`] builds its
/// tables from scratch, so calls are independent and repeatable.
///
/// [`find`]: FuzzySearch::find
#[derive(Debug, Clone)]
pub struct FuzzySearch {
    text: Text,
    config: SearchConfig,
}

impl FuzzySearch {
    pub fn new(text: impl Into<String>, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            text: Text::new(text),
            config,
        })
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find words in the text that resemble `word`.
    ///
    /// Returns each matched substring with the character offsets of all its
    /// literal occurrences. Degenerate input (empty text, empty query, query
    /// shorter than `n`) gives an empty map.
    pub fn find(&self, word: &str) -> ResultMap {
        let mut tables = self.tables_for(word);
        if tables.is_empty() {
            return ResultMap::new();
        }

        let recorded = self.scanner().scan_all(&mut tables);
        debug!(recorded, words = self.text.len(), "scan complete");

        ResultVerifier::new(&self.text).verify(&tables)
    }

    /// Like [`find`](FuzzySearch::find), but gives up with
    /// [`SearchError::Cancelled`](crate::error::SearchError::Cancelled) once
    /// `stop` is raised.
    pub fn find_with_cancel(&self, word: &str, stop: &AtomicBool) -> Result<ResultMap> {
        let mut tables = self.tables_for(word);
        if tables.is_empty() {
            return Ok(ResultMap::new());
        }

        let recorded = self.scanner().scan_all_until(&mut tables, stop)?;
        debug!(recorded, words = self.text.len(), "scan complete");

        Ok(ResultVerifier::new(&self.text).verify(&tables))
    }

    fn tables_for(&self, word: &str) -> Vec<PositionTable<'_>> {
        let SearchConfig {
            case_sensitive,
            n,
            k,
        } = self.config;

        let tables = build_tables(word, n, k, case_sensitive);
        debug!(query = word, tables = tables.len(), n, k, "built tolerance tables");
        tables
    }

    fn scanner(&self) -> PositionScanner<'_> {
        PositionScanner::new(&self.text, self.config.n, self.config.case_sensitive)
    }
}
