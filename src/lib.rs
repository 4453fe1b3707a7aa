//! # nfind - fuzzy word finder
//!
//! nfind finds words in a text that look like a query word, tolerating
//! misspellings, insertions and shifted characters. It does this without
//! computing edit distances: both sides are cut into n-grams, and a word
//! matches when one of its n-grams lands in the query's tolerance table for
//! that position.
//!
//! ## Architecture
//!
//! - [`search`] - The engine: tolerance tables, parallel scan, verification
//! - [`error`] - Configuration and search errors
//! - [`output`] - Match listings, highlighted text, report files
//! - [`utils`] - Config file handling and logging setup
//!
//! ## Quick Start
//!
//! ```
//! use nfind::search::{FuzzySearch, SearchConfig};
//!
//! let config = SearchConfig::default().with_n(2).with_k(1);
//! let search = FuzzySearch::new("helo world", config).unwrap();
//!
//! // "helo" shares its leading n-gram with "hello"
//! let results = search.find("hello");
//! assert_eq!(results["helo"], vec![0]);
//! ```
//!
//! ## How a query runs
//!
//! 1. **Tables** - the query's n-grams are grouped into one table per
//!    position, each holding the n-grams up to `k` positions away
//! 2. **Scan** - every table is checked against every text word in parallel
//! 3. **Verify** - hit words are located literally in the original text
//!
//! Nothing is cached between queries.

pub mod error;
pub mod output;
pub mod search;
pub mod utils;

pub use error::{ConfigError, SearchError};
pub use search::{FuzzySearch, ResultMap, SearchConfig};
