use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Engine settings, fixed for the lifetime of a [`FuzzySearch`].
///
/// [`FuzzySearch`]: crate::search::FuzzySearch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Compare n-grams without case folding
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,

    /// Characters per n-gram
    #[serde(default = "default_n")]
    pub n: usize,

    /// Neighbouring positions merged into each table, on each side
    #[serde(default = "default_k")]
    pub k: usize,
}

fn default_case_sensitive() -> bool {
    false
}

fn default_n() -> usize {
    4
}

fn default_k() -> usize {
    1
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: default_case_sensitive(),
            n: default_n(),
            k: default_k(),
        }
    }
}

impl SearchConfig {
    pub fn new(case_sensitive: bool, n: usize, k: usize) -> Self {
        Self {
            case_sensitive,
            n,
            k,
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Check the settings before building an engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n == 0 {
            return Err(ConfigError::ZeroNgramLength);
        }
        Ok(())
    }
}
