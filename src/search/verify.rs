//! Verification: turn fuzzy table hits into exact positions.
//!
//! The tables only say which words look like the query. This step gathers
//! those words and finds every literal occurrence of each one in the raw
//! text. The search here is plain, case-sensitive substring matching.

use crate::search::types::{PositionTable, ResultMap, Text, WordMatch};
use ahash::AHashSet;
use memchr::memmem;
use tracing::debug;

/// Character offsets of every non-overlapping occurrence of `needle` in
/// `haystack`, left to right.
///
/// An empty needle has no occurrences.
pub fn literal_offsets(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }

    let mut offsets = Vec::new();
    let mut last_byte = 0;
    let mut last_char = 0;

    // Matches come in ascending byte order, so char offsets can be counted
    // incrementally from the previous match.
    for byte_pos in memmem::find_iter(haystack.as_bytes(), needle.as_bytes()) {
        last_char += haystack[last_byte..byte_pos].chars().count();
        last_byte = byte_pos;
        offsets.push(last_char);
    }

    offsets
}

/// Merges the scanned tables and locates each candidate in the text
pub struct ResultVerifier<'t> {
    text: &'t Text,
}

impl<'t> ResultVerifier<'t> {
    pub fn new(text: &'t Text) -> Self {
        Self { text }
    }

    /// Distinct words recorded in any table.
    ///
    /// Hits are first unioned as `(index, word)` pairs, then reduced to the
    /// word text, so repeated words become a single candidate.
    pub fn candidates(&self, tables: &[PositionTable<'t>]) -> AHashSet<&'t str> {
        let hits: AHashSet<WordMatch<'t>> = tables
            .iter()
            .flat_map(|table| table.matches().copied())
            .collect();

        hits.into_iter().map(|hit| hit.word).collect()
    }

    /// Map every candidate to its offsets in the raw text
    pub fn verify(&self, tables: &[PositionTable<'t>]) -> ResultMap {
        let candidates = self.candidates(tables);
        debug!(candidates = candidates.len(), "verifying candidates");

        candidates
            .into_iter()
            .map(|word| (word.to_string(), literal_offsets(self.text.raw(), word)))
            .collect()
    }
}
