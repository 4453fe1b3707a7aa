//! Query decomposition: n-gram splitting and tolerance tables.
//!
//! A query of `m` n-grams yields up to `m` tables. The table for position `i`
//! holds every query n-gram in the window `[i - k, i + k]`, clipped to the
//! word, so a text word whose n-gram at `i` drifted by up to `k` positions
//! still hits.

use crate::search::types::{Ngram, PositionTable};
use std::iter;
use std::ops::RangeInclusive;
use tracing::trace;

/// Split a word into its n-grams, one per starting character offset.
///
/// Counts characters, not bytes. Words shorter than `n` (and `n == 0`)
/// produce no n-grams.
pub fn split(word: &str, n: usize, case_sensitive: bool) -> Vec<Ngram> {
    if n == 0 {
        return Vec::new();
    }

    let bounds: Vec<usize> = char_bounds(word).collect();
    let char_count = bounds.len() - 1;
    if char_count < n {
        return Vec::new();
    }

    (0..=char_count - n)
        .map(|i| fold(&word[bounds[i]..bounds[i + n]], case_sensitive))
        .collect()
}

/// The n-gram of `word` at `position`, i.e. `split(word, n, cs)[position]`,
/// without building the whole sequence.
///
/// Returns `None` when the word has no n-gram at that position.
pub fn ngram_at(word: &str, position: usize, n: usize, case_sensitive: bool) -> Option<Ngram> {
    if n == 0 {
        return None;
    }

    let mut bounds = char_bounds(word);
    let start = bounds.nth(position)?;
    let end = bounds.nth(n - 1)?;
    Some(fold(&word[start..end], case_sensitive))
}

/// Clipped tolerance window for `index` over `len` n-grams.
///
/// Returns `None` when the left bound falls outside `0..len`; such a
/// position gets no table.
pub fn window(len: usize, index: usize, k: usize) -> Option<RangeInclusive<usize>> {
    let left = index.saturating_sub(k);
    if left >= len {
        return None;
    }
    let right = index.saturating_add(k).min(len - 1);
    Some(left..=right)
}

/// Build one tolerance table per query n-gram position.
///
/// Positions without a valid window are left out. Every table is its own
/// allocation so scanners can fill them independently.
pub fn build_tables<'t>(
    word: &str,
    n: usize,
    k: usize,
    case_sensitive: bool,
) -> Vec<PositionTable<'t>> {
    let ngrams = split(word, n, case_sensitive);

    (0..ngrams.len())
        .filter_map(|position| {
            let bounds = window(ngrams.len(), position, k)?;
            let slice = &ngrams[bounds];
            let mut table = PositionTable::with_capacity(position, slice.len());
            for ngram in slice {
                table.insert_key(ngram.clone());
            }
            trace!(position, keys = ?table.keys().collect::<Vec<_>>(), "tolerance table");
            Some(table)
        })
        .collect()
}

/// Byte offsets of every char boundary, including the end of the string
fn char_bounds(word: &str) -> impl Iterator<Item = usize> + '_ {
    word.char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(word.len()))
}

#[inline]
fn fold(gram: &str, case_sensitive: bool) -> Ngram {
    if case_sensitive {
        gram.to_string()
    } else {
        gram.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("hello", 2, false), vec!["he", "el", "ll", "lo"]);
        assert_eq!(split("hello", 5, false), vec!["hello"]);
        assert_eq!(split("HeLLo", 3, false), vec!["hel", "ell", "llo"]);
        assert_eq!(split("HeLLo", 3, true), vec!["HeL", "eLL", "LLo"]);
    }

    #[test]
    fn test_split_short_word() {
        assert!(split("hi", 3, false).is_empty());
        assert!(split("", 1, false).is_empty());
        assert!(split("hello", 0, false).is_empty());
    }

    #[test]
    fn test_split_counts_chars_not_bytes() {
        assert_eq!(split("сократ", 4, false), vec!["сокр", "окра", "крат"]);
        assert_eq!(split("Работа", 5, false), vec!["работ", "абота"]);
    }

    #[test]
    fn test_ngram_at_matches_split() {
        for word in ["hello", "Сократ", "ab", "", "x"] {
            for n in 1..4 {
                let grams = split(word, n, false);
                for position in 0..grams.len() + 2 {
                    assert_eq!(
                        ngram_at(word, position, n, false),
                        grams.get(position).cloned(),
                        "word={word:?} n={n} position={position}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_window_clipping() {
        assert_eq!(window(4, 0, 1), Some(0..=1));
        assert_eq!(window(4, 1, 1), Some(0..=2));
        assert_eq!(window(4, 3, 1), Some(2..=3));
        assert_eq!(window(4, 2, 0), Some(2..=2));
        assert_eq!(window(4, 2, 10), Some(0..=3));
        assert_eq!(window(1, 0, usize::MAX), Some(0..=0));
    }

    #[test]
    fn test_window_out_of_range() {
        assert_eq!(window(3, 5, 1), None);
        assert_eq!(window(0, 0, 0), None);
    }

    #[test]
    fn test_build_tables() {
        let tables = build_tables("hello", 2, 1, false);
        assert_eq!(tables.len(), 4);

        let keys = |i: usize| {
            let mut keys: Vec<_> = tables[i].keys().collect();
            keys.sort_unstable();
            keys
        };
        assert_eq!(keys(0), vec!["el", "he"]);
        assert_eq!(keys(1), vec!["el", "he", "ll"]);
        assert_eq!(keys(2), vec!["el", "ll", "lo"]);
        assert_eq!(keys(3), vec!["ll", "lo"]);

        for (i, table) in tables.iter().enumerate() {
            assert_eq!(table.position(), i);
            assert_eq!(table.matches().count(), 0);
        }
    }

    #[test]
    fn test_build_tables_duplicate_ngrams_collapse() {
        // "aaaa" with n=2: aa, aa, aa
        let tables = build_tables("aaaa", 2, 1, false);
        assert_eq!(tables.len(), 3);
        assert!(tables.iter().all(|t| t.len() == 1));
    }

    #[test]
    fn test_build_tables_query_shorter_than_n() {
        assert!(build_tables("cat", 4, 1, false).is_empty());
        assert!(build_tables("", 1, 1, false).is_empty());
    }
}
