use ahash::{AHashMap, AHashSet};
use std::collections::BTreeMap;
use std::ops::Range;

/// An n-gram: `n` consecutive characters of a word, lowercased unless the
/// search is case sensitive
pub type Ngram = String;

/// Matched substrings mapped to their character offsets in the original text.
/// Offsets are ascending; the map is ordered so output is deterministic.
pub type ResultMap = BTreeMap<String, Vec<usize>>;

/// Text to search in: the raw string plus its whitespace-separated words.
///
/// Separators are Unicode whitespace plus the ASCII information separators
/// `\x1c`..=`\x1f`. Runs of separators never produce empty words.
///
/// Words are stored as byte ranges into `raw`, so building a `Text` copies
/// nothing beyond the original string.
#[derive(Debug, Clone)]
pub struct Text {
    raw: String,
    words: Vec<Range<usize>>,
}

impl Text {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let base = raw.as_ptr() as usize;
        let words = raw
            .split(is_separator)
            .filter(|word| !word.is_empty())
            .map(|word| {
                let start = word.as_ptr() as usize - base;
                start..start + word.len()
            })
            .collect();

        Self { raw, words }
    }

    /// The original string, unchanged
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over words in text order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(move |range| &self.raw[range.clone()])
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// A text word that hit a position table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordMatch<'t> {
    /// Index of the word in the text
    pub index: usize,
    pub word: &'t str,
}

/// Lookup table for one n-gram position of the query.
///
/// Keys are the query n-grams inside the position's tolerance window. Each
/// key collects the text words whose n-gram at the same position equals it.
/// A table is owned by exactly one scanner while a query runs.
#[derive(Debug, Clone, Default)]
pub struct PositionTable<'t> {
    position: usize,
    entries: AHashMap<Ngram, AHashSet<WordMatch<'t>>>,
}

impl<'t> PositionTable<'t> {
    /// Create an empty table for a query position
    pub fn new(position: usize) -> Self {
        Self {
            position,
            entries: AHashMap::new(),
        }
    }

    /// Create a table with room for `capacity` keys
    pub fn with_capacity(position: usize, capacity: usize) -> Self {
        Self {
            position,
            entries: AHashMap::with_capacity(capacity),
        }
    }

    /// Query n-gram position this table belongs to
    pub fn position(&self) -> usize {
        self.position
    }

    /// Add a key with an empty match set. An existing key is reset, so the
    /// last write within a window wins.
    pub fn insert_key(&mut self, ngram: Ngram) {
        self.entries.insert(ngram, AHashSet::new());
    }

    /// Record a word under `ngram` if it is a key.
    /// Returns true if the word was newly recorded.
    pub fn record(&mut self, ngram: &str, hit: WordMatch<'t>) -> bool {
        match self.entries.get_mut(ngram) {
            Some(matches) => matches.insert(hit),
            None => false,
        }
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All recorded words across keys (a word may appear under several keys)
    pub fn matches(&self) -> impl Iterator<Item = &WordMatch<'t>> {
        self.entries.values().flatten()
    }
}
