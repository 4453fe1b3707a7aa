use crate::error::{Result, SearchError};
use crate::search::tables::ngram_at;
use crate::search::types::{PositionTable, Text, WordMatch};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fills position tables with the text words that hit them.
///
/// For a table at position `p`, every word whose n-gram at `p` is one of the
/// table's keys is recorded under that key. Words with no n-gram at `p` are
/// skipped.
pub struct PositionScanner<'t> {
    text: &'t Text,
    n: usize,
    case_sensitive: bool,
}

impl<'t> PositionScanner<'t> {
    pub fn new(text: &'t Text, n: usize, case_sensitive: bool) -> Self {
        Self {
            text,
            n,
            case_sensitive,
        }
    }

    /// Scan the whole text against one table.
    /// Returns the number of words recorded.
    pub fn scan(&self, table: &mut PositionTable<'t>) -> usize {
        let mut recorded = 0;
        for (index, word) in self.text.words().enumerate() {
            if self.visit(table, index, word) {
                recorded += 1;
            }
        }

        trace!(position = table.position(), keys = table.len(), recorded, "scanned table");
        recorded
    }

    /// Like [`scan`](PositionScanner::scan), but checks `stop` before each
    /// word and bails out with [`SearchError::Cancelled`] once it is raised.
    pub fn scan_until(&self, table: &mut PositionTable<'t>, stop: &AtomicBool) -> Result<usize> {
        let mut recorded = 0;
        for (index, word) in self.text.words().enumerate() {
            if stop.load(Ordering::Relaxed) {
                return Err(SearchError::Cancelled);
            }
            if self.visit(table, index, word) {
                recorded += 1;
            }
        }

        trace!(position = table.position(), keys = table.len(), recorded, "scanned table");
        Ok(recorded)
    }

    /// Scan every table, one task per table, and wait for all of them.
    ///
    /// Each task holds the only mutable reference to its table, so the
    /// tables need no locking.
    pub fn scan_all(&self, tables: &mut [PositionTable<'t>]) -> usize {
        #[cfg(feature = "parallel")]
        let recorded = tables.par_iter_mut().map(|table| self.scan(table)).sum();

        #[cfg(not(feature = "parallel"))]
        let recorded = tables.iter_mut().map(|table| self.scan(table)).sum();

        recorded
    }

    /// [`scan_all`](PositionScanner::scan_all) with a stop flag. Once `stop`
    /// is raised, every task bails out at its next word and the whole scan
    /// returns [`SearchError::Cancelled`].
    pub fn scan_all_until(
        &self,
        tables: &mut [PositionTable<'t>],
        stop: &AtomicBool,
    ) -> Result<usize> {
        #[cfg(feature = "parallel")]
        let recorded = tables
            .par_iter_mut()
            .map(|table| self.scan_until(table, stop))
            .try_reduce(|| 0, |a, b| Ok(a + b))?;

        #[cfg(not(feature = "parallel"))]
        let recorded = tables
            .iter_mut()
            .map(|table| self.scan_until(table, stop))
            .sum::<Result<usize>>()?;

        Ok(recorded)
    }

    /// Record `word` if its n-gram at the table's position is a key.
    /// Words with no n-gram there are skipped.
    fn visit(&self, table: &mut PositionTable<'t>, index: usize, word: &'t str) -> bool {
        match ngram_at(word, table.position(), self.n, self.case_sensitive) {
            Some(ngram) => table.record(&ngram, WordMatch { index, word }),
            None => false,
        }
    }
}
