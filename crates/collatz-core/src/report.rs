use serde::Serialize;

use crate::cache::SequenceCache;
use crate::entry::{CacheEntry, Classification};
use crate::error::CollatzResult;

/// One line of the N / length / maximum / second / note table.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    pub n: u64,
    pub length: u64,
    pub peak: u64,
    pub next: u64,
    pub classification: Classification,
}

impl TableRow {
    fn new(n: u64, entry: &CacheEntry) -> Self {
        Self {
            n,
            length: entry.length,
            peak: entry.peak,
            next: entry.next,
            classification: entry.classification,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    /// Entries still tagged as seeded powers of two.
    pub seeded: usize,
    /// Entries added by walks.
    pub walked: usize,
    pub frontier: u64,
    pub frontier_exponent: u32,
}

impl SequenceCache {
    /// Rows for the requested values, in the order given.
    pub fn rows(&self, keys: &[u64]) -> CollatzResult<Vec<TableRow>> {
        keys.iter()
            .map(|&n| self.lookup(n).map(|entry| TableRow::new(n, entry)))
            .collect()
    }

    /// Rows for every cached value, ascending.
    pub fn all_rows(&self) -> Vec<TableRow> {
        self.entries()
            .map(|(n, entry)| TableRow::new(n, entry))
            .collect()
    }

    pub fn stats(&self) -> CacheStats {
        let seeded = self
            .entries()
            .filter(|(_, e)| e.classification == Classification::PowerOfTwo)
            .count();
        let (frontier, frontier_exponent) = self.frontier();
        CacheStats {
            entries: self.len(),
            seeded,
            walked: self.len() - seeded,
            frontier,
            frontier_exponent,
        }
    }
}
