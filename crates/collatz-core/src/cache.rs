//! Memo table of Collatz sequence facts.
//!
//! The table starts out holding every power of two up to `2^seed_exponent`.
//! A walk from an unknown value follows the map `n -> n/2 | 3n+1`, stacking
//! each unknown term, until it lands on a known one (the anchor). The stack is
//! then unwound from the anchor back to the start, so each new entry is
//! derived from the entry of its successor:
//!
//! ```text
//! simulate(3):   stack [3, 10, 5]  anchor 16 (seeded: length 5, peak 16)
//! unwind:        5  -> length 6, peak 16, next 16
//!                10 -> length 7, peak 16, next 5
//!                3  -> length 8, peak 16, next 10
//! ```
//!
//! When a term climbs above the largest seeded power (the frontier), more
//! powers of two are seeded first, so the walk always has an anchor to hit.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{CacheConfig, MAX_SEED_EXPONENT};
use crate::entry::{CacheEntry, Classification};
use crate::error::{CollatzError, CollatzResult};
use crate::input::check_start_value;

/// Largest power of two representable as a `u64`.
const MAX_FRONTIER: u64 = 1 << MAX_SEED_EXPONENT;

/// The term following `n`: `n/2` when even, `3n+1` when odd.
pub fn next_term(n: u64) -> CollatzResult<u64> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        n.checked_mul(3)
            .and_then(|v| v.checked_add(1))
            .ok_or(CollatzError::Overflow { value: n })
    }
}

/// Memoized Collatz table. Grows monotonically, never evicts.
#[derive(Debug, Clone)]
pub struct SequenceCache {
    entries: BTreeMap<u64, CacheEntry>,
    /// Largest seeded power of two.
    frontier: u64,
    frontier_exponent: u32,
    max_steps: Option<u64>,
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceCache {
    /// Initialize with the default seed set `2^0..=2^20`.
    pub fn new() -> Self {
        let config = CacheConfig::default();
        Self::seeded(config.seed_exponent, config.max_steps)
    }

    /// Initialize from a validated config.
    pub fn with_config(config: &CacheConfig) -> CollatzResult<Self> {
        config.validate()?;
        Ok(Self::seeded(config.seed_exponent, config.max_steps))
    }

    fn seeded(seed_exponent: u32, max_steps: Option<u64>) -> Self {
        let entries = (0..=seed_exponent)
            .map(|k| {
                let value = 1u64 << k;
                (value, CacheEntry::power_of_two(value, k))
            })
            .collect();

        Self {
            entries,
            frontier: 1u64 << seed_exponent,
            frontier_exponent: seed_exponent,
            max_steps,
        }
    }

    /// Current frontier as `(2^k, k)`.
    pub fn frontier(&self) -> (u64, u32) {
        (self.frontier, self.frontier_exponent)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, n: u64) -> bool {
        self.entries.contains_key(&n)
    }

    pub fn get(&self, n: u64) -> Option<&CacheEntry> {
        self.entries.get(&n)
    }

    /// Entry for `n`, which must already have been reached by a walk or seed.
    pub fn lookup(&self, n: u64) -> CollatzResult<&CacheEntry> {
        self.entries
            .get(&n)
            .ok_or(CollatzError::NotCached { value: n })
    }

    /// Every cached value, ascending.
    pub fn all_keys(&self) -> Vec<u64> {
        self.entries.keys().copied().collect()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (u64, &CacheEntry)> + '_ {
        self.entries.iter().map(|(&n, entry)| (n, entry))
    }

    /// Seed powers of two above the frontier until the frontier is at least
    /// `target`.
    ///
    /// Fails with [`CollatzError::Overflow`] when `target` is above `2^63`.
    /// Powers seeded before that point stay in the table.
    pub fn extend_frontier(&mut self, target: u64) -> CollatzResult<()> {
        let start = self.frontier;
        while self.frontier < target {
            let value = self
                .frontier
                .checked_mul(2)
                .ok_or(CollatzError::Overflow { value: target })?;
            self.frontier = value;
            self.frontier_exponent += 1;
            let exponent = self.frontier_exponent;
            self.entries
                .entry(value)
                .or_insert_with(|| CacheEntry::power_of_two(value, exponent));
        }

        if self.frontier != start {
            debug!(
                from = start,
                to = self.frontier,
                exponent = self.frontier_exponent,
                "extended seed frontier"
            );
        }
        Ok(())
    }

    /// Walk from `n` to the first cached value and memoize every term on the
    /// way.
    ///
    /// With `capture_stack`, returns the walked terms followed by the anchor,
    /// e.g. `[3, 10, 5, 16]` on a fresh table. A value that is already cached
    /// walks nothing and returns just `[n]`.
    ///
    /// Takes any integer so that zero and negatives fail with
    /// [`CollatzError::DomainError`] instead of being unrepresentable.
    pub fn simulate(
        &mut self,
        n: impl Into<i128>,
        capture_stack: bool,
    ) -> CollatzResult<Option<Vec<u64>>> {
        let start = check_start_value(n.into())?;

        let mut stack = Vec::new();
        let mut current = start;
        let (anchor_length, anchor_peak) = loop {
            if let Some(entry) = self.entries.get(&current) {
                break (entry.length, entry.peak);
            }
            // Past 2^63 no power of two fits; keep walking and let the
            // descent land on a seeded power.
            if current > self.frontier && self.frontier < MAX_FRONTIER {
                self.extend_frontier(current.min(MAX_FRONTIER))?;
                continue;
            }
            if let Some(limit) = self.max_steps {
                if stack.len() as u64 >= limit {
                    return Err(CollatzError::StepLimitExceeded { start, limit });
                }
            }
            stack.push(current);
            current = next_term(current)?;
        };

        let trace = capture_stack.then(|| {
            let mut trace = stack.clone();
            trace.push(current);
            trace
        });

        let walked = stack.len();
        let mut length = anchor_length;
        let mut peak = anchor_peak;
        let mut next = current;
        while let Some(value) = stack.pop() {
            length += 1;
            peak = peak.max(value);
            self.entries.insert(
                value,
                CacheEntry {
                    length,
                    peak,
                    next,
                    classification: Classification::of(value),
                },
            );
            next = value;
        }

        if walked > 0 {
            debug!(start, anchor = current, walked, "memoized walk");
        }
        Ok(trace)
    }

    /// Simulate `start, start + step, ...` up to but excluding `stop`.
    ///
    /// A negative `step` counts down. Stops at the first failing value.
    /// Values simulated before it stay memoized. Returns how many values were
    /// simulated.
    pub fn simulate_range(&mut self, start: i64, stop: i64, step: i64) -> CollatzResult<usize> {
        if step == 0 {
            return Err(CollatzError::invalid_argument("0", "range step must not be zero"));
        }

        let mut count = 0;
        let mut n = start;
        while (step > 0 && n < stop) || (step < 0 && n > stop) {
            self.simulate(n, false)?;
            count += 1;
            match n.checked_add(step) {
                Some(next) => n = next,
                None => break,
            }
        }
        Ok(count)
    }

    /// Full sequence from `n` down to 1, rebuilt by following `next` links.
    pub fn sequence(&mut self, n: impl Into<i128>) -> CollatzResult<Vec<u64>> {
        let mut value = check_start_value(n.into())?;
        self.simulate(value, false)?;

        let mut terms = Vec::new();
        loop {
            let entry = self.lookup(value)?;
            terms.push(value);
            if value == 1 {
                return Ok(terms);
            }
            value = entry.next;
        }
    }
}
