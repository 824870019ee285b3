//! Memoized Collatz sequence table.
//!
//! [`SequenceCache`] records, for every value it has seen, the length of its
//! Collatz sequence down to 1, the peak value on the way, and the next term.
//! New starting values reuse whatever tail is already known:
//!
//! - Seeded with powers of two `2^0..=2^20` (configurable)
//! - Seeds extended lazily when a walk climbs past the largest one
//! - Walks stop at the first known value and unwind back to the start
//!
//! # Quick Start
//!
//! ```
//! use collatz_core::{Classification, SequenceCache};
//!
//! # fn main() -> collatz_core::CollatzResult<()> {
//! let mut cache = SequenceCache::new();
//! let stack = cache.simulate(3, true)?;
//! assert_eq!(stack, Some(vec![3, 10, 5, 16]));
//!
//! let entry = cache.lookup(3)?;
//! assert_eq!((entry.length, entry.peak, entry.next), (8, 16, 10));
//! assert_eq!(entry.classification, Classification::Odd);
//! # Ok(())
//! # }
//! ```
//!
//! The cache is plain owned state with no interior locking. Callers that fan
//! work out across threads must serialize mutations themselves, e.g. behind a
//! `Mutex<SequenceCache>`.

pub mod cache;
pub mod config;
pub mod entry;
pub mod error;
pub mod input;
pub mod report;

pub use cache::{next_term, SequenceCache};
pub use config::{CacheConfig, DEFAULT_SEED_EXPONENT, MAX_SEED_EXPONENT};
pub use entry::{CacheEntry, Classification};
pub use error::{CollatzError, CollatzResult};
pub use input::{parse_integer, parse_start_value};
pub use report::{CacheStats, TableRow};
