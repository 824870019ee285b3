use std::fmt;

use serde::{Deserialize, Serialize};

/// How an entry got into the table.
///
/// `PowerOfTwo` marks seeded entries. Walked entries record whether the value
/// itself is odd (next term `3n+1`) or even (next term `n/2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    PowerOfTwo,
    Odd,
    Even,
}

impl Classification {
    /// Classification of a value inserted by a walk.
    pub fn of(value: u64) -> Self {
        if value % 2 == 1 {
            Self::Odd
        } else {
            Self::Even
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let note = match self {
            Self::PowerOfTwo => "power of two",
            Self::Odd => "odd",
            Self::Even => "even",
        };
        f.write_str(note)
    }
}

/// Memoized facts about one starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Terms from the value down to 1, both ends included.
    pub length: u64,
    /// Largest term on the way to 1.
    pub peak: u64,
    /// The term after this one. For 1 this is 4, continuing the 1, 4, 2 cycle.
    pub next: u64,
    pub classification: Classification,
}

impl CacheEntry {
    /// Seed entry for `value = 2^exponent`.
    pub fn power_of_two(value: u64, exponent: u32) -> Self {
        Self {
            length: u64::from(exponent) + 1,
            peak: value,
            next: if value == 1 { 4 } else { value / 2 },
            classification: Classification::PowerOfTwo,
        }
    }
}
