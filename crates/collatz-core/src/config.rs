//! Cache configuration.
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `COLLATZ_SEED_EXPONENT` | Largest seeded power of two is `2^k` (default: 20) |
//! | `COLLATZ_MAX_STEPS` | Abort a walk after this many new values (default: unbounded) |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CollatzError, CollatzResult};

/// Default seed exponent: the table starts with `2^0..=2^20`.
pub const DEFAULT_SEED_EXPONENT: u32 = 20;

/// Largest power of two representable as a `u64` key.
pub const MAX_SEED_EXPONENT: u32 = 63;

/// Settings for [`SequenceCache`](crate::SequenceCache).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Exponent of the largest power of two seeded at startup.
    #[serde(default = "default_seed_exponent")]
    pub seed_exponent: u32,

    /// Ceiling on values pushed by a single walk. `None` walks until an
    /// anchor is found, however long that takes.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

fn default_seed_exponent() -> u32 {
    DEFAULT_SEED_EXPONENT
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            seed_exponent: default_seed_exponent(),
            max_steps: None,
        }
    }
}

impl CacheConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Parse a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(content: &str) -> CollatzResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| CollatzError::config(format!("invalid config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file.
    pub fn load(path: &Path) -> CollatzResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CollatzError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Override fields with `COLLATZ_*` variables that are set and parse.
    pub fn merge_env(mut self) -> Self {
        if let Some(k) = std::env::var("COLLATZ_SEED_EXPONENT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            self.seed_exponent = k;
        }
        if let Some(n) = std::env::var("COLLATZ_MAX_STEPS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
        {
            self.max_steps = Some(n);
        }
        self
    }

    /// Set the seed exponent.
    pub fn with_seed_exponent(mut self, seed_exponent: u32) -> Self {
        self.seed_exponent = seed_exponent;
        self
    }

    /// Set the per-walk step ceiling.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn validate(&self) -> CollatzResult<()> {
        if self.seed_exponent > MAX_SEED_EXPONENT {
            return Err(CollatzError::config(format!(
                "seed_exponent must be <= {}, got {}",
                MAX_SEED_EXPONENT, self.seed_exponent
            )));
        }
        if self.max_steps == Some(0) {
            return Err(CollatzError::config("max_steps must be > 0"));
        }
        Ok(())
    }
}
