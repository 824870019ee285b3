//! Error types for the sequence cache.

/// Sequence cache errors.
///
/// Every variant is raised before a walk commits anything to the table, so a
/// failed call never leaves partially unwound entries behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollatzError {
    /// Input is not an integer.
    #[error("invalid argument {input:?}: {reason}")]
    InvalidArgument { input: String, reason: String },

    /// Integer input below 1.
    #[error("value {value} is out of domain: starting values must be >= 1")]
    DomainError { value: i128 },

    /// Lookup of a value that no walk has reached yet.
    #[error("value {value} is not in the cache")]
    NotCached { value: u64 },

    /// Walk pushed more values than the configured ceiling allows.
    #[error("walk from {start} exceeded the step limit of {limit}")]
    StepLimitExceeded { start: u64, limit: u64 },

    /// Next term (or next power of two) does not fit in a u64.
    #[error("arithmetic overflow continuing the sequence past {value}")]
    Overflow { value: u64 },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl CollatzError {
    pub(crate) fn invalid_argument(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Bad input
            Self::InvalidArgument { .. } => 2,
            Self::DomainError { .. } => 2,
            Self::NotCached { .. } => 2,

            // Walk gave up
            Self::StepLimitExceeded { .. } => 3,
            Self::Overflow { .. } => 3,

            Self::Config { .. } => 4,
        }
    }
}

/// Result type for cache operations.
pub type CollatzResult<T> = Result<T, CollatzError>;
