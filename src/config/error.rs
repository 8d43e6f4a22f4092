//! Configuration error types.

use thiserror::Error;

/// A single problem found while validating a tracker configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Stage sequence is empty. Define at least one gesture stage")]
    EmptyStages,

    #[error("Poll period must be positive and finite (got {secs}s)")]
    InvalidPeriod { secs: f64 },

    #[error("Expected {expected} stage codes, one per stage (got {found})")]
    CodeCountMismatch { expected: usize, found: usize },

    #[error("Stage code '{code}' is assigned to more than one level")]
    DuplicateCode { code: String },
}

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more violations; all of them, not just the first.
    #[error("Invalid tracker configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),

    /// The configuration document could not be parsed
    #[error("Failed to parse tracker configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Violations carried by this error (empty for parse failures).
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            Self::Parse(_) => &[],
        }
    }
}

impl From<ConfigViolation> for ConfigError {
    fn from(violation: ConfigViolation) -> Self {
        Self::Invalid(vec![violation])
    }
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
