//! Error types for combinator operations

use thiserror::Error;

/// Message carried by [`FuncError::InvalidArgument`] when a repetition count is not positive
pub const INVALID_REPETITIONS: &str = "The number of repetitions must be at least 1";

/// Errors raised by the combinators themselves
///
/// Failures of wrapped computations never pass through this type; they reach
/// the caller in the computation's own error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FuncError {
    /// Invalid combinator configuration
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be parsed or serialized
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FuncError {
    /// The error for a repetition count below 1
    pub fn invalid_repetitions() -> Self {
        FuncError::InvalidArgument(INVALID_REPETITIONS.to_string())
    }
}

impl From<toml::de::Error> for FuncError {
    fn from(e: toml::de::Error) -> Self {
        FuncError::Config(format!("Failed to parse TOML: {}", e))
    }
}

impl From<toml::ser::Error> for FuncError {
    fn from(e: toml::ser::Error) -> Self {
        FuncError::Config(format!("Failed to serialize to TOML: {}", e))
    }
}
