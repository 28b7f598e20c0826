//! Configuration for repeated invocation
//!
//! Lets the repetition count of a [`Repeated`](crate::Repeated) come from a
//! TOML fragment instead of being hard-coded.

use crate::FuncError;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Repeated`](crate::Repeated) invoker
///
/// # Examples
///
/// ```
/// use cinch_func::RepeatConfig;
///
/// let config = RepeatConfig::from_toml("times = 3").unwrap();
/// assert_eq!(config.times, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatConfig {
    /// How many times the wrapped computation runs per invocation
    /// Default: 1
    #[serde(default = "default_times")]
    pub times: i64,
}

fn default_times() -> i64 {
    1
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            times: default_times(),
        }
    }
}

impl RepeatConfig {
    /// Create a configuration for `times` repetitions
    pub fn new(times: i64) -> Self {
        Self { times }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FuncError> {
        if self.times <= 0 {
            return Err(FuncError::invalid_repetitions());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, FuncError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, FuncError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
