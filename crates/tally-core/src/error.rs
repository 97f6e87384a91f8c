//! Error types for configuring, running, and registering benchmark entries.

use std::error::Error;
use std::fmt;

/// Errors detected during [`BenchConfig::validate()`](crate::BenchConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The benchmark name is empty or whitespace.
    EmptyName,
    /// `repetitions` is zero.
    ZeroRepetitions,
    /// A fixed iteration count exceeds [`MAX_FIXED_ITERATIONS`](crate::MAX_FIXED_ITERATIONS).
    TooManyIterations {
        /// The configured count.
        configured: u64,
        /// The largest accepted count.
        max: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "benchmark name must not be empty"),
            Self::ZeroRepetitions => write!(f, "repetitions must be at least 1"),
            Self::TooManyIterations { configured, max } => {
                write!(f, "fixed iteration count {configured} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from running a benchmark entry outside its harness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// The entry takes its iteration count from the harness and cannot be
    /// run standalone.
    HarnessDriven {
        /// Name of the entry.
        name: String,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HarnessDriven { name } => {
                write!(f, "benchmark '{name}' is harness-driven and has no fixed iteration count")
            }
        }
    }
}

impl Error for RunError {}

/// Errors from [`Registry::register`](crate::Registry::register).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// An entry with the same name is already registered.
    DuplicateName {
        /// The conflicting name.
        name: String,
    },
    /// The entry's configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "benchmark '{name}' is already registered")
            }
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for RegistryError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
