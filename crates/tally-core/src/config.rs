//! Benchmark entry configuration and validation.
//!
//! [`BenchConfig`] is the builder-input for a
//! [`BenchmarkEntry`](crate::BenchmarkEntry). [`validate()`](BenchConfig::validate)
//! checks its invariants once, at construction; nothing is re-checked
//! inside the loop.

use crate::error::ConfigError;

/// Largest accepted fixed iteration count.
pub const MAX_FIXED_ITERATIONS: u64 = 1_000_000_000;

// ── Iterations ─────────────────────────────────────────────────────

/// Where an entry's loop bound comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Iterations {
    /// A compile-time-style constant loop bound.
    Fixed(u64),
    /// The harness's self-calibrating iteration count.
    Harness,
}

impl Iterations {
    /// The fixed loop bound, or `None` when the harness decides.
    pub fn fixed(&self) -> Option<u64> {
        match self {
            Self::Fixed(n) => Some(*n),
            Self::Harness => None,
        }
    }
}

impl Default for Iterations {
    fn default() -> Self {
        Self::Fixed(100)
    }
}

// ── TimeUnit ───────────────────────────────────────────────────────

/// Display unit for reported timings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeUnit {
    /// Nanoseconds.
    Nanosecond,
    /// Microseconds.
    Microsecond,
    /// Milliseconds.
    #[default]
    Millisecond,
    /// Seconds.
    Second,
}

impl TimeUnit {
    /// Convert a duration in nanoseconds into this unit.
    pub fn scale_ns(&self, ns: f64) -> f64 {
        match self {
            Self::Nanosecond => ns,
            Self::Microsecond => ns / 1_000.0,
            Self::Millisecond => ns / 1_000_000.0,
            Self::Second => ns / 1_000_000_000.0,
        }
    }

    /// Short suffix used when printing values in this unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Nanosecond => "ns",
            Self::Microsecond => "us",
            Self::Millisecond => "ms",
            Self::Second => "s",
        }
    }
}

// ── BenchConfig ────────────────────────────────────────────────────

/// Configuration for one benchmark entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Registration name. Must be non-empty and unique within a
    /// [`Registry`](crate::Registry).
    pub name: String,
    /// Loop bound. Default: `Fixed(100)`.
    pub iterations: Iterations,
    /// Number of independent invocations per run. Default: 1.
    pub repetitions: u32,
    /// Unit for printed timings. Default: milliseconds.
    pub unit: TimeUnit,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            name: "bm_book".to_string(),
            iterations: Iterations::default(),
            repetitions: 1,
            unit: TimeUnit::default(),
        }
    }
}

impl BenchConfig {
    /// Config with the given name and defaults for everything else.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.repetitions == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        if let Iterations::Fixed(n) = self.iterations {
            if n > MAX_FIXED_ITERATIONS {
                return Err(ConfigError::TooManyIterations {
                    configured: n,
                    max: MAX_FIXED_ITERATIONS,
                });
            }
        }
        Ok(())
    }
}
