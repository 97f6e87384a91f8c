//! The parameterised benchmark entry.
//!
//! A [`BenchmarkEntry`] pairs a validated [`BenchConfig`] with an injected
//! [`Accumulate`] function. Each invocation starts a fresh accumulator at
//! zero, so invocations never observe each other.

use std::time::Instant;

use crate::accumulate::{accumulate, Accumulate};
use crate::config::{BenchConfig, Iterations};
use crate::counters::{Counters, UPDATES};
use crate::error::{ConfigError, RunError};

/// Outcome of one invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Named counters; always holds [`UPDATES`].
    pub counters: Counters,
    /// Loop iterations executed.
    pub iterations: u64,
    /// Wall-clock time of the loop, in nanoseconds.
    pub elapsed_ns: u64,
}

impl RunReport {
    /// Final accumulator value.
    pub fn updates(&self) -> u64 {
        self.counters.get(UPDATES).unwrap_or(0)
    }
}

/// A named benchmark case driving one accumulation function.
pub struct BenchmarkEntry<A> {
    config: BenchConfig,
    calc: A,
}

impl<A: Accumulate> BenchmarkEntry<A> {
    /// Validate `config` and bind it to `calc`.
    pub fn new(config: BenchConfig, calc: A) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, calc })
    }

    /// The entry's configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// The entry's name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The injected accumulation function.
    pub fn calc(&self) -> &A {
        &self.calc
    }

    /// One invocation with an explicit loop bound.
    pub fn run_iterations(&self, n: u64) -> RunReport {
        let start = Instant::now();
        let value = accumulate(&self.calc, n);
        let elapsed_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

        let mut counters = Counters::new();
        counters.set(UPDATES, value);
        RunReport {
            counters,
            iterations: n,
            elapsed_ns,
        }
    }

    /// One invocation with the configured fixed loop bound.
    pub fn run_once(&self) -> Result<RunReport, RunError> {
        match self.config.iterations {
            Iterations::Fixed(n) => Ok(self.run_iterations(n)),
            Iterations::Harness => Err(RunError::HarnessDriven {
                name: self.config.name.clone(),
            }),
        }
    }

    /// `repetitions` independent invocations, in order.
    pub fn run(&self) -> Result<Vec<RunReport>, RunError> {
        (0..self.config.repetitions)
            .map(|_| self.run_once())
            .collect()
    }
}

impl<A> std::fmt::Debug for BenchmarkEntry<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkEntry")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulate::TakeSecond;
    use crate::config::TimeUnit;

    fn entry(iterations: Iterations) -> BenchmarkEntry<TakeSecond> {
        let config = BenchConfig {
            iterations,
            ..BenchConfig::default()
        };
        BenchmarkEntry::new(config, TakeSecond).unwrap()
    }

    #[test]
    fn hundred_iterations_report_hundred_updates() {
        let report = entry(Iterations::Fixed(100)).run_once().unwrap();
        assert_eq!(report.updates(), 100);
        assert_eq!(report.iterations, 100);
        assert_eq!(report.counters.get(UPDATES), Some(100));
    }

    #[test]
    fn zero_iterations_report_zero_updates() {
        let report = entry(Iterations::Fixed(0)).run_once().unwrap();
        assert_eq!(report.updates(), 0);
        assert_eq!(report.counters.len(), 1);
    }

    #[test]
    fn invocations_do_not_share_state() {
        let e = entry(Iterations::Fixed(42));
        let a = e.run_once().unwrap();
        let b = e.run_once().unwrap();
        assert_eq!(a.counters, b.counters);
    }

    #[test]
    fn harness_entry_cannot_run_standalone() {
        let e = entry(Iterations::Harness);
        assert_eq!(
            e.run_once(),
            Err(RunError::HarnessDriven {
                name: "bm_book".into()
            })
        );
        assert_eq!(e.run_iterations(9).updates(), 9);
    }

    #[test]
    fn run_repeats_configured_times() {
        let config = BenchConfig {
            iterations: Iterations::Fixed(10),
            repetitions: 3,
            unit: TimeUnit::Microsecond,
            ..BenchConfig::default()
        };
        let e = BenchmarkEntry::new(config, TakeSecond).unwrap();
        let reports = e.run().unwrap();
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r.updates() == 10));
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = BenchConfig::named("");
        assert_eq!(
            BenchmarkEntry::new(config, TakeSecond).unwrap_err(),
            ConfigError::EmptyName
        );
    }

    #[test]
    fn closure_entry() {
        let config = BenchConfig::named("triple");
        let e = BenchmarkEntry::new(config, |a: u64, _b: u64| a + 3).unwrap();
        assert_eq!(e.name(), "triple");
        assert_eq!(e.run_once().unwrap().updates(), 300);
    }
}
