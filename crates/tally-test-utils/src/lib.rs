//! Test fixtures for Tally development.
//!
//! Accumulation functions with observable side effects, for checking how
//! many times and with which arguments the loop calls `calc`:
//!
//! - [`CountingCalc`] — behaves like `calc(a, b) = b` and counts calls.
//! - [`RecordingCalc`] — behaves like `calc(a, b) = b` and records arguments.
//! - [`ConstCalc`] — always returns the same value.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tally_core::{Accumulate, BenchConfig, BenchmarkEntry, Iterations};

/// Returns its second argument and counts how often it was called.
///
/// Uses `AtomicUsize` so the fixture can be shared by reference; wrap it
/// in a closure (`|a, b| counting.calc(a, b)`) to keep it observable
/// after handing it to an entry.
#[derive(Default)]
pub struct CountingCalc {
    calls: AtomicUsize,
}

impl CountingCalc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Accumulate for CountingCalc {
    fn calc(&self, _a: u64, b: u64) -> u64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        b
    }
}

/// Returns its second argument and records every `(a, b)` pair.
#[derive(Default)]
pub struct RecordingCalc {
    calls: Mutex<Vec<(u64, u64)>>,
}

impl RecordingCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded argument pairs in call order.
    pub fn calls(&self) -> Vec<(u64, u64)> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Accumulate for RecordingCalc {
    fn calc(&self, a: u64, b: u64) -> u64 {
        match self.calls.lock() {
            Ok(mut calls) => calls.push((a, b)),
            Err(poisoned) => poisoned.into_inner().push((a, b)),
        }
        b
    }
}

/// Always returns `value`, ignoring both arguments.
#[derive(Clone, Copy, Debug)]
pub struct ConstCalc {
    pub value: u64,
}

impl ConstCalc {
    pub fn new(value: u64) -> Self {
        Self { value }
    }
}

impl Accumulate for ConstCalc {
    fn calc(&self, _a: u64, _b: u64) -> u64 {
        self.value
    }
}

/// Build a fixed-count entry named `name` around `calc`.
///
/// Panics if the resulting config is invalid; intended for tests only.
pub fn fixed_entry<A: Accumulate>(name: &str, n: u64, calc: A) -> BenchmarkEntry<A> {
    let config = BenchConfig {
        iterations: Iterations::Fixed(n),
        ..BenchConfig::named(name)
    };
    BenchmarkEntry::new(config, calc).expect("test config should be valid")
}
