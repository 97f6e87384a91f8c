//! Named collection of benchmark entries.
//!
//! Entries are kept in registration order and erased to a common
//! accumulation-function type so a single registry can hold closures and
//! named function types side by side.

use indexmap::IndexMap;

use crate::accumulate::Accumulate;
use crate::config::{BenchConfig, Iterations};
use crate::entry::{BenchmarkEntry, RunReport};
use crate::error::{RegistryError, RunError};

/// Type-erased accumulation function held by a [`Registry`].
pub type BoxedCalc = Box<dyn Fn(u64, u64) -> u64>;

/// Benchmark entries keyed by unique name.
#[derive(Default)]
pub struct Registry {
    entries: IndexMap<String, BenchmarkEntry<BoxedCalc>>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `config` and register it with `calc`.
    ///
    /// Fails if the config is invalid or the name is already taken; the
    /// registry is unchanged on failure.
    pub fn register<A>(&mut self, config: BenchConfig, calc: A) -> Result<(), RegistryError>
    where
        A: Accumulate + 'static,
    {
        if self.entries.contains_key(&config.name) {
            return Err(RegistryError::DuplicateName { name: config.name });
        }
        let boxed: BoxedCalc = Box::new(move |a, b| calc.calc(a, b));
        let entry = BenchmarkEntry::new(config, boxed)?;
        self.entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    /// Entry registered under `name`.
    pub fn get(&self, name: &str) -> Option<&BenchmarkEntry<BoxedCalc>> {
        self.entries.get(name)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkEntry<BoxedCalc>> + '_ {
        self.entries.values()
    }

    /// Run every fixed-count entry standalone, in registration order.
    ///
    /// Harness-driven entries are skipped; they only run under a harness.
    /// Any failure of a fixed-count entry stops the run and is returned.
    pub fn run_all(&self) -> Result<Vec<(String, Vec<RunReport>)>, RunError> {
        let mut out = Vec::with_capacity(self.entries.len());
        for entry in self.entries.values() {
            if entry.config().iterations == Iterations::Harness {
                continue;
            }
            out.push((entry.name().to_string(), entry.run()?));
        }
        Ok(out)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}
