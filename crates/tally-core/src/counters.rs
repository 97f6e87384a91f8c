//! Named counters reported by a benchmark invocation.

use indexmap::IndexMap;

/// Name of the counter holding the final accumulator value.
pub const UPDATES: &str = "updates";

/// Insertion-ordered map of named numeric observations.
///
/// Setting an existing name overwrites its value in place; iteration
/// follows first-insertion order so printed reports are stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    values: IndexMap<String, u64>,
}

impl Counters {
    /// Empty counter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: u64) {
        self.values.insert(name.into(), value);
    }

    /// Value recorded under `name`, if any.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.values.get(name).copied()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no counter has been recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(name, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
