//! Core types for the Tally benchmark scaffold.
//!
//! This is the leaf crate of the workspace. It defines the accumulator
//! loop that every benchmark entry drives, the configuration that
//! parameterises an entry, the named-counter map an invocation reports
//! into, and the registry that collects entries by name.
//!
//! # Shape of one invocation
//!
//! ```text
//! BenchmarkEntry { config, calc }
//! └── accumulate(calc, n): counter = 0; n × counter = calc(counter, counter + 1)
//!     └── RunReport { counters["updates"] = counter, iterations, elapsed_ns }
//! ```
//!
//! The accumulation function is always injected through [`Accumulate`];
//! this crate never assumes what it computes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accumulate;
pub mod config;
pub mod counters;
pub mod entry;
pub mod error;
pub mod registry;

pub use accumulate::{accumulate, Accumulate, TakeSecond};
pub use config::{BenchConfig, Iterations, TimeUnit, MAX_FIXED_ITERATIONS};
pub use counters::{Counters, UPDATES};
pub use entry::{BenchmarkEntry, RunReport};
pub use error::{ConfigError, RegistryError, RunError};
pub use registry::{BoxedCalc, Registry};
