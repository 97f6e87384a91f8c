//! Tally: a parameterised accumulator-loop microbenchmark scaffold.
//!
//! This is the top-level facade crate that re-exports the public API of
//! `tally-core`. Criterion wiring lives in the `tally-bench` crate.
//!
//! # Quick start
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let config = BenchConfig {
//!     iterations: Iterations::Fixed(100),
//!     ..BenchConfig::named("bm_book")
//! };
//! let entry = BenchmarkEntry::new(config, TakeSecond).unwrap();
//! let report = entry.run_once().unwrap();
//! assert_eq!(report.counters.get(UPDATES), Some(100));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Accumulator loop, configuration, counters, and registry (`tally-core`).
pub use tally_core as types;

/// Common imports for typical Tally usage.
///
/// ```rust
/// use tally::prelude::*;
/// ```
pub mod prelude {
    pub use tally_core::{
        accumulate, Accumulate, BenchConfig, BenchmarkEntry, Counters, Iterations, Registry,
        RunReport, TakeSecond, TimeUnit, UPDATES,
    };

    // Errors
    pub use tally_core::{ConfigError, RegistryError, RunError};
}
