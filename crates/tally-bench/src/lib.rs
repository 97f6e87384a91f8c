//! Criterion wiring for Tally benchmark entries.
//!
//! Criterion drives timing and statistics; this crate feeds it the
//! accumulator loop and reports the `"updates"` counter, which Criterion
//! itself has no place for, as a summary line after each benchmark:
//!
//! - [`bench_entry`]: register one entry with Criterion.
//! - [`bench_registry`]: register every entry of a [`Registry`].
//! - [`measure_iterations`]: one timed invocation, as run inside
//!   `iter_custom` for harness-driven entries.
//! - [`repetition_id`]: the Criterion id of one repetition.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::Criterion;
use tally_core::{
    accumulate, Accumulate, BenchmarkEntry, Counters, Iterations, Registry, RunReport, TimeUnit,
    UPDATES,
};

/// Run the accumulator loop `iters` times and time it.
///
/// The returned duration covers the loop only, not building the report.
pub fn measure_iterations<A: Accumulate>(
    entry: &BenchmarkEntry<A>,
    iters: u64,
) -> (RunReport, Duration) {
    let start = Instant::now();
    let value = black_box(accumulate(entry.calc(), black_box(iters)));
    let elapsed = start.elapsed();
    (build_report(value, iters, elapsed.as_nanos()), elapsed)
}

/// Register `entry` with Criterion and return one report per repetition
/// that actually ran.
///
/// Each of the entry's `repetitions` is a separate Criterion benchmark
/// (see [`repetition_id`]). Harness-driven entries let Criterion pick the
/// loop bound, so `"updates"` ends up equal to Criterion's final iteration
/// count under `calc(a, b) = b`. Fixed entries run the whole fixed loop
/// per Criterion iteration. Repetitions Criterion skips, e.g. because a
/// filter excludes them, produce no report and no summary line.
pub fn bench_entry<A: Accumulate>(c: &mut Criterion, entry: &BenchmarkEntry<A>) -> Vec<RunReport> {
    let repetitions = entry.config().repetitions;
    let mut reports = Vec::with_capacity(repetitions as usize);
    for rep in 0..repetitions {
        let id = repetition_id(entry.name(), rep, repetitions);
        if let Some(report) = bench_repetition(c, entry, &id) {
            println!("{}", format_summary(&id, &report, entry.config().unit));
            reports.push(report);
        }
    }
    reports
}

/// Register every entry in `registry`, in registration order.
///
/// Entries with no repetition run are still listed, with no reports.
pub fn bench_registry(c: &mut Criterion, registry: &Registry) -> Vec<(String, Vec<RunReport>)> {
    registry
        .iter()
        .map(|entry| (entry.name().to_string(), bench_entry(c, entry)))
        .collect()
}

/// Criterion benchmark id for repetition `rep` of `repetitions`.
///
/// A single repetition keeps the bare name; otherwise `{name}/rep{rep}`.
pub fn repetition_id(name: &str, rep: u32, repetitions: u32) -> String {
    if repetitions == 1 {
        name.to_string()
    } else {
        format!("{name}/rep{rep}")
    }
}

/// One-line summary: name, every counter, iteration count, and loop time
/// in `unit`.
pub fn format_summary(name: &str, report: &RunReport, unit: TimeUnit) -> String {
    let mut line = name.to_string();
    for (counter, value) in report.counters.iter() {
        line.push_str(&format!(" {counter}={value}"));
    }
    line.push_str(&format!(
        " iterations={} time={:.3}{}",
        report.iterations,
        unit.scale_ns(report.elapsed_ns as f64),
        unit.suffix()
    ));
    line
}

fn bench_repetition<A: Accumulate>(
    c: &mut Criterion,
    entry: &BenchmarkEntry<A>,
    id: &str,
) -> Option<RunReport> {
    let mut last = None;
    match entry.config().iterations {
        Iterations::Harness => {
            c.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let (report, elapsed) = measure_iterations(entry, iters);
                    last = Some(report);
                    elapsed
                });
            });
        }
        Iterations::Fixed(n) => {
            c.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut value = 0;
                    let start = Instant::now();
                    for _ in 0..iters {
                        value = black_box(accumulate(entry.calc(), black_box(n)));
                    }
                    let elapsed = start.elapsed();
                    let per_invocation = elapsed.as_nanos() / u128::from(iters.max(1));
                    last = Some(build_report(value, n, per_invocation));
                    elapsed
                });
            });
        }
    }
    last
}

fn build_report(value: u64, iterations: u64, elapsed_ns: u128) -> RunReport {
    let mut counters = Counters::new();
    counters.set(UPDATES, value);
    RunReport {
        counters,
        iterations,
        elapsed_ns: u64::try_from(elapsed_ns).unwrap_or(u64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{BenchConfig, TakeSecond};
    use tally_test_utils::{fixed_entry, CountingCalc};

    fn quick_criterion() -> Criterion {
        Criterion::default()
            .sample_size(10)
            .warm_up_time(Duration::from_millis(20))
            .measurement_time(Duration::from_millis(50))
            .without_plots()
    }

    fn harness_config(name: &str, repetitions: u32) -> BenchConfig {
        BenchConfig {
            iterations: Iterations::Harness,
            repetitions,
            ..BenchConfig::named(name)
        }
    }

    #[test]
    fn measured_invocation_counts_iterations() {
        let entry = fixed_entry("bm_book", 100, TakeSecond);
        let (report, _) = measure_iterations(&entry, 250);
        assert_eq!(report.updates(), 250);
        assert_eq!(report.iterations, 250);
    }

    #[test]
    fn measured_invocation_calls_calc_once_per_iteration() {
        let counting = CountingCalc::new();
        let entry = fixed_entry("counted", 0, |a: u64, b: u64| counting.calc(a, b));
        measure_iterations(&entry, 37);
        assert_eq!(counting.calls(), 37);
    }

    #[test]
    fn harness_entry_counts_criterion_iterations() {
        let entry = BenchmarkEntry::new(harness_config("tb_harness", 1), TakeSecond).unwrap();
        let reports = bench_entry(&mut quick_criterion(), &entry);

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert!(report.iterations > 0);
        assert_eq!(report.updates(), report.iterations);
    }

    #[test]
    fn fixed_entry_reports_fixed_bound() {
        let entry = fixed_entry("tb_fixed", 100, TakeSecond);
        let reports = bench_entry(&mut quick_criterion(), &entry);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].updates(), 100);
        assert_eq!(reports[0].iterations, 100);
    }

    #[test]
    fn filtered_out_entry_reports_nothing() {
        let entry = BenchmarkEntry::new(harness_config("tb_skipped", 1), TakeSecond).unwrap();
        let mut c = quick_criterion().with_filter("no_such_benchmark");
        assert!(bench_entry(&mut c, &entry).is_empty());
    }

    #[test]
    fn filtered_out_fixed_entry_never_calls_calc() {
        let counting = CountingCalc::new();
        let entry = fixed_entry("tb_skipped_fixed", 100, |a: u64, b: u64| {
            counting.calc(a, b)
        });
        let mut c = quick_criterion().with_filter("no_such_benchmark");
        assert!(bench_entry(&mut c, &entry).is_empty());
        assert_eq!(counting.calls(), 0);
    }

    #[test]
    fn each_repetition_is_a_separate_benchmark() {
        let entry = BenchmarkEntry::new(harness_config("tb_reps", 3), TakeSecond).unwrap();
        let reports = bench_entry(&mut quick_criterion(), &entry);

        assert_eq!(reports.len(), 3);
        for report in &reports {
            assert!(report.iterations > 0);
            assert_eq!(report.updates(), report.iterations);
        }
    }

    #[test]
    fn filter_selects_single_repetition() {
        let entry = BenchmarkEntry::new(harness_config("tb_pick", 3), TakeSecond).unwrap();
        let mut c = quick_criterion().with_filter("tb_pick/rep1");
        assert_eq!(bench_entry(&mut c, &entry).len(), 1);
    }

    #[test]
    fn registry_reports_per_entry() {
        let mut registry = Registry::new();
        registry
            .register(
                BenchConfig {
                    repetitions: 2,
                    ..BenchConfig::named("tb_reg_fixed")
                },
                TakeSecond,
            )
            .unwrap();
        registry
            .register(harness_config("tb_reg_harness", 1), TakeSecond)
            .unwrap();

        let results = bench_registry(&mut quick_criterion(), &registry);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "tb_reg_fixed");
        assert_eq!(results[0].1.len(), 2);
        assert!(results[0].1.iter().all(|r| r.updates() == 100));
        assert_eq!(results[1].0, "tb_reg_harness");
        assert_eq!(results[1].1.len(), 1);
    }

    #[test]
    fn repetition_ids() {
        assert_eq!(repetition_id("bm_book", 0, 1), "bm_book");
        assert_eq!(repetition_id("bm_book", 2, 3), "bm_book/rep2");
    }

    #[test]
    fn summary_lists_counters_and_scaled_time() {
        let mut counters = Counters::new();
        counters.set(UPDATES, 100);
        let report = RunReport {
            counters,
            iterations: 100,
            elapsed_ns: 1_500_000,
        };
        assert_eq!(
            format_summary("bm_book", &report, TimeUnit::Millisecond),
            "bm_book updates=100 iterations=100 time=1.500ms"
        );
    }

    #[test]
    fn summary_keeps_sub_microsecond_loops_visible() {
        let report = build_report(100, 100, 250);
        assert_eq!(
            format_summary("bm_book", &report, TimeUnit::Microsecond),
            "bm_book updates=100 iterations=100 time=0.250us"
        );
    }
}
