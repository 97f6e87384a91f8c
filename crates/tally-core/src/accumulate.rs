//! The accumulation function seam and the accumulator loop.

/// A two-argument accumulation function threaded through the benchmark loop.
///
/// Each loop step replaces the accumulator with `calc(counter, counter + 1)`.
/// Implementations must be total; the loop has no failure path.
///
/// Any `Fn(u64, u64) -> u64` closure implements this trait, so ad-hoc
/// functions can be passed straight to
/// [`BenchmarkEntry::new`](crate::BenchmarkEntry::new).
pub trait Accumulate {
    /// Combine the current accumulator value `a` with its successor `b`.
    fn calc(&self, a: u64, b: u64) -> u64;
}

impl<F> Accumulate for F
where
    F: Fn(u64, u64) -> u64,
{
    fn calc(&self, a: u64, b: u64) -> u64 {
        self(a, b)
    }
}

/// Returns its second argument: `calc(a, b) = b`.
///
/// Under this function the loop reduces to `counter += 1`, so after `n`
/// iterations the accumulator equals `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TakeSecond;

impl Accumulate for TakeSecond {
    fn calc(&self, _a: u64, b: u64) -> u64 {
        b
    }
}

/// Run the accumulator loop `n` times starting from zero and return the
/// final value.
///
/// The successor `counter + 1` wraps at `u64::MAX`.
pub fn accumulate<A: Accumulate + ?Sized>(calc: &A, n: u64) -> u64 {
    let mut counter = 0u64;
    for _ in 0..n {
        counter = calc.calc(counter, counter.wrapping_add(1));
    }
    counter
}
