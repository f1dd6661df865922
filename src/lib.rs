//! Fibonacci Series
//!
//! Generates the series seeded with 1, 1 where every later term is the sum
//! of the two before it. Terms are arbitrary-precision, so the series keeps
//! growing for as long as memory holds out. Two functionally-equivalent
//! generators are provided so the benchmark harness can time one against
//! the other.

pub mod naive;
pub mod tuned;

use num_bigint::BigUint;

use crate::tuned::TunedSeries;

/// Trait for Fibonacci series generators
pub trait SeriesGenerator {
    /// Generate the full series: the seeds 1, 1 followed by `n` further
    /// terms, each the sum of the two preceding terms. A negative `n`
    /// yields just the seeds.
    fn series(&self, n: i64) -> Vec<BigUint>;

    /// Short name used in benchmark report lines
    fn name(&self) -> &'static str;
}

/// Generate the series with the tuned generator. Both generators produce
/// identical output, so this is the one to reach for outside the harness.
pub fn fibonacci_series(n: i64) -> Vec<BigUint> {
    TunedSeries.series(n)
}
