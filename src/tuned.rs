//! Tuned series generator
//!
//! Same output as the naive generator with the avoidable costs removed: the
//! output vector is sized up front and each term is summed by reference
//! from the two already stored before it, so no term is ever cloned.

use num_bigint::BigUint;

use crate::SeriesGenerator;

/// Preallocating generator that sums each term from the stored tail
pub struct TunedSeries;

impl SeriesGenerator for TunedSeries {
    fn series(&self, n: i64) -> Vec<BigUint> {
        let extra = usize::try_from(n).unwrap_or(0);
        let mut fib = Vec::with_capacity(extra + 2);
        fib.push(BigUint::from(1u8));
        fib.push(BigUint::from(1u8));
        for i in 2..extra + 2 {
            let next = &fib[i - 1] + &fib[i - 2];
            fib.push(next);
        }
        fib
    }

    fn name(&self) -> &'static str {
        "tuned"
    }
}
