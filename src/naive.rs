//! Straightforward series generator
//!
//! The obvious loop: keep the last two terms in running values and clone
//! each new term into the output. Baseline for the benchmark harness.

use num_bigint::BigUint;

use crate::SeriesGenerator;

/// Running-value generator with a clone per appended term
pub struct NaiveSeries;

impl SeriesGenerator for NaiveSeries {
    fn series(&self, n: i64) -> Vec<BigUint> {
        let mut a = BigUint::from(1u8);
        let mut b = BigUint::from(1u8);
        let mut fib = Vec::new();
        fib.push(a.clone());
        fib.push(b.clone());
        let mut i = 0;
        while i < n {
            let c = &a + &b;
            fib.push(c.clone());
            a = b;
            b = c;
            i += 1;
        }
        fib
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}
