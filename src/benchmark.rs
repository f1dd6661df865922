//! Wall-clock benchmark of the two series generators
//!
//! Times a fixed number of calls to each generator for the requested term
//! count and reports elapsed seconds per generator plus the speedup of the
//! tuned generator over the naive one. A machine-readable JSON summary is
//! printed last.

use fib_series::{naive::NaiveSeries, tuned::TunedSeries, SeriesGenerator};
use num_bigint::BigUint;
use serde::Serialize;
use std::env;
use std::process;
use std::time::Instant;

/// Timed calls per generator
const REPETITIONS: u32 = 1000;

/// Untimed calls per generator before the clock starts
const WARMUP_RUNS: u32 = 10;

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    seconds: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    n: i64,
    repetitions: u32,
    results: Vec<BenchmarkResult>,
    speedup: f64,
    correctness: bool,
}

fn verify_generator<G: SeriesGenerator>(g: &G) -> bool {
    // Known values
    let known: [u64; 12] = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
    let series = g.series(known.len() as i64 - 2);

    series.len() == known.len()
        && series
            .iter()
            .zip(known.iter())
            .all(|(term, &expected)| *term == BigUint::from(expected))
}

fn time_generator<G: SeriesGenerator>(g: &G, n: i64) -> f64 {
    // Warmup
    for _ in 0..WARMUP_RUNS {
        std::hint::black_box(g.series(n));
    }

    let start = Instant::now();
    for _ in 0..REPETITIONS {
        std::hint::black_box(g.series(n));
    }
    start.elapsed().as_secs_f64()
}

fn parse_term_count(arg: &str) -> Result<i64, String> {
    arg.parse()
        .map_err(|e| format!("invalid int argument {:?}: {}", arg, e))
}

fn main() {
    let arg = match env::args().nth(1) {
        Some(arg) => arg,
        None => {
            println!("please pass int argument");
            return;
        }
    };
    let n = match parse_term_count(&arg) {
        Ok(n) => n,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    };

    let naive = NaiveSeries;
    let tuned = TunedSeries;

    // Known-value check per generator, plus agreement on the requested count
    let naive_correct = verify_generator(&naive);
    let tuned_correct = verify_generator(&tuned);
    let agree = naive.series(n) == tuned.series(n);

    let naive_secs = time_generator(&naive, n);
    let tuned_secs = time_generator(&tuned, n);
    let speedup = naive_secs / tuned_secs;

    println!("{} test took {} secs", naive.name(), naive_secs);
    println!("{} test took {} secs", tuned.name(), tuned_secs);
    println!(
        "{} speed up over {} : {} times",
        tuned.name(),
        naive.name(),
        speedup
    );

    let full = FullResults {
        n,
        repetitions: REPETITIONS,
        results: vec![
            BenchmarkResult {
                name: naive.name().into(),
                seconds: naive_secs,
                correct: naive_correct,
            },
            BenchmarkResult {
                name: tuned.name().into(),
                seconds: tuned_secs,
                correct: tuned_correct,
            },
        ],
        speedup,
        correctness: naive_correct && tuned_correct && agree,
    };
    println!("{}", serde_json::to_string(&full).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_term_count() {
        assert_eq!(parse_term_count("30"), Ok(30));
        assert_eq!(parse_term_count("0"), Ok(0));
        assert_eq!(parse_term_count("-3"), Ok(-3));
    }

    #[test]
    fn test_rejects_non_numeric_arguments() {
        let err = parse_term_count("ten").unwrap_err();
        assert!(err.contains("ten"));
        let err = parse_term_count("3.5").unwrap_err();
        assert!(err.contains("3.5"));
    }

    #[test]
    fn test_verify_generators() {
        assert!(verify_generator(&NaiveSeries));
        assert!(verify_generator(&TunedSeries));
    }

    #[test]
    fn test_time_generator() {
        // Timing a tiny count returns a finite, non-negative duration
        let secs = time_generator(&TunedSeries, 3);
        assert!(secs.is_finite());
        assert!(secs >= 0.0);
    }
}
