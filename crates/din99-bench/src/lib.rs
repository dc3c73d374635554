//! Benchmark support for the DIN99 crates.
//!
//! The benchmarks live in `benches/din99_bench.rs`. Run with `cargo bench`.

use din99_core::Triple;

/// Deterministic Lab samples spread over the usual gamut.
pub fn lab_samples(n: usize) -> Vec<Triple> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n.max(1) as f64;
            [100.0 * t, 120.0 * (t * 7.0).sin(), 120.0 * (t * 11.0).cos()]
        })
        .collect()
}
