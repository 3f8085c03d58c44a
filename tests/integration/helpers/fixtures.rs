//! Input fixtures: seeded random sequences and integer files.

#![allow(dead_code)]

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `count` values drawn uniformly from `lo..=hi` with a fixed seed.
pub fn seeded_values(seed: u64, count: usize, lo: i64, hi: i64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(lo..=hi)).collect()
}

/// Write `values` to `path`, one per line.
pub fn write_lines(path: &Path, values: &[i64]) {
    let text: String = values.iter().map(|v| format!("{v}\n")).collect();
    std::fs::write(path, text).unwrap();
}

/// Read a one-integer-per-line file written by the batch sink.
pub fn read_lines(path: &Path) -> Vec<i64> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| line.parse().unwrap())
        .collect()
}
