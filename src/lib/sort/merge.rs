//! K-way merge of sorted chunks.
//!
//! Two strategies produce the same output:
//!
//! - **Linear scan** (default): at each step, scan every chunk's cursor and
//!   take the smallest head. O(n·k), with k ≈ sqrt(n) in practice.
//! - **Heap**: keep one entry per non-exhausted chunk in a min-heap.
//!   O(n log k).
//!
//! Ties between equal heads always go to the chunk with the lower index. The
//! heap strategy keys entries by `(value, chunk_idx)` to get the same order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

/// How sorted chunks are combined into the final sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// Repeated linear scan for the minimum head across all cursors.
    #[default]
    LinearScan,
    /// Binary min-heap keyed by head value, then chunk index.
    Heap,
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinearScan => write!(f, "linear-scan"),
            Self::Heap => write!(f, "heap"),
        }
    }
}

/// Merge sorted chunks with the default [`MergeStrategy::LinearScan`].
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::merge;
///
/// let a = [1, 4, 7];
/// let b = [2, 5];
/// let c = [0, 3, 6];
/// assert_eq!(merge(&[&a[..], &b[..], &c[..]]), vec![0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
#[must_use]
pub fn merge<T: Ord + Copy>(chunks: &[&[T]]) -> Vec<T> {
    merge_with(MergeStrategy::LinearScan, chunks)
}

/// Merge sorted chunks with an explicit strategy.
///
/// Zero chunks give an empty sequence and a single chunk is returned as-is.
#[must_use]
pub fn merge_with<T: Ord + Copy>(strategy: MergeStrategy, chunks: &[&[T]]) -> Vec<T> {
    match chunks {
        [] => Vec::new(),
        [only] => only.to_vec(),
        _ => match strategy {
            MergeStrategy::LinearScan => linear_scan_merge(chunks),
            MergeStrategy::Heap => heap_merge(chunks),
        },
    }
}

fn linear_scan_merge<T: Ord + Copy>(chunks: &[&[T]]) -> Vec<T> {
    let total: usize = chunks.iter().map(|c| c.len()).sum();
    let mut merged = Vec::with_capacity(total);
    let mut cursors = vec![0usize; chunks.len()];

    loop {
        let mut best: Option<(usize, T)> = None;

        for (idx, chunk) in chunks.iter().enumerate() {
            let Some(&head) = chunk.get(cursors[idx]) else {
                continue;
            };
            // Strict comparison keeps the earliest chunk on ties.
            if best.is_none_or(|(_, min)| head < min) {
                best = Some((idx, head));
            }
        }

        let Some((idx, value)) = best else {
            break;
        };
        merged.push(value);
        cursors[idx] += 1;
    }

    debug_assert_eq!(merged.len(), total);
    merged
}

fn heap_merge<T: Ord + Copy>(chunks: &[&[T]]) -> Vec<T> {
    let total: usize = chunks.iter().map(|c| c.len()).sum();
    let mut merged = Vec::with_capacity(total);
    let mut cursors = vec![0usize; chunks.len()];

    let mut heap: BinaryHeap<Reverse<(T, usize)>> = BinaryHeap::with_capacity(chunks.len());
    for (idx, chunk) in chunks.iter().enumerate() {
        if let Some(&head) = chunk.first() {
            heap.push(Reverse((head, idx)));
        }
    }

    while let Some(Reverse((value, idx))) = heap.pop() {
        merged.push(value);
        cursors[idx] += 1;
        if let Some(&next) = chunks[idx].get(cursors[idx]) {
            heap.push(Reverse((next, idx)));
        }
    }

    debug_assert_eq!(merged.len(), total);
    merged
}
