//! Splitting a sequence into contiguous, near-equal chunks.
//!
//! The chunk count is `max(4, ceil(sqrt(n)))`. Sizes differ by at most one:
//! the first `n % k` chunks receive one extra element. Chunks that would be
//! empty (only possible when `n < k`) are dropped.
//!
//! Chunks are produced with `split_at_mut`, so each one is a mutable view into
//! the caller's storage. Sorting a chunk in place therefore sorts that region
//! of the original sequence.

/// Lower bound on the number of chunks a sequence is split into.
pub const MIN_CHUNKS: usize = 4;

/// Number of chunks requested for a sequence of `n` elements.
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::chunk_count;
///
/// assert_eq!(chunk_count(0), 4);
/// assert_eq!(chunk_count(10), 4);
/// assert_eq!(chunk_count(17), 5);
/// assert_eq!(chunk_count(1000), 32);
/// ```
#[must_use]
pub fn chunk_count(n: usize) -> usize {
    ceil_sqrt(n).max(MIN_CHUNKS)
}

/// Sizes of the non-empty chunks for a sequence of `n` elements, in order.
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::chunk_sizes;
///
/// assert_eq!(chunk_sizes(10), vec![3, 3, 2, 2]);
/// assert_eq!(chunk_sizes(2), vec![1, 1]);
/// assert!(chunk_sizes(0).is_empty());
/// ```
#[must_use]
pub fn chunk_sizes(n: usize) -> Vec<usize> {
    let k = chunk_count(n);
    let base = n / k;
    let extra = n % k;

    (0..k).map(|i| if i < extra { base + 1 } else { base }).filter(|&size| size > 0).collect()
}

/// Split `sequence` into its chunk set.
///
/// The returned slices cover `sequence` exactly, in order, without overlap.
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::partition;
///
/// let mut values = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
/// let chunks = partition(&mut values);
/// let lengths: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
/// assert_eq!(lengths, vec![3, 3, 2, 2]);
/// ```
pub fn partition<T>(sequence: &mut [T]) -> Vec<&mut [T]> {
    let sizes = chunk_sizes(sequence.len());
    let mut chunks = Vec::with_capacity(sizes.len());
    let mut rest = sequence;

    for size in sizes {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(size);
        chunks.push(head);
        rest = tail;
    }

    debug_assert!(rest.is_empty(), "chunk sizes must cover the whole sequence");
    chunks
}

/// Smallest `r` with `r * r >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let root = n.isqrt();
    if root * root < n { root + 1 } else { root }
}
