//! Fork-join sorting of a chunk set.
//!
//! Every chunk becomes its own rayon task and is sorted in place. The call
//! returns only after all tasks have finished. Chunks are disjoint mutable
//! slices, so tasks share no writable state and take no locks.
//!
//! If a task panics, rayon re-raises the panic on the calling thread once the
//! join completes, so a failed chunk sort never yields a partial result.

use rayon::prelude::*;

/// Sort each chunk ascending, in place, one concurrent task per chunk.
///
/// Runs on whatever rayon pool is current: the global pool by default, or a
/// dedicated pool when called inside [`rayon::ThreadPool::install`].
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::{partition, sort_all};
///
/// let mut values = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
/// let mut chunks = partition(&mut values);
/// sort_all(&mut chunks);
/// assert_eq!(&*chunks[0], &[7, 8, 9]);
/// ```
pub fn sort_all<T: Ord + Send>(chunks: &mut [&mut [T]]) {
    chunks.par_iter_mut().with_max_len(1).for_each(|chunk| chunk.sort_unstable());
}
