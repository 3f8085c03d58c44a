//! Partition, parallel sort, and merge composed into one call.
//!
//! [`ChunkSorter`] owns the knobs (thread pool, merge strategy) and exposes
//! [`ChunkSorter::process`], a pure function of its input. Independent calls
//! share nothing, so one sorter may be used from many threads at once.

use log::debug;

use crate::errors::{ChunksortError, Result};
use crate::sort::merge::{MergeStrategy, merge_with};
use crate::sort::parallel::sort_all;
use crate::sort::partition::partition;

/// Sorts sequences with the chunk / parallel sort / k-way merge pipeline.
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::{ChunkSorter, MergeStrategy};
///
/// # fn main() -> chunksort_lib::errors::Result<()> {
/// let sorter = ChunkSorter::new().threads(2)?.merge_strategy(MergeStrategy::Heap);
/// assert_eq!(sorter.process(vec![3, -1, 2, 2, 0]), vec![-1, 0, 2, 2, 3]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ChunkSorter {
    /// Merge strategy for the final phase.
    merge_strategy: MergeStrategy,
    /// Dedicated pool for chunk sorting; `None` uses rayon's global pool.
    pool: Option<rayon::ThreadPool>,
}

/// Intermediate state captured by [`ChunkSorter::process_with_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport<T> {
    /// Chunks as partitioned, before sorting.
    pub chunks_before: Vec<Vec<T>>,
    /// The same chunks after the parallel sort.
    pub chunks_after: Vec<Vec<T>>,
    /// Final merged sequence.
    pub output: Vec<T>,
}

impl ChunkSorter {
    /// Create a sorter using the global rayon pool and linear-scan merge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort chunks on a dedicated pool with exactly `threads` workers.
    pub fn threads(mut self, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(ChunksortError::InvalidParameter {
                parameter: "threads".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("chunksort-{i}"))
            .build()?;
        self.pool = Some(pool);
        Ok(self)
    }

    /// Set the merge strategy.
    #[must_use]
    pub fn merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    /// The configured merge strategy.
    #[must_use]
    pub fn strategy(&self) -> MergeStrategy {
        self.merge_strategy
    }

    /// Number of worker threads chunk sorting will use.
    #[must_use]
    pub fn num_threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, rayon::ThreadPool::current_num_threads)
    }

    /// Sort `sequence` and return the merged result.
    pub fn process<T: Ord + Copy + Send>(&self, mut sequence: Vec<T>) -> Vec<T> {
        let len = sequence.len();
        let mut chunks = partition(&mut sequence);
        debug!("Partitioned {len} values into {} chunks", chunks.len());

        self.sort_chunks(&mut chunks);
        self.merge_chunks(&chunks)
    }

    /// Like [`process`](Self::process), also capturing the chunks before and
    /// after sorting.
    pub fn process_with_report<T: Ord + Copy + Send>(
        &self,
        mut sequence: Vec<T>,
    ) -> PipelineReport<T> {
        let mut chunks = partition(&mut sequence);
        let chunks_before = snapshot(&chunks);

        self.sort_chunks(&mut chunks);
        let chunks_after = snapshot(&chunks);

        let output = self.merge_chunks(&chunks);
        PipelineReport { chunks_before, chunks_after, output }
    }

    fn sort_chunks<T: Ord + Send>(&self, chunks: &mut [&mut [T]]) {
        match &self.pool {
            Some(pool) => pool.install(|| sort_all(chunks)),
            None => sort_all(chunks),
        }
    }

    fn merge_chunks<T: Ord + Copy>(&self, chunks: &[&mut [T]]) -> Vec<T> {
        debug!("Merging {} chunks with {} strategy", chunks.len(), self.merge_strategy);
        let views: Vec<&[T]> = chunks.iter().map(|c| &**c).collect();
        merge_with(self.merge_strategy, &views)
    }
}

/// Sort `sequence` with a default [`ChunkSorter`].
///
/// # Examples
///
/// ```
/// use chunksort_lib::sort::process;
///
/// assert_eq!(process(vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0]), (0..10).collect::<Vec<_>>());
/// assert!(process(Vec::<i64>::new()).is_empty());
/// ```
pub fn process<T: Ord + Copy + Send>(sequence: Vec<T>) -> Vec<T> {
    ChunkSorter::new().process(sequence)
}

fn snapshot<T: Copy>(chunks: &[&mut [T]]) -> Vec<Vec<T>> {
    chunks.iter().map(|c| c.to_vec()).collect()
}
