//! Chunked parallel sorting of integer sequences.
//!
//! The pipeline has three phases:
//!
//! 1. **Partition**: split the sequence into `max(4, ceil(sqrt(n)))`
//!    contiguous chunks whose sizes differ by at most one
//! 2. **Sort**: sort every chunk in place, one rayon task per chunk, and join
//! 3. **Merge**: k-way merge of the sorted chunks into a new sequence
//!
//! Chunks are mutable sub-slices of the input, so the sort phase writes
//! directly into the caller's buffer without copying.

pub mod merge;
pub mod parallel;
pub mod partition;
pub mod pipeline;

pub use merge::{MergeStrategy, merge, merge_with};
pub use parallel::sort_all;
pub use partition::{MIN_CHUNKS, chunk_count, chunk_sizes, partition};
pub use pipeline::{ChunkSorter, PipelineReport, process};
