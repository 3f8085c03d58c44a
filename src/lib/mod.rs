#![deny(unsafe_code)]
// Clippy lint configuration for CI
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]

//! # chunksort - chunked parallel integer sorting
//!
//! This library sorts integer sequences with a three-phase pipeline: the
//! sequence is split into `max(4, ceil(sqrt(n)))` contiguous chunks, every
//! chunk is sorted in place on its own rayon task, and the sorted chunks are
//! k-way merged into a new sequence.
//!
//! ## Overview
//!
//! ### Core
//!
//! - **[`sort`]** - Partitioning, parallel chunk sorting, k-way merging and the
//!   [`ChunkSorter`](sort::ChunkSorter) that composes them
//!
//! ### Sources and sinks
//!
//! - **[`random`]** - Seeded or entropy-backed random sequence generation
//! - **[`input`]** - Reading one-integer-per-line text files
//! - **[`output`]** - Console reports and atomic one-integer-per-line file writes
//! - **[`batch`]** - Sorting every matching file in a directory
//!
//! ### Utilities
//!
//! - **[`errors`]** - Structured error type shared by all modules
//! - **[`validation`]** - Parameter and path validation
//! - **[`logging`]** - Operation timing and summary logging
//!
//! ## Quick Start
//!
//! ```
//! use chunksort_lib::sort::process;
//!
//! let sorted = process(vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0]);
//! assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```
//!
//! ### Configuring the sorter
//!
//! ```
//! use chunksort_lib::random::{create_rng, generate_random};
//! use chunksort_lib::sort::{ChunkSorter, MergeStrategy};
//!
//! # fn main() -> chunksort_lib::errors::Result<()> {
//! let mut rng = create_rng(Some(42));
//! let values = generate_random(&mut rng, 1000)?;
//!
//! let sorter = ChunkSorter::new().threads(4)?.merge_strategy(MergeStrategy::Heap);
//! let sorted = sorter.process(values.clone());
//!
//! assert_eq!(sorted.len(), values.len());
//! assert!(sorted.is_sorted());
//! # Ok(())
//! # }
//! ```
//!
//! ### Sorting a directory of files
//!
//! ```no_run
//! use chunksort_lib::batch::BatchSorter;
//! use chunksort_lib::sort::ChunkSorter;
//! use std::path::Path;
//!
//! # fn main() -> chunksort_lib::errors::Result<()> {
//! let sorter = ChunkSorter::new();
//! let stats = BatchSorter::new(&sorter).run(Path::new("numbers"))?;
//! println!("sorted {} files into numbers_sorted/", stats.files_sorted);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod errors;
pub mod input;
pub mod logging;
pub mod output;
pub mod random;
pub mod sort;
pub mod validation;

pub use errors::{ChunksortError, Result};
pub use sort::{ChunkSorter, MergeStrategy, process};
