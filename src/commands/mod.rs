//! CLI command implementations for chunksort.
//!
//! Each submodule implements one input mode. All of them hand their sequence
//! to the same [`ChunkSorter`](chunksort_lib::sort::ChunkSorter) pipeline.
//!
//! - [`random`] - Sort freshly generated random values and print the steps
//! - [`file`] - Sort the integers in one file and print the steps
//! - [`dir`] - Sort every matching file in a directory into an output directory

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod command;
pub mod common;
pub mod dir;
pub mod file;
pub mod random;
