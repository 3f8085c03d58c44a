//! Common CLI options shared across commands.
//!
//! This module provides shared argument structures that can be composed into
//! command structs using `#[command(flatten)]`, plus the console sink used by
//! the interactive modes.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::info;

use chunksort_lib::logging::OperationTimer;
use chunksort_lib::output::write_report;
use chunksort_lib::sort::{ChunkSorter, MergeStrategy};

/// Merge strategy for combining sorted chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MergeStrategyArg {
    /// Scan every chunk head for the minimum at each step
    #[default]
    LinearScan,
    /// Min-heap over chunk heads
    Heap,
}

impl From<MergeStrategyArg> for MergeStrategy {
    fn from(arg: MergeStrategyArg) -> Self {
        match arg {
            MergeStrategyArg::LinearScan => MergeStrategy::LinearScan,
            MergeStrategyArg::Heap => MergeStrategy::Heap,
        }
    }
}

/// Options controlling how sequences are sorted.
#[derive(Debug, Clone, Default, Args)]
pub struct SortOptions {
    /// Number of threads for sorting chunks.
    ///
    /// If not specified, chunks are sorted on the shared rayon pool sized to
    /// the number of available CPUs.
    #[arg(short = 't', long = "threads")]
    pub threads: Option<usize>,

    /// Strategy for merging sorted chunks.
    ///
    /// Both strategies produce identical output; `heap` scales better with
    /// very large inputs.
    #[arg(long = "merge", value_enum, default_value_t = MergeStrategyArg::default())]
    pub merge: MergeStrategyArg,
}

impl SortOptions {
    /// Build the sorter described by these options.
    pub fn build_sorter(&self) -> Result<ChunkSorter> {
        let mut sorter = ChunkSorter::new().merge_strategy(self.merge.into());
        if let Some(threads) = self.threads {
            sorter = sorter.threads(threads).context("Invalid --threads")?;
        }
        info!("Sort threads: {}", sorter.num_threads());
        info!("Merge strategy: {}", sorter.strategy());
        Ok(sorter)
    }
}

/// Sort `values` and print every pipeline stage to `out`.
///
/// Shared by the interactive modes.
pub fn sort_and_report<W: Write>(
    sorter: &ChunkSorter,
    values: Vec<i64>,
    out: &mut W,
) -> Result<()> {
    let count = values.len() as u64;

    let timer = OperationTimer::new("Sorting values");
    let report = sorter.process_with_report(values.clone());
    info!("Sorted {} chunks", report.chunks_after.len());
    timer.log_completion(count);

    write_report(out, &values, &report).context("Failed to write report")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
