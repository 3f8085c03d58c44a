//! Sort every matching file in a directory.
//!
//! Each file is read and sorted independently and written under the same
//! name into the output directory. Files with unparseable lines or fewer than
//! ten integers are skipped with a warning; I/O errors abort the run.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use chunksort_lib::batch::{BatchSorter, DEFAULT_SUFFIX};
use chunksort_lib::logging::{OperationTimer, log_batch_summary};

use crate::commands::command::Command;
use crate::commands::common::SortOptions;

/// Sort all files in a directory.
#[derive(Debug, Parser)]
#[command(
    name = "dir",
    about = "\x1b[38;5;72m[INPUT]\x1b[0m          \x1b[36mSort every .txt file in a directory into <dir>_sorted\x1b[0m",
    long_about = r#"
Sort every file in a directory whose name ends with the given suffix.

Only files directly inside the directory are considered. Each sorted file is
written with the same name into the output directory, one integer per line.
By default the output directory is a sibling of the input named
<dir>_sorted.

Files containing a line that is not an integer, or fewer than 10 integers, are
skipped with a warning.

EXAMPLES:

  # Writes numbers_sorted/
  chunksort dir -d numbers

  # Custom output location and suffix
  chunksort dir -d numbers -o /tmp/sorted --suffix .nums
"#
)]
pub struct Dir {
    /// Directory containing input files.
    #[arg(short = 'd', long = "dir")]
    pub dir: PathBuf,

    /// Output directory (defaults to `<dir>_sorted`).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Only process files whose names end with this suffix.
    #[arg(long = "suffix", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Sorting options.
    #[command(flatten)]
    pub sort: SortOptions,
}

impl Command for Dir {
    fn execute(&self) -> Result<()> {
        if self.suffix.is_empty() {
            bail!("--suffix must not be empty");
        }

        let sorter = self.sort.build_sorter()?;
        let mut batch = BatchSorter::new(&sorter).suffix(self.suffix.clone());
        if let Some(ref output) = self.output {
            batch = batch.output_dir(output.clone());
        }
        let output_dir = batch.resolve_output_dir(&self.dir);

        info!("Starting Dir");
        info!("Input: {}", self.dir.display());
        info!("Output: {}", output_dir.display());

        let timer = OperationTimer::new("Sorting files");
        let stats = batch.run(&self.dir)?;

        log_batch_summary(&stats);
        timer.log_completion(stats.values_sorted);
        println!("Sorted files saved in directory: {}", output_dir.display());
        Ok(())
    }
}
