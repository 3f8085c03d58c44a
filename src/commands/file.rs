//! Sort the integers in one text file.
//!
//! Reads one integer per non-blank line, requires at least ten of them, and
//! prints the original sequence, the chunks before and after sorting, and the
//! merged result. Any unparseable line is fatal and reported with its line
//! number.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use chunksort_lib::input::read_sequence;
use chunksort_lib::validation::validate_file_exists;

use crate::commands::command::Command;
use crate::commands::common::{SortOptions, sort_and_report};

/// Sort the integers in a file.
#[derive(Debug, Parser)]
#[command(
    name = "file",
    about = "\x1b[38;5;72m[INPUT]\x1b[0m          \x1b[36mSort the integers in a file (one per line)\x1b[0m",
    long_about = r#"
Sort the integers in a text file with the chunked parallel pipeline and print
every stage.

The file holds one integer per line. Blank lines are ignored; any other line
that is not an integer aborts with its line number. At least 10 integers are
required.

EXAMPLES:

  chunksort file -i numbers.txt
  chunksort file -i numbers.txt --threads 4
"#
)]
pub struct File {
    /// Input file with one integer per line.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Sorting options.
    #[command(flatten)]
    pub sort: SortOptions,
}

impl Command for File {
    fn execute(&self) -> Result<()> {
        validate_file_exists(&self.input, "Input file")?;

        info!("Starting File");
        info!("Input: {}", self.input.display());

        let values = read_sequence(&self.input)?;
        info!("Read {} values", values.len());

        let sorter = self.sort.build_sorter()?;
        sort_and_report(&sorter, values, &mut std::io::stdout().lock())
    }
}
