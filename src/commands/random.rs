//! Sort randomly generated values.
//!
//! Generates `N >= 10` values in `0..=999` from an explicitly seeded RNG,
//! sorts them, and prints the original sequence, the chunks before and after
//! sorting, and the merged result.

use anyhow::Result;
use clap::Parser;
use log::info;

use chunksort_lib::random::{create_rng, generate_random};

use crate::commands::command::Command;
use crate::commands::common::{SortOptions, sort_and_report};

/// Sort randomly generated integers.
#[derive(Debug, Parser)]
#[command(
    name = "random",
    about = "\x1b[38;5;72m[INPUT]\x1b[0m          \x1b[36mGenerate N random integers in [0, 999] and sort them\x1b[0m",
    long_about = r#"
Generate N random integers in [0, 999], sort them with the chunked parallel
pipeline, and print every stage.

EXAMPLES:

  # Sort 20 random values
  chunksort random -n 20

  # Reproducible run
  chunksort random -n 1000 --seed 42 --merge heap
"#
)]
pub struct Random {
    /// Number of values to generate (at least 10).
    #[arg(short = 'n', long = "count")]
    pub count: usize,

    /// Seed for the random number generator.
    ///
    /// If not specified, the generator is seeded from OS entropy.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Sorting options.
    #[command(flatten)]
    pub sort: SortOptions,
}

impl Command for Random {
    fn execute(&self) -> Result<()> {
        info!("Starting Random");
        info!("Count: {}", self.count);
        match self.seed {
            Some(seed) => info!("Seed: {seed}"),
            None => info!("Seed: from entropy"),
        }

        let mut rng = create_rng(self.seed);
        let values = generate_random(&mut rng, self.count)?;

        let sorter = self.sort.build_sorter()?;
        sort_and_report(&sorter, values, &mut std::io::stdout().lock())
    }
}
