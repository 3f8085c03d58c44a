//! Sorting every matching file in a directory.
//!
//! Files are discovered non-recursively by name suffix and processed in name
//! order. Each sorted file is written under the same name into an output
//! directory. Content problems (an unparseable line, too few values) skip the
//! offending file; I/O failures abort the batch, leaving files already
//! written in place.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::{ChunksortError, Result};
use crate::input::read_sequence;
use crate::output::write_integers;
use crate::sort::ChunkSorter;
use crate::validation::validate_directory;

/// Default suffix of files picked up by a batch run.
pub const DEFAULT_SUFFIX: &str = ".txt";

/// Suffix appended to the input directory name to form the default output directory.
pub const OUTPUT_DIR_SUFFIX: &str = "_sorted";

/// Counters from a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchStats {
    /// Files whose name matched the suffix.
    pub files_found: usize,
    /// Files sorted and written.
    pub files_sorted: usize,
    /// Files skipped for unparseable or insufficient content.
    pub files_skipped: usize,
    /// Total integers across all sorted files.
    pub values_sorted: u64,
}

/// Default output directory for `input_dir`: a sibling named `<dir>_sorted`.
///
/// # Examples
///
/// ```
/// use chunksort_lib::batch::default_output_dir;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(default_output_dir(Path::new("data/runs")), PathBuf::from("data/runs_sorted"));
/// assert_eq!(default_output_dir(Path::new("data/runs/")), PathBuf::from("data/runs_sorted"));
/// ```
#[must_use]
pub fn default_output_dir(input_dir: &Path) -> PathBuf {
    let Some(name) = input_dir.file_name() else {
        // `.`, `..` and `/` have no final component; name the output after the resolved path.
        return match input_dir.canonicalize() {
            Ok(resolved) if resolved.file_name().is_some() => default_output_dir(&resolved),
            _ => PathBuf::from(format!("input{OUTPUT_DIR_SUFFIX}")),
        };
    };
    let mut sorted_name = OsString::from(name);
    sorted_name.push(OUTPUT_DIR_SUFFIX);

    match input_dir.parent() {
        Some(parent) => parent.join(sorted_name),
        None => PathBuf::from(sorted_name),
    }
}

/// List regular files directly inside `dir` whose names end with `suffix`,
/// sorted by file name.
pub fn discover_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    validate_directory(dir)?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| ChunksortError::io(dir, e))? {
        let path = entry.map_err(|e| ChunksortError::io(dir, e))?.path();
        let matches = path.file_name().is_some_and(|n| n.to_string_lossy().ends_with(suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Sorts all matching files in a directory into an output directory.
#[derive(Debug)]
pub struct BatchSorter<'a> {
    sorter: &'a ChunkSorter,
    suffix: String,
    output_dir: Option<PathBuf>,
}

impl<'a> BatchSorter<'a> {
    /// Create a batch sorter using `sorter` for each file.
    #[must_use]
    pub fn new(sorter: &'a ChunkSorter) -> Self {
        Self { sorter, suffix: DEFAULT_SUFFIX.to_string(), output_dir: None }
    }

    /// Only process files whose name ends with `suffix`.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Write into `dir` instead of the default `<input>_sorted` sibling.
    #[must_use]
    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    /// Output directory used for `input_dir`.
    #[must_use]
    pub fn resolve_output_dir(&self, input_dir: &Path) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| default_output_dir(input_dir))
    }

    /// Sort every matching file in `input_dir`.
    ///
    /// # Errors
    ///
    /// Fails if `input_dir` is not a directory, if the output directory cannot
    /// be created, or on any I/O error reading or writing a file.
    pub fn run(&self, input_dir: &Path) -> Result<BatchStats> {
        let files = discover_files(input_dir, &self.suffix)?;
        let output_dir = self.resolve_output_dir(input_dir);
        std::fs::create_dir_all(&output_dir).map_err(|e| ChunksortError::io(&output_dir, e))?;

        info!("Found {} '{}' files in {}", files.len(), self.suffix, input_dir.display());
        let mut stats = BatchStats { files_found: files.len(), ..BatchStats::default() };

        for path in &files {
            let Some(name) = path.file_name() else {
                warn!("Skipping {}: no file name", path.display());
                stats.files_skipped += 1;
                continue;
            };
            let destination = output_dir.join(name);

            let values = match read_sequence(path) {
                Ok(values) => values,
                Err(e) if e.is_skippable() => {
                    warn!("Skipping {}: {e}", path.display());
                    stats.files_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let count = values.len();
            let sorted = self.sorter.process(values);
            write_integers(&destination, &sorted)?;
            debug!("Wrote {count} values to {}", destination.display());

            stats.files_sorted += 1;
            stats.values_sorted += count as u64;
        }

        Ok(stats)
    }
}
