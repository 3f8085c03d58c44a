//! Input validation utilities
//!
//! Common checks for command-line parameters and input locations, all
//! returning structured [`ChunksortError`]s with consistent messages.

use std::path::Path;

use crate::errors::{ChunksortError, Result};

/// Minimum number of integers any input must provide.
pub const MIN_VALUES: usize = 10;

/// Validate that a file exists
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable description of the file (e.g., "Input file")
///
/// # Errors
/// Returns an error if the path does not exist or is not a regular file
///
/// # Example
/// ```
/// use chunksort_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/numbers.txt", "Input file");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    if !path_ref.is_file() {
        let reason = if path_ref.exists() { "Not a regular file" } else { "File does not exist" };
        return Err(ChunksortError::io(
            path_ref,
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("{description}: {reason}")),
        ));
    }
    Ok(())
}

/// Validate that a path is an existing directory
///
/// # Errors
/// Returns [`ChunksortError::InvalidDirectory`] if the path is missing or not a directory
///
/// # Example
/// ```
/// use chunksort_lib::validation::validate_directory;
///
/// assert!(validate_directory(std::env::temp_dir()).is_ok());
/// assert!(validate_directory("/nonexistent/dir").is_err());
/// ```
pub fn validate_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let path_ref = path.as_ref();
    let reason = match std::fs::metadata(path_ref) {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => "Not a directory".to_string(),
        Err(e) => e.to_string(),
    };
    Err(ChunksortError::InvalidDirectory { path: path_ref.to_path_buf(), reason })
}

/// Validate the requested number of random values
///
/// # Errors
/// Returns an error if `count` is below [`MIN_VALUES`]
///
/// # Example
/// ```
/// use chunksort_lib::validation::validate_random_count;
///
/// assert!(validate_random_count(10).is_ok());
/// assert!(validate_random_count(9).is_err());
/// ```
pub fn validate_random_count(count: usize) -> Result<()> {
    if count < MIN_VALUES {
        return Err(ChunksortError::InvalidParameter {
            parameter: "count".to_string(),
            reason: format!("must be >= {MIN_VALUES}, got {count}"),
        });
    }
    Ok(())
}

/// Validate that an input produced enough values
///
/// # Arguments
/// * `values` - The parsed values
/// * `origin` - Where the values came from, for error messages
///
/// # Errors
/// Returns [`ChunksortError::TooFewValues`] if fewer than [`MIN_VALUES`] were parsed
pub fn validate_min_values(values: &[i64], origin: &str) -> Result<()> {
    if values.len() < MIN_VALUES {
        return Err(ChunksortError::TooFewValues {
            origin: origin.to_string(),
            found: values.len(),
            min: MIN_VALUES,
        });
    }
    Ok(())
}
