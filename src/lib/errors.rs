//! Custom error types for chunksort operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for chunksort operations
pub type Result<T> = std::result::Result<T, ChunksortError>;

/// Error type for chunksort operations
#[derive(Error, Debug)]
pub enum ChunksortError {
    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// An input yielded fewer integers than the minimum required
    #[error("{origin} must contain at least {min} valid integers, found {found}")]
    TooFewValues {
        /// Where the values came from (file path or description)
        origin: String,
        /// Number of integers actually parsed
        found: usize,
        /// Minimum number required
        min: usize,
    },

    /// A non-blank line could not be parsed as an integer
    #[error("Invalid integer at line {line} of '{}': '{content}'", path.display())]
    InvalidInteger {
        /// Path to the offending file
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// The trimmed line content
        content: String,
    },

    /// Reading or writing a file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Batch input location is not a usable directory
    #[error("Invalid directory '{}': {reason}", path.display())]
    InvalidDirectory {
        /// The directory path
        path: PathBuf,
        /// Explanation of the problem
        reason: String,
    },

    /// The dedicated sort thread pool could not be created
    #[error("Failed to build sort thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ChunksortError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Whether batch processing skips the offending file instead of aborting.
    ///
    /// Only content problems (unparseable lines, too few values) are skippable;
    /// I/O failures abort the whole batch.
    #[must_use]
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::TooFewValues { .. } | Self::InvalidInteger { .. })
    }
}
