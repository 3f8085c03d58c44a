//! Reading integer sequences from text files.
//!
//! The format is one integer per line. Surrounding whitespace is ignored and
//! blank lines are skipped. Any other line must be UTF-8 and parse as an
//! `i64`; the first one that does not aborts the read with its 1-based line
//! number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{ChunksortError, Result};
use crate::validation::validate_min_values;

/// Parse integers from a buffered reader.
///
/// `path` is only used to label errors.
///
/// # Errors
///
/// Returns [`ChunksortError::InvalidInteger`] for the first non-blank line that is
/// not an integer, or [`ChunksortError::Io`] if reading fails.
///
/// # Examples
///
/// ```
/// use chunksort_lib::input::parse_integers;
/// use std::path::Path;
///
/// let text = "3\n\n  -1 \n42\n";
/// let values = parse_integers(text.as_bytes(), Path::new("inline")).unwrap();
/// assert_eq!(values, vec![3, -1, 42]);
///
/// let err = parse_integers("1\nfoo\n".as_bytes(), Path::new("inline")).unwrap_err();
/// assert!(err.to_string().contains("line 2"));
/// ```
pub fn parse_integers<R: BufRead>(mut reader: R, path: &Path) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf);
        if read.map_err(|e| ChunksortError::io(path, e))? == 0 {
            break;
        }
        line += 1;

        let invalid = |content: String| ChunksortError::InvalidInteger {
            path: path.to_path_buf(),
            line,
            content,
        };
        let text = std::str::from_utf8(&buf)
            .map_err(|_| invalid(String::from_utf8_lossy(&buf).trim().to_string()))?
            .trim();
        if text.is_empty() {
            continue;
        }
        let value = text.parse::<i64>().map_err(|_| invalid(text.to_string()))?;
        values.push(value);
    }

    Ok(values)
}

/// Read every integer from the file at `path`.
///
/// No minimum count is enforced; see [`read_sequence`] for that.
pub fn read_integers<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ChunksortError::io(path, e))?;
    parse_integers(BufReader::new(file), path)
}

/// Read a sortable sequence from `path`, requiring at least ten integers.
///
/// # Errors
///
/// Returns the errors of [`read_integers`], plus
/// [`ChunksortError::TooFewValues`] if the file holds fewer than ten integers.
pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let values = read_integers(path)?;
    validate_min_values(&values, &path.display().to_string())?;
    Ok(values)
}
