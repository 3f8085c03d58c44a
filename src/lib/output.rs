//! Sinks for sorted sequences: console reports and integer files.

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::errors::{ChunksortError, Result};
use crate::sort::PipelineReport;

/// Render a sequence as `[a b c]`.
///
/// # Examples
///
/// ```
/// use chunksort_lib::output::format_sequence;
///
/// assert_eq!(format_sequence(&[3, -1, 2]), "[3 -1 2]");
/// assert_eq!(format_sequence(&[]), "[]");
/// ```
#[must_use]
pub fn format_sequence(values: &[i64]) -> String {
    let joined = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    format!("[{joined}]")
}

/// Write the human-readable report of one pipeline run.
///
/// Prints the original numbers, the chunks before and after sorting, and the
/// final result.
pub fn write_report<W: Write>(
    out: &mut W,
    original: &[i64],
    report: &PipelineReport<i64>,
) -> std::io::Result<()> {
    writeln!(out, "Original numbers:")?;
    writeln!(out, "{}", format_sequence(original))?;

    writeln!(out, "\nChunks before sorting:")?;
    write_chunks(out, &report.chunks_before)?;

    writeln!(out, "\nChunks after sorting:")?;
    write_chunks(out, &report.chunks_after)?;

    writeln!(out, "\nFinal sorted result:")?;
    writeln!(out, "{}", format_sequence(&report.output))?;
    Ok(())
}

fn write_chunks<W: Write>(out: &mut W, chunks: &[Vec<i64>]) -> std::io::Result<()> {
    for (i, chunk) in chunks.iter().enumerate() {
        writeln!(out, "Chunk {i}: {}", format_sequence(chunk))?;
    }
    Ok(())
}

/// Write `values` to `path`, one integer per line.
///
/// The data is written to a temporary file in the destination directory and
/// renamed over `path` only once fully flushed, so a failure never leaves a
/// truncated file behind.
pub fn write_integers<P: AsRef<Path>>(path: P, values: &[i64]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(|e| ChunksortError::io(dir, e))?;
    let mut writer = BufWriter::new(tmp);
    for value in values {
        writeln!(writer, "{value}").map_err(|e| ChunksortError::io(path, e))?;
    }
    let tmp = writer.into_inner().map_err(|e| ChunksortError::io(path, e.into_error()))?;
    tmp.persist(path).map_err(|e| ChunksortError::io(path, e.error))?;
    Ok(())
}
