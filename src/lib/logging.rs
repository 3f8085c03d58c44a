//! Logging helpers for timing and summarising operations.
//!
//! Everything here goes through the `log` facade; the binary installs
//! `env_logger`, so `RUST_LOG` controls what is shown.

use std::time::{Duration, Instant};

use crate::batch::BatchStats;

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use chunksort_lib::logging::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234), "1,234");
/// assert_eq!(format_count(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a duration in human-readable form.
///
/// Sub-second durations are shown in milliseconds since most sorts of
/// interactive size finish well under a second.
///
/// # Examples
///
/// ```
/// use chunksort_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs == 0 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Formats a processing rate in values per second.
///
/// # Examples
///
/// ```
/// use chunksort_lib::logging::format_rate;
/// use std::time::Duration;
///
/// assert_eq!(format_rate(1000, Duration::from_secs(1)), "1,000 values/s");
/// assert_eq!(format_rate(30, Duration::from_secs(60)), "30.0 values/min");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_rate(count: u64, duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        return format!("{} values/s", format_count(count));
    }

    let rate = count as f64 / secs;
    if rate >= 1.0 {
        format!("{} values/s", format_count(rate as u64))
    } else {
        let per_min = count as f64 / (secs / 60.0);
        format!("{per_min:.1} values/min")
    }
}

/// Logs a summary of a batch run.
pub fn log_batch_summary(stats: &BatchStats) {
    log::info!("Batch Summary:");
    log::info!("  Files found: {}", format_count(stats.files_found as u64));
    log::info!("  Files sorted: {}", format_count(stats.files_sorted as u64));
    if stats.files_skipped > 0 {
        log::info!("  Files skipped: {}", format_count(stats.files_skipped as u64));
    }
    log::info!("  Values sorted: {}", format_count(stats.values_sorted));
}

/// Timer that logs when an operation starts and how long it took.
///
/// # Examples
///
/// ```
/// use chunksort_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Sorting values");
/// // ... do work ...
/// timer.log_completion(10_000);
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Time since the timer was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the completion with item count and rate.
    pub fn log_completion(&self, count: u64) {
        let duration = self.elapsed();
        log::info!(
            "{} completed: {} values in {} ({})",
            self.operation,
            format_count(count),
            format_duration(duration),
            format_rate(count, duration)
        );
    }
}
