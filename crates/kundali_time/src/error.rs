//! Error types for birth-time parsing and Julian Day conversion.

use thiserror::Error;

/// Errors from parsing civil time or converting Julian Days.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not match `YYYY-MM-DD`.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Time string did not match `HH:MM` or `HH:MM:SS`.
    #[error("invalid time '{0}': expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
    /// UTC offset was unparseable or outside ±24h.
    #[error("invalid UTC offset '{0}'")]
    InvalidOffset(String),
    /// Local time could not be mapped to a single UTC instant.
    #[error("local time {0} cannot be resolved to UTC")]
    Unresolvable(String),
    /// Julian Day is not finite or falls outside chrono's calendar range.
    #[error("Julian day {0} is outside the representable calendar range")]
    JdOutOfRange(f64),
}
