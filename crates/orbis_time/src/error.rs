//! Error types for calendar and Julian Date conversions.

/// Errors from calendar validation or Julian Date conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date does not exist (bad month, day out of range for month).
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Time of day is out of range.
    #[error("invalid time of day: {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// Julian Date cannot be represented as a calendar timestamp.
    #[error("julian date {jd} outside representable calendar range")]
    OutOfRange { jd: f64 },
    /// Window end is not strictly after its start.
    #[error("window end must be strictly after window start")]
    EmptyWindow,
}
