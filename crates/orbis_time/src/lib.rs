//! Julian Date handling and calendar conversions for transit scanning.
//!
//! This crate provides:
//! - `JulianDay`, the continuous time coordinate used by every search loop
//! - Julian Date <-> UTC calendar conversions (via `chrono`)
//! - `UtcTime`, a calendar date/time with sub-second precision
//! - `TransitWindow`, a validated half-open scan interval
//!
//! All Julian Dates here are plain UTC-based JD; no TT/TDB distinction is
//! made, which is adequate for aspect work at arc-minute precision.

pub mod error;
pub mod julian;
pub mod utc_time;
pub mod window;

pub use error::TimeError;
pub use julian::{JulianDay, MINUTES_PER_DAY, SECONDS_PER_DAY, UNIX_EPOCH_JD};
pub use utc_time::UtcTime;
pub use window::TransitWindow;
