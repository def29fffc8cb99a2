//! Julian Date arithmetic and Unix/`chrono` conversions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minutes per day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// A UTC-based Julian Date.
///
/// This is the continuous time coordinate every scan and refinement loop
/// works in. It wraps an `f64` day count providing type safety and
/// convenient conversions; fractional days carry the time of day
/// (`.0` is noon UTC, `.5` is midnight).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wrap a raw Julian Date value.
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// The raw Julian Date value.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// This instant shifted by a (possibly negative or fractional) number
    /// of days.
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Signed day count from `other` to `self`.
    pub fn days_since(self, other: JulianDay) -> f64 {
        self.0 - other.0
    }

    /// Build from seconds past the Unix epoch.
    pub fn from_unix_seconds(unix_s: f64) -> Self {
        Self(unix_s / SECONDS_PER_DAY + UNIX_EPOCH_JD)
    }

    /// Seconds past the Unix epoch.
    pub fn to_unix_seconds(self) -> f64 {
        (self.0 - UNIX_EPOCH_JD) * SECONDS_PER_DAY
    }

    /// Build from a `chrono` UTC timestamp.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let unix_s = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9;
        Self::from_unix_seconds(unix_s)
    }

    /// Convert to a `chrono` UTC timestamp.
    ///
    /// Fails with [`TimeError::OutOfRange`] for values `chrono` cannot
    /// represent (far past/future, non-finite).
    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        let unix_s = self.to_unix_seconds();
        if !unix_s.is_finite() {
            return Err(TimeError::OutOfRange { jd: self.0 });
        }
        let mut secs = unix_s.floor() as i64;
        let mut nanos = ((unix_s - unix_s.floor()) * 1e9).round() as u32;
        if nanos >= 1_000_000_000 {
            secs += 1;
            nanos = 0;
        }
        DateTime::from_timestamp(secs, nanos).ok_or(TimeError::OutOfRange { jd: self.0 })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn unix_epoch_anchor() {
        let jd = JulianDay::new(UNIX_EPOCH_JD);
        assert!(jd.to_unix_seconds().abs() < 1e-9);
        let back = JulianDay::from_unix_seconds(0.0);
        assert!((back.value() - UNIX_EPOCH_JD).abs() < 1e-9);
    }

    #[test]
    fn j2000_noon() {
        // 2000-01-01T12:00:00Z is JD 2451545.0.
        let jd = JulianDay::from_unix_seconds(946_728_000.0);
        assert!(
            (jd.value() - 2_451_545.0).abs() < 1e-9,
            "got {}",
            jd.value()
        );

        let dt = jd.to_datetime().unwrap();
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn day_arithmetic() {
        let a = JulianDay::new(2_451_545.0);
        let b = a.add_days(2.5);
        assert!((b.value() - 2_451_547.5).abs() < 1e-12);
        assert!((b.days_since(a) - 2.5).abs() < 1e-12);
        assert!(a < b);
    }

    #[test]
    fn datetime_roundtrip() {
        let dt = DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap();
        let jd = JulianDay::from_datetime(dt);
        let back = jd.to_datetime().unwrap();
        let delta = (back - dt).num_milliseconds().abs();
        assert!(delta <= 1, "roundtrip drifted by {delta} ms");
    }

    #[test]
    fn far_out_of_range_rejected() {
        assert!(JulianDay::new(f64::NAN).to_datetime().is_err());
        assert!(JulianDay::new(1e15).to_datetime().is_err());
    }
}
