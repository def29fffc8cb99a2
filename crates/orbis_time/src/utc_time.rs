//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the calendar-facing representation used at the API
//! boundary. All scan internals work in [`JulianDay`]; conversion happens
//! here, backed by `chrono` for calendar validity.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::JulianDay;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a Julian Date, validating the calendar fields.
    pub fn to_jd(&self) -> Result<JulianDay, TimeError> {
        let date =
            NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })?;
        if !self.second.is_finite() || self.second < 0.0 {
            return Err(self.invalid_time());
        }
        let whole = self.second.floor();
        let nanos = (((self.second - whole) * 1e9).round() as u32).min(999_999_999);
        let time = NaiveTime::from_hms_nano_opt(self.hour, self.minute, whole as u32, nanos)
            .ok_or_else(|| self.invalid_time())?;
        let dt = NaiveDateTime::new(date, time).and_utc();
        let unix_s = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9;
        Ok(JulianDay::from_unix_seconds(unix_s))
    }

    /// Convert a Julian Date back to a UTC calendar time.
    pub fn from_jd(jd: JulianDay) -> Result<Self, TimeError> {
        let dt: DateTime<Utc> = jd.to_datetime()?;
        Ok(Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        })
    }

    /// Calendar date as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Time of day as `HH:MM`.
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    fn invalid_time(&self) -> TimeError {
        TimeError::InvalidTime {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn jd_roundtrip() {
        let t = UtcTime::new(1990, 1, 1, 12, 0, 0.0);
        let jd = t.to_jd().unwrap();
        // 1990-01-01T12:00:00Z is JD 2447893.0.
        assert!((jd.value() - 2_447_893.0).abs() < 1e-9, "got {}", jd.value());

        let back = UtcTime::from_jd(jd).unwrap();
        assert_eq!(back.year, 1990);
        assert_eq!(back.month, 1);
        assert_eq!(back.day, 1);
        assert_eq!(back.hour, 12);
        assert_eq!(back.minute, 0);
        assert!(back.second.abs() < 1e-3);
    }

    #[test]
    fn invalid_date_rejected() {
        assert!(UtcTime::new(2024, 2, 30, 0, 0, 0.0).to_jd().is_err());
        assert!(UtcTime::new(2024, 13, 1, 0, 0, 0.0).to_jd().is_err());
        assert!(UtcTime::new(2024, 0, 1, 0, 0, 0.0).to_jd().is_err());
    }

    #[test]
    fn invalid_time_rejected() {
        assert!(UtcTime::new(2024, 1, 1, 24, 0, 0.0).to_jd().is_err());
        assert!(UtcTime::new(2024, 1, 1, 0, 60, 0.0).to_jd().is_err());
        assert!(UtcTime::new(2024, 1, 1, 0, 0, f64::NAN).to_jd().is_err());
        assert!(UtcTime::new(2024, 1, 1, 0, 0, -1.0).to_jd().is_err());
    }

    #[test]
    fn leap_day_accepted() {
        assert!(UtcTime::new(2024, 2, 29, 0, 0, 0.0).to_jd().is_ok());
        assert!(UtcTime::new(2023, 2, 29, 0, 0, 0.0).to_jd().is_err());
    }

    #[test]
    fn date_and_time_strings() {
        let t = UtcTime::new(2024, 3, 5, 7, 9, 30.0);
        assert_eq!(t.date_string(), "2024-03-05");
        assert_eq!(t.time_string(), "07:09");
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        let s = t.to_string();
        assert!(s.contains("12:30:"), "got: {s}");
    }
}
