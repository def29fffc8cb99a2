//! Validated scan windows.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::JulianDay;
use crate::utc_time::UtcTime;

/// A half-open scan interval `[start, end)` in Julian Days.
///
/// Every detected event instant falls inside the window; the end instant
/// itself is excluded so adjacent windows tile without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitWindow {
    start: JulianDay,
    end: JulianDay,
}

impl TransitWindow {
    /// Build a window, rejecting empty or inverted intervals.
    pub fn new(start: JulianDay, end: JulianDay) -> Result<Self, TimeError> {
        if !start.value().is_finite() || !end.value().is_finite() || end <= start {
            return Err(TimeError::EmptyWindow);
        }
        Ok(Self { start, end })
    }

    /// Build a window from two UTC calendar instants.
    pub fn from_utc(start: UtcTime, end: UtcTime) -> Result<Self, TimeError> {
        Self::new(start.to_jd()?, end.to_jd()?)
    }

    /// The window covering one calendar month, from the first of the month
    /// (00:00 UTC) up to the first of the next.
    pub fn month(year: i32, month: u32) -> Result<Self, TimeError> {
        let start = UtcTime::new(year, month, 1, 0, 0, 0.0).to_jd()?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end = UtcTime::new(next_year, next_month, 1, 0, 0, 0.0).to_jd()?;
        Self::new(start, end)
    }

    pub const fn start(&self) -> JulianDay {
        self.start
    }

    pub const fn end(&self) -> JulianDay {
        self.end
    }

    /// Window length in days.
    pub fn days(&self) -> f64 {
        self.end.days_since(self.start)
    }

    /// Whether an instant lies inside the half-open interval.
    pub fn contains(&self, at: JulianDay) -> bool {
        self.start <= at && at < self.end
    }
}
