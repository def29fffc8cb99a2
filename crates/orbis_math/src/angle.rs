//! Circular angle helpers for ecliptic longitudes in degrees.

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_360(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d < 0.0 {
        d += 360.0;
    }
    d
}

/// Normalize an angle in degrees to `(-180, 180]`.
///
/// Used wherever a signed deviation from an exact angle is needed; the
/// half-open convention keeps exactly one representative for 180.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Shortest angular separation between two longitudes, in `[0, 180]`.
///
/// Symmetric in its arguments: the result is the same whichever side of
/// the circle the shorter arc lies on.
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let d = normalize_360(a_deg - b_deg);
    d.min(360.0 - d)
}

/// Whole degrees and minutes of arc, truncated (not rounded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dm {
    pub degrees: u16,
    pub minutes: u8,
}

/// Split a non-negative angle into truncated degrees and minutes.
///
/// Truncation matches chart-display convention: 15.999 deg is rendered
/// as 15 deg 59 min, never rounded up to 16.
pub fn deg_to_dm(deg: f64) -> Dm {
    let degrees = deg.trunc();
    let minutes = ((deg - degrees) * 60.0).trunc();
    Dm {
        degrees: degrees as u16,
        minutes: minutes as u8,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
