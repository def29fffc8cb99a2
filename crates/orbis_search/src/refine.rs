//! Bisection refinement of coarse aspect detections.
//!
//! A coarse scan step only brackets a crossing to within the step width.
//! Refinement bisects the bracketing day on the signed deviation from
//! exact until the instant is pinned to about eight seconds.

use orbis_math::normalize_to_pm180;
use orbis_time::JulianDay;

use crate::error::SearchError;

/// Bracket width below which refinement stops, in days (~8.6 s).
pub(crate) const CONVERGENCE_DAYS: f64 = 1e-4;

/// Deviation treated as already exact, in degrees.
pub(crate) const EXACT_DEVIATION_DEG: f64 = 0.001;

/// Hard cap on bisection steps. A one-day bracket converges in about
/// fourteen; hitting the cap means the oracle is misbehaving and the
/// candidate is dropped rather than reported at a wrong instant.
pub(crate) const MAX_ITERATIONS: u32 = 100;

/// Endpoint deviations further apart than this straddle the +-180 wrap
/// of [`normalize_to_pm180`], not a real zero of the deviation.
pub(crate) const WRAP_JUMP_DEG: f64 = 270.0;

/// Signed deviation of a longitude from an exact aspect to a natal
/// position, in `(-180, 180]` degrees. Zero exactly at the aspect.
pub(crate) fn aspect_deviation(lon_deg: f64, natal_deg: f64, exact_angle_deg: f64) -> f64 {
    normalize_to_pm180(lon_deg - natal_deg - exact_angle_deg)
}

/// Whether a sign change between two endpoint deviations is a real
/// crossing. Rejects same-sign brackets and the spurious sign flip a
/// deviation makes when it passes through +-180.
pub(crate) fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b <= 0.0 && (f_a - f_b).abs() < WRAP_JUMP_DEG
}

/// Bisect a bracketing interval down to [`CONVERGENCE_DAYS`].
///
/// `deviation_at` is the signed deviation sampled through the oracle.
/// Returns `Ok(None)` when the bracket holds no genuine crossing or the
/// iteration cap is hit; oracle failures propagate.
pub(crate) fn refine_crossing<F>(
    t_a: JulianDay,
    t_b: JulianDay,
    deviation_at: &F,
) -> Result<Option<JulianDay>, SearchError>
where
    F: Fn(JulianDay) -> Result<f64, SearchError>,
{
    let mut left = t_a;
    let mut right = t_b;
    let mut f_left = deviation_at(left)?;
    let mut f_right = deviation_at(right)?;

    if !is_genuine_crossing(f_left, f_right) {
        return Ok(None);
    }

    for _ in 0..MAX_ITERATIONS {
        if right.days_since(left) <= CONVERGENCE_DAYS {
            // Converged by width: hand back the tighter endpoint.
            let better = if f_left.abs() < f_right.abs() {
                left
            } else {
                right
            };
            return Ok(Some(better));
        }

        let mid = JulianDay::new(0.5 * (left.value() + right.value()));
        let f_mid = deviation_at(mid)?;

        if f_mid.abs() < EXACT_DEVIATION_DEG {
            return Ok(Some(mid));
        }

        if f_mid * f_left < 0.0 {
            right = mid;
            f_right = f_mid;
        } else {
            left = mid;
            f_left = f_mid;
        }
    }

    Ok(None)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
