//! Significance scoring for detected transits.

use orbis_ephem::Body;

/// Score how much a transit matters, higher meaning more.
///
/// The base score rewards exactness: an orb of zero scores 10, decaying
/// linearly to 1 at the orb limit (floored at 1). Multipliers then favor
/// slow transiting bodies (x1.2), applying contacts (x1.3), and contacts
/// to the natal luminaries (x1.2). Fully boosted, an exact aspect tops
/// out at 18.72.
pub fn significance_score(
    transiting: Body,
    natal: Body,
    orb_deg: f64,
    orb_limit_deg: f64,
    is_applying: bool,
) -> f64 {
    let normalized_orb = if orb_limit_deg > 0.0 {
        orb_deg / orb_limit_deg
    } else {
        1.0
    };
    let exactness = (1.0 - normalized_orb * 0.9).max(0.1);

    let mut significance = exactness * 10.0;
    if transiting.is_outer() {
        significance *= 1.2;
    }
    if is_applying {
        significance *= 1.3;
    }
    if natal.is_luminary() {
        significance *= 1.2;
    }
    significance
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
