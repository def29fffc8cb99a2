//! House cusp construction and house lookup.

use orbis_math::normalize_360;

/// Whole-sign cusps from an Ascendant degree.
///
/// Each cusp sits at 0 degrees of a sign, the first house taking the
/// whole sign the Ascendant falls in.
pub fn whole_sign_cusps(asc_deg: f64) -> [f64; 12] {
    let idx = (normalize_360(asc_deg) / 30.0).floor() as usize;
    // Guard the idx == 12 case from float edge effects near 360.
    let asc_sign = idx.min(11);
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = (((asc_sign + i) % 12) * 30) as f64;
    }
    cusps
}

/// Twelve equal 30-degree houses starting from `first_deg`.
pub fn equal_cusps(first_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(first_deg + 30.0 * i as f64);
    }
    cusps
}

/// Cusps used when a provider cannot compute real ones: equal houses
/// from 0 degrees Aries.
pub fn fallback_cusps() -> [f64; 12] {
    equal_cusps(0.0)
}

/// House number (1-12) containing the given longitude.
///
/// Cusp arrays whose entries all sit on sign boundaries are treated as
/// whole-sign and resolved by sign arithmetic. Anything else is scanned
/// as an increasing cusp sequence; longitudes past the last cusp fall in
/// the 12th house.
pub fn house_of(cusps: &[f64; 12], lon_deg: f64) -> u8 {
    let lon = normalize_360(lon_deg);

    if cusps.iter().all(|c| (c % 30.0).abs() < 1e-9) {
        let sign = (lon as i32) / 30;
        let first = (cusps[0] as i32) / 30;
        let house = (sign + 1 - first).rem_euclid(12);
        return if house == 0 { 12 } else { house as u8 };
    }

    for i in 0..11 {
        if cusps[i] <= lon && lon < cusps[i + 1] {
            return (i + 1) as u8;
        }
    }
    12
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
