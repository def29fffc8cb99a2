//! Zodiac signs and chart-style position formatting.

use crate::angle::{Dm, deg_to_dm, normalize_360};

/// The twelve tropical zodiac signs, in longitude order from 0 deg Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs in longitude order; index i covers `[30*i, 30*(i+1))`.
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Astrological glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "\u{2648}",
            ZodiacSign::Taurus => "\u{2649}",
            ZodiacSign::Gemini => "\u{264a}",
            ZodiacSign::Cancer => "\u{264b}",
            ZodiacSign::Leo => "\u{264c}",
            ZodiacSign::Virgo => "\u{264d}",
            ZodiacSign::Libra => "\u{264e}",
            ZodiacSign::Scorpio => "\u{264f}",
            ZodiacSign::Sagittarius => "\u{2650}",
            ZodiacSign::Capricorn => "\u{2651}",
            ZodiacSign::Aquarius => "\u{2652}",
            ZodiacSign::Pisces => "\u{2653}",
        }
    }

    /// Zero-based position in [`ALL_SIGNS`].
    pub const fn index(self) -> u8 {
        match self {
            ZodiacSign::Aries => 0,
            ZodiacSign::Taurus => 1,
            ZodiacSign::Gemini => 2,
            ZodiacSign::Cancer => 3,
            ZodiacSign::Leo => 4,
            ZodiacSign::Virgo => 5,
            ZodiacSign::Libra => 6,
            ZodiacSign::Scorpio => 7,
            ZodiacSign::Sagittarius => 8,
            ZodiacSign::Capricorn => 9,
            ZodiacSign::Aquarius => 10,
            ZodiacSign::Pisces => 11,
        }
    }

    /// All signs in longitude order.
    pub const fn all() -> [ZodiacSign; 12] {
        ALL_SIGNS
    }
}

/// Sign containing the given ecliptic longitude.
pub fn sign_from_longitude(lon_deg: f64) -> ZodiacSign {
    let lon = normalize_360(lon_deg);
    let idx = (lon / 30.0).floor() as usize;
    // Guard the idx == 12 case from float edge effects near 360.
    ALL_SIGNS[idx.min(11)]
}

/// Sign plus truncated degree/minute offset within that sign.
pub fn sign_position(lon_deg: f64) -> (ZodiacSign, Dm) {
    let lon = normalize_360(lon_deg);
    (sign_from_longitude(lon), deg_to_dm(lon % 30.0))
}

/// Chart-style label for a longitude, e.g. `♈ 15°30'`.
pub fn sign_position_label(lon_deg: f64) -> String {
    let (sign, dm) = sign_position(lon_deg);
    format!("{} {}\u{b0}{}'", sign.symbol(), dm.degrees, dm.minutes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_boundaries() {
        assert_eq!(sign_from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(sign_from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(sign_from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(sign_from_longitude(359.999), ZodiacSign::Pisces);
        assert_eq!(sign_from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(sign_from_longitude(-10.0), ZodiacSign::Pisces);
    }

    #[test]
    fn sign_indices_match_order() {
        for (i, sign) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(sign.index() as usize, i, "index mismatch for {:?}", sign);
        }
    }

    #[test]
    fn position_within_sign() {
        let (sign, dm) = sign_position(95.5);
        assert_eq!(sign, ZodiacSign::Cancer);
        assert_eq!(dm.degrees, 5);
        assert_eq!(dm.minutes, 30);
    }

    #[test]
    fn label_format() {
        assert_eq!(sign_position_label(15.5), "\u{2648} 15\u{b0}30'");
        assert_eq!(sign_position_label(100.0), "\u{264b} 10\u{b0}0'");
        // Unnormalized input is brought into range first.
        assert_eq!(sign_position_label(460.0), sign_position_label(100.0));
    }
}
