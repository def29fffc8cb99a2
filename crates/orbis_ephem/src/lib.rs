//! Body catalog and the ephemeris provider contract.
//!
//! This crate defines:
//! - [`Body`], the ten transiting/natal bodies used in aspect work
//! - [`BodyState`], an ecliptic longitude plus its rate of change
//! - [`Ephemeris`], the provider trait the scan layer queries through
//!
//! No ephemeris implementation lives here. Providers (Swiss Ephemeris
//! bindings, JPL kernels, analytic theories, test fixtures) implement
//! [`Ephemeris`] downstream; everything above this crate is
//! provider-agnostic.

use orbis_time::JulianDay;
use serde::{Deserialize, Serialize};

/// Bodies supported by the transit-scan contract.
///
/// These are the ten classical chart bodies. Computed points (lunar nodes,
/// Chiron, asteroids) are NOT included here — a provider that knows them
/// can expose them through its own API without widening this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All bodies in catalog order. Scan loops iterate in this order, which
/// fixes tie-breaking between events detected at the same step.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Ephemeris catalog number (Swiss Ephemeris planet numbering).
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// Convert a catalog number back into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Sun),
            1 => Some(Self::Moon),
            2 => Some(Self::Mercury),
            3 => Some(Self::Venus),
            4 => Some(Self::Mars),
            5 => Some(Self::Jupiter),
            6 => Some(Self::Saturn),
            7 => Some(Self::Uranus),
            8 => Some(Self::Neptune),
            9 => Some(Self::Pluto),
            _ => None,
        }
    }

    /// Zero-based slot in [`ALL_BODIES`], for dense per-body arrays.
    pub const fn index(self) -> usize {
        self.code() as usize
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Astrological glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "\u{2609}",
            Self::Moon => "\u{263d}",
            Self::Mercury => "\u{263f}",
            Self::Venus => "\u{2640}",
            Self::Mars => "\u{2642}",
            Self::Jupiter => "\u{2643}",
            Self::Saturn => "\u{2644}",
            Self::Uranus => "\u{2645}",
            Self::Neptune => "\u{2646}",
            Self::Pluto => "\u{2647}",
        }
    }

    /// Look a body up by its English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BODIES.iter().copied().find(|b| b.name() == name)
    }

    /// Sun or Moon. Luminaries get widened orbs in aspect matching.
    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }

    /// Jupiter through Pluto. Slow movers weigh more in significance
    /// scoring because their transits are rare and long-lived.
    pub const fn is_outer(self) -> bool {
        matches!(
            self,
            Self::Jupiter | Self::Saturn | Self::Uranus | Self::Neptune | Self::Pluto
        )
    }

    /// All bodies in catalog order.
    pub const fn all() -> [Body; 10] {
        ALL_BODIES
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Instantaneous ecliptic state of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Geocentric ecliptic longitude in degrees. Providers may return it
    /// unnormalized; consumers bring it into `[0, 360)`.
    pub longitude_deg: f64,
    /// Rate of longitude change in degrees per day. Negative while the
    /// body is retrograde.
    pub speed_deg_per_day: f64,
}

/// Position oracle the scan layer queries through.
///
/// Implementations must be cheap to call repeatedly: a month-long scan at
/// a 10-minute step asks for every body at every step, several thousand
/// queries per body, plus refinement samples.
pub trait Ephemeris: Send + Sync {
    /// Ecliptic longitude and speed of `body` at the given instant.
    fn position_and_speed(&self, body: Body, at: JulianDay) -> Result<BodyState, EphemerisError>;

    /// Convenience accessor for the longitude alone.
    fn longitude(&self, body: Body, at: JulianDay) -> Result<f64, EphemerisError> {
        Ok(self.position_and_speed(body, at)?.longitude_deg)
    }
}

/// Errors surfaced by an [`Ephemeris`] provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider has no data for this body/instant combination.
    #[error("ephemeris unavailable for {body} at jd {jd}")]
    Unavailable { body: Body, jd: f64 },
    /// Provider-internal failure.
    #[error("ephemeris provider error: {0}")]
    Provider(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
