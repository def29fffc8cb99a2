//! Natal chart assembly.

use orbis_ephem::{ALL_BODIES, Body, Ephemeris};
use orbis_math::normalize_360;
use orbis_time::{JulianDay, SECONDS_PER_DAY};

use crate::chart_types::{BirthData, GeoLocation, HouseSystem};
use crate::error::ChartError;
use crate::houses::{fallback_cusps, house_of};
use crate::providers::{CuspSource, TimezoneResolver};

/// A computed natal chart: fixed body longitudes plus house cusps.
///
/// Assembled once per subject, then read by every step of a transit scan;
/// all accessors are cheap field reads.
#[derive(Debug, Clone, PartialEq)]
pub struct NatalChart {
    birth_jd: JulianDay,
    location: GeoLocation,
    house_system: HouseSystem,
    /// Normalized natal longitudes, indexed by `Body::index()`.
    positions: [f64; 10],
    cusps: [f64; 12],
}

impl NatalChart {
    /// Assemble a chart from birth data.
    ///
    /// The civil birth time is shifted to UTC using `timezones` (treated
    /// as already UTC when the resolver returns `None`), then the oracle
    /// is queried once per body. A cusp-provider failure is non-fatal:
    /// the chart falls back to equal houses from 0 degrees Aries and
    /// logs a warning.
    pub fn compute<E, C, T>(
        birth: &BirthData,
        oracle: &E,
        cusp_source: &C,
        timezones: &T,
    ) -> Result<Self, ChartError>
    where
        E: Ephemeris,
        C: CuspSource,
        T: TimezoneResolver,
    {
        let offset_s = timezones
            .utc_offset_seconds(birth.location, birth.civil)
            .unwrap_or(0);
        let civil_jd = birth
            .civil
            .to_jd()
            .map_err(|e| ChartError::InvalidBirthData(e.to_string()))?;
        let birth_jd = civil_jd.add_days(-(offset_s as f64) / SECONDS_PER_DAY);

        let mut positions = [0.0; 10];
        for body in ALL_BODIES {
            let state = oracle.position_and_speed(body, birth_jd)?;
            positions[body.index()] = normalize_360(state.longitude_deg);
        }

        let cusps = match cusp_source.house_cusps(birth_jd, birth.location, birth.house_system) {
            Ok(cusps) => cusps,
            Err(e) => {
                log::warn!("{e}; using equal cusps from 0 deg Aries");
                fallback_cusps()
            }
        };

        Ok(Self {
            birth_jd,
            location: birth.location,
            house_system: birth.house_system,
            positions,
            cusps,
        })
    }

    /// UTC birth instant.
    pub const fn birth_jd(&self) -> JulianDay {
        self.birth_jd
    }

    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    pub const fn house_system(&self) -> HouseSystem {
        self.house_system
    }

    /// Natal ecliptic longitude of a body, in `[0, 360)`.
    pub const fn longitude(&self, body: Body) -> f64 {
        self.positions[body.index()]
    }

    /// All twelve house cusps, first house first.
    pub const fn cusps(&self) -> &[f64; 12] {
        &self.cusps
    }

    /// House number (1-12) a longitude falls in under this chart's cusps.
    pub fn house_of(&self, lon_deg: f64) -> u8 {
        house_of(&self.cusps, lon_deg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
