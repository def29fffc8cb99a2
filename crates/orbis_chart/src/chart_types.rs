//! Birth data types consumed by chart assembly.

use orbis_time::UtcTime;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location, rejecting out-of-range coordinates.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ChartError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ChartError::InvalidBirthData(format!(
                "latitude {latitude_deg} outside [-90, 90]"
            )));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(ChartError::InvalidBirthData(format!(
                "longitude {longitude_deg} outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }
}

/// House systems a cusp provider may be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HouseSystem {
    /// Whole-sign houses: each house is one full sign, the first being
    /// the sign the Ascendant falls in. The default for transit work.
    #[default]
    WholeSign,
    Placidus,
    Koch,
    Equal,
}

impl HouseSystem {
    /// One-letter system code as used by common ephemeris libraries.
    pub const fn code(self) -> char {
        match self {
            Self::WholeSign => 'W',
            Self::Placidus => 'P',
            Self::Koch => 'K',
            Self::Equal => 'E',
        }
    }

    /// Convert a one-letter system code back into a [`HouseSystem`].
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(Self::WholeSign),
            'P' => Some(Self::Placidus),
            'K' => Some(Self::Koch),
            'E' => Some(Self::Equal),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeSign => "Whole Sign",
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::Equal => "Equal",
        }
    }
}

/// Everything needed to assemble a natal chart.
///
/// `civil` is the birth time as recorded on the certificate, in the local
/// civil clock. A [`TimezoneResolver`](crate::providers::TimezoneResolver)
/// turns it into UTC during chart assembly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub civil: UtcTime,
    pub location: GeoLocation,
    pub house_system: HouseSystem,
}

impl BirthData {
    /// Bundle birth data, validating the calendar fields up front.
    pub fn new(
        civil: UtcTime,
        location: GeoLocation,
        house_system: HouseSystem,
    ) -> Result<Self, ChartError> {
        civil
            .to_jd()
            .map_err(|e| ChartError::InvalidBirthData(e.to_string()))?;
        Ok(Self {
            civil,
            location,
            house_system,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_bounds() {
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(90.001, 0.0).is_err());
        assert!(GeoLocation::new(0.0, -180.001).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn house_system_codes_roundtrip() {
        for system in [
            HouseSystem::WholeSign,
            HouseSystem::Placidus,
            HouseSystem::Koch,
            HouseSystem::Equal,
        ] {
            assert_eq!(HouseSystem::from_code(system.code()), Some(system));
        }
        assert_eq!(HouseSystem::from_code('X'), None);
        assert_eq!(HouseSystem::default(), HouseSystem::WholeSign);
    }

    #[test]
    fn birth_data_validates_calendar() {
        let loc = GeoLocation::new(51.5, -0.1).unwrap();
        let good = UtcTime::new(1990, 1, 1, 12, 0, 0.0);
        assert!(BirthData::new(good, loc, HouseSystem::WholeSign).is_ok());

        let bad = UtcTime::new(1990, 2, 30, 12, 0, 0.0);
        let err = BirthData::new(bad, loc, HouseSystem::WholeSign);
        assert!(matches!(err, Err(ChartError::InvalidBirthData(_))));
    }
}
