//! Detected transit events and their flattened record form.

use orbis_ephem::Body;
use orbis_math::sign_position_label;
use orbis_time::{JulianDay, UtcTime};
use serde::{Deserialize, Serialize};

use crate::aspect::Aspect;
use crate::error::SearchError;

/// One detected transit: a transiting body crossing an exact aspect to a
/// natal position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitEvent {
    pub transiting: Body,
    pub natal: Body,
    pub aspect: Aspect,
    /// Refined instant of exactness (UTC-based Julian Date).
    pub instant: JulianDay,
    /// Transiting body's longitude at `instant`, in `[0, 360)`.
    pub longitude_deg: f64,
    /// Deviation from exact at the coarse step that detected the event,
    /// in degrees.
    pub orb_deg: f64,
    /// Whether the transiting body was retrograde at the detecting step.
    pub is_retrograde: bool,
    /// Whether the contact was still tightening at `instant`.
    pub is_applying: bool,
    /// House (1-12) the transiting body occupies in the natal chart.
    pub house: u8,
    pub significance: f64,
}

impl TransitEvent {
    /// Flatten into the report record shape, resolving the instant to
    /// calendar date and time strings.
    pub fn to_record(&self) -> Result<TransitRecord, SearchError> {
        let stamp = UtcTime::from_jd(self.instant)?;
        Ok(TransitRecord {
            date: stamp.date_string(),
            time: stamp.time_string(),
            transit_planet: self.transiting.name().to_string(),
            aspect: self.aspect.name().to_string(),
            aspect_symbol: self.aspect.symbol().to_string(),
            natal_planet: self.natal.name().to_string(),
            orb: self.orb_deg,
            jd: self.instant.value(),
            is_retrograde: self.is_retrograde,
            is_applying: self.is_applying,
            transit_planet_symbol: self.transiting.symbol().to_string(),
            natal_planet_symbol: self.natal.symbol().to_string(),
            planet_abbr: self.natal.name().to_string(),
            house: format!("H{}", self.house),
            house_number: self.house,
            position: sign_position_label(self.longitude_deg),
            longitude: self.longitude_deg,
            significance: self.significance,
        })
    }
}

/// Flat, string-heavy record shape consumed by report templates and
/// JSON clients. Field names are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRecord {
    /// Calendar date of exactness, `YYYY-MM-DD`.
    pub date: String,
    /// Time of exactness, `HH:MM`.
    pub time: String,
    pub transit_planet: String,
    pub aspect: String,
    pub aspect_symbol: String,
    pub natal_planet: String,
    pub orb: f64,
    pub jd: f64,
    pub is_retrograde: bool,
    pub is_applying: bool,
    pub transit_planet_symbol: String,
    pub natal_planet_symbol: String,
    /// Legacy column: duplicates `natal_planet`.
    pub planet_abbr: String,
    /// House label, `H1` through `H12`.
    pub house: String,
    pub house_number: u8,
    /// Zodiac position label, e.g. `♋ 10°30'`.
    pub position: String,
    pub longitude: f64,
    pub significance: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> TransitEvent {
        TransitEvent {
            transiting: Body::Mars,
            natal: Body::Sun,
            aspect: Aspect::Square,
            // 1990-01-01T12:00:00Z.
            instant: JulianDay::new(2_447_893.0),
            longitude_deg: 100.5,
            orb_deg: 0.25,
            is_retrograde: false,
            is_applying: true,
            house: 4,
            significance: 12.1,
        }
    }

    #[test]
    fn record_flattens_names_and_labels() {
        let record = sample_event().to_record().unwrap();
        assert_eq!(record.date, "1990-01-01");
        assert_eq!(record.time, "12:00");
        assert_eq!(record.transit_planet, "Mars");
        assert_eq!(record.natal_planet, "Sun");
        assert_eq!(record.aspect, "square");
        assert_eq!(record.aspect_symbol, "\u{25a1}");
        assert_eq!(record.transit_planet_symbol, "\u{2642}");
        assert_eq!(record.natal_planet_symbol, "\u{2609}");
        assert_eq!(record.planet_abbr, "Sun");
        assert_eq!(record.house, "H4");
        assert_eq!(record.house_number, 4);
        assert_eq!(record.position, "\u{264b} 10\u{b0}30'");
        assert!((record.jd - 2_447_893.0).abs() < 1e-9);
        assert!((record.orb - 0.25).abs() < 1e-12);
        assert!((record.longitude - 100.5).abs() < 1e-12);
    }

    #[test]
    fn record_serializes_wire_field_names() {
        let record = sample_event().to_record().unwrap();
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "date",
            "time",
            "transit_planet",
            "aspect",
            "aspect_symbol",
            "natal_planet",
            "orb",
            "jd",
            "is_retrograde",
            "is_applying",
            "transit_planet_symbol",
            "natal_planet_symbol",
            "planet_abbr",
            "house",
            "house_number",
            "position",
            "longitude",
            "significance",
        ] {
            assert!(object.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(object.len(), 18);
    }

    #[test]
    fn event_json_uses_lowercase_aspects() {
        let value = serde_json::to_value(sample_event()).unwrap();
        assert_eq!(value["aspect"], "square");
        assert_eq!(value["transiting"], "Mars");
    }
}
