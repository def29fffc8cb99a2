//! Single-instant aspect queries.
//!
//! Unlike a scan, a snapshot reports every aspect currently within orb —
//! nothing is refined, deduplicated, or filtered. The `orb_deg` of each
//! reported event is the deviation from exact at the queried instant,
//! and `instant` is the queried instant itself.

use orbis_chart::NatalChart;
use orbis_ephem::{ALL_BODIES, Body, Ephemeris};
use orbis_math::{angular_separation, normalize_360};
use orbis_time::JulianDay;

use crate::aspect::orb_for;
use crate::error::SearchError;
use crate::event::TransitEvent;
use crate::scan::classify_applying;
use crate::significance::significance_score;
use crate::transit_types::TransitConfig;

/// Every aspect within orb at one instant, for all ten bodies.
///
/// Only the `aspects` and `orb_scale` fields of the config are
/// consulted; `step_minutes` and `min_significance` are scan-only.
pub fn aspects_at<E: Ephemeris>(
    oracle: &E,
    chart: &NatalChart,
    at: JulianDay,
    config: &TransitConfig,
) -> Result<Vec<TransitEvent>, SearchError> {
    aspects_at_impl(oracle, chart, at, &[], config)
}

/// Like [`aspects_at`], but using pre-fetched longitudes for the listed
/// bodies instead of querying the oracle.
///
/// Supplied positions carry no speed, so those bodies are reported as
/// direct (`is_retrograde` false). Applying classification still samples
/// the oracle.
pub fn aspects_at_with_positions<E: Ephemeris>(
    oracle: &E,
    chart: &NatalChart,
    at: JulianDay,
    positions: &[(Body, f64)],
    config: &TransitConfig,
) -> Result<Vec<TransitEvent>, SearchError> {
    aspects_at_impl(oracle, chart, at, positions, config)
}

fn aspects_at_impl<E: Ephemeris>(
    oracle: &E,
    chart: &NatalChart,
    at: JulianDay,
    positions: &[(Body, f64)],
    config: &TransitConfig,
) -> Result<Vec<TransitEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let aspects = config.aspects.aspects();
    let mut events = Vec::new();

    for body in ALL_BODIES {
        let prefetched = positions
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, lon)| *lon);
        let (trans_lon, is_retrograde) = match prefetched {
            // Speed is unknowable from a bare longitude.
            Some(lon) => (normalize_360(lon), false),
            None => {
                let state = oracle.position_and_speed(body, at)?;
                (
                    normalize_360(state.longitude_deg),
                    state.speed_deg_per_day < 0.0,
                )
            }
        };

        for natal_body in ALL_BODIES {
            let natal_lon = chart.longitude(natal_body);

            for &aspect in aspects {
                let orb_limit = orb_for(aspect, body, natal_body, config.orb_scale);
                let deviation =
                    (angular_separation(trans_lon, natal_lon) - aspect.exact_angle()).abs();
                if deviation > orb_limit {
                    continue;
                }

                let is_applying =
                    classify_applying(oracle, body, natal_lon, aspect.exact_angle(), at)?;
                let significance =
                    significance_score(body, natal_body, deviation, orb_limit, is_applying);

                events.push(TransitEvent {
                    transiting: body,
                    natal: natal_body,
                    aspect,
                    instant: at,
                    longitude_deg: trans_lon,
                    orb_deg: deviation,
                    is_retrograde,
                    is_applying,
                    house: chart.house_of(trans_lon),
                    significance,
                });
            }
        }
    }
    Ok(events)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
