//! Coarse stepping over a day chunk and event capture.

use std::collections::HashSet;

use orbis_chart::NatalChart;
use orbis_ephem::{ALL_BODIES, Body, Ephemeris};
use orbis_math::{angular_separation, normalize_360};
use orbis_time::JulianDay;

use crate::aspect::{Aspect, orb_for};
use crate::error::SearchError;
use crate::event::TransitEvent;
use crate::refine::{aspect_deviation, refine_crossing};
use crate::significance::significance_score;
use crate::transit_types::TransitConfig;

/// How far ahead the applying classifier samples, in days (3 h).
pub(crate) const APPLYING_LOOKAHEAD_DAYS: f64 = 0.125;

/// Whether the contact is still tightening at `at`: the deviation from
/// exact must be smaller three hours later than it is now.
pub(crate) fn classify_applying<E: Ephemeris>(
    oracle: &E,
    body: Body,
    natal_lon: f64,
    exact_angle: f64,
    at: JulianDay,
) -> Result<bool, SearchError> {
    let now = normalize_360(oracle.position_and_speed(body, at)?.longitude_deg);
    let later = normalize_360(
        oracle
            .position_and_speed(body, at.add_days(APPLYING_LOOKAHEAD_DAYS))?
            .longitude_deg,
    );
    let dev_now = (angular_separation(now, natal_lon) - exact_angle).abs();
    let dev_later = (angular_separation(later, natal_lon) - exact_angle).abs();
    Ok(dev_later < dev_now)
}

/// Scan one day chunk `[day_start, day_end)` at the configured step,
/// recording at most one event per (transiting, aspect, natal) triple.
///
/// A triple is marked seen only once an event is actually recorded, so a
/// candidate whose refinement finds no genuine crossing is retried at
/// later in-orb steps of the same chunk.
pub(crate) fn scan_day<E: Ephemeris>(
    oracle: &E,
    chart: &NatalChart,
    day_start: JulianDay,
    day_end: JulianDay,
    config: &TransitConfig,
    events: &mut Vec<TransitEvent>,
) -> Result<(), SearchError> {
    let aspects = config.aspects.aspects();
    let step = config.step_days();
    let mut seen: HashSet<(Body, Aspect, Body)> = HashSet::new();

    let mut t = day_start;
    while t < day_end {
        for body in ALL_BODIES {
            let state = oracle.position_and_speed(body, t)?;
            let trans_lon = normalize_360(state.longitude_deg);
            let is_retrograde = state.speed_deg_per_day < 0.0;

            for natal_body in ALL_BODIES {
                let natal_lon = chart.longitude(natal_body);

                for &aspect in aspects {
                    let orb_limit = orb_for(aspect, body, natal_body, config.orb_scale);
                    let deviation =
                        (angular_separation(trans_lon, natal_lon) - aspect.exact_angle()).abs();
                    if deviation > orb_limit {
                        continue;
                    }
                    let key = (body, aspect, natal_body);
                    if seen.contains(&key) {
                        continue;
                    }

                    let deviation_at = |at: JulianDay| -> Result<f64, SearchError> {
                        let lon = normalize_360(oracle.position_and_speed(body, at)?.longitude_deg);
                        Ok(aspect_deviation(lon, natal_lon, aspect.exact_angle()))
                    };
                    let Some(instant) = refine_crossing(day_start, day_end, &deviation_at)? else {
                        continue;
                    };
                    // Keep instants inside the half-open chunk; a crossing
                    // refined onto the chunk end belongs to the next chunk.
                    if instant >= day_end {
                        continue;
                    }

                    let lon_exact =
                        normalize_360(oracle.position_and_speed(body, instant)?.longitude_deg);
                    let is_applying =
                        match classify_applying(oracle, body, natal_lon, aspect.exact_angle(), instant)
                        {
                            Ok(applying) => applying,
                            Err(e) => {
                                log::debug!(
                                    "applying check failed for {body} {} {natal_body} ({e}); assuming applying",
                                    aspect.name()
                                );
                                true
                            }
                        };
                    let significance =
                        significance_score(body, natal_body, deviation, orb_limit, is_applying);

                    seen.insert(key);
                    events.push(TransitEvent {
                        transiting: body,
                        natal: natal_body,
                        aspect,
                        instant,
                        longitude_deg: lon_exact,
                        orb_deg: deviation,
                        is_retrograde,
                        is_applying,
                        house: chart.house_of(lon_exact),
                        significance,
                    });
                }
            }
        }
        t = t.add_days(step);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
