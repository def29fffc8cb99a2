//! Property tests for refinement accuracy and scoring bounds.

use orbis_chart::{
    BirthData, CuspError, CuspSource, GeoLocation, HouseSystem, NatalChart, UtcZone,
};
use orbis_ephem::{ALL_BODIES, Body, BodyState, Ephemeris, EphemerisError};
use orbis_search::{
    Aspect, AspectSelection, TransitConfig, compute_transits, orb_for, significance_score,
};
use orbis_time::{JulianDay, TransitWindow, UtcTime};
use proptest::prelude::*;

struct LinearOracle {
    epoch: JulianDay,
    start: [f64; 10],
    speed: [f64; 10],
}

impl Ephemeris for LinearOracle {
    fn position_and_speed(&self, body: Body, at: JulianDay) -> Result<BodyState, EphemerisError> {
        let i = body.index();
        Ok(BodyState {
            longitude_deg: self.start[i] + self.speed[i] * at.days_since(self.epoch),
            speed_deg_per_day: self.speed[i],
        })
    }
}

struct EqualFromAries;

impl CuspSource for EqualFromAries {
    fn house_cusps(
        &self,
        _at: JulianDay,
        _location: GeoLocation,
        _system: HouseSystem,
    ) -> Result<[f64; 12], CuspError> {
        Ok(orbis_chart::fallback_cusps())
    }
}

fn natal_lattice() -> [f64; 10] {
    let mut lons = [0.0; 10];
    for (i, lon) in lons.iter_mut().enumerate() {
        *lon = (100.0 + 30.0 * i as f64) % 360.0;
    }
    lons
}

fn chart() -> NatalChart {
    let natal_oracle = LinearOracle {
        epoch: JulianDay::new(2_447_893.0),
        start: natal_lattice(),
        speed: [0.0; 10],
    };
    let birth = BirthData::new(
        UtcTime::new(1990, 1, 1, 12, 0, 0.0),
        GeoLocation::new(51.5, -0.1).unwrap(),
        HouseSystem::WholeSign,
    )
    .unwrap();
    NatalChart::compute(&birth, &natal_oracle, &EqualFromAries, &UtcZone).unwrap()
}

/// Mars alone in motion, timed to conjoin natal Mars (220) at `root`
/// days past the epoch; every other body parked off-aspect.
fn mars_crossing(slope: f64, root: f64, epoch: JulianDay) -> LinearOracle {
    let mut start = natal_lattice();
    for lon in start.iter_mut() {
        *lon += 11.0;
    }
    start[Body::Mars.index()] = 220.0 - slope * root;
    let mut speed = [0.0; 10];
    speed[Body::Mars.index()] = slope;
    LinearOracle {
        epoch,
        start,
        speed,
    }
}

fn conjunction_only(orb_scale: f64) -> TransitConfig {
    TransitConfig {
        aspects: AspectSelection::Custom(vec![Aspect::Conjunction]),
        orb_scale,
        ..TransitConfig::new()
    }
}

proptest! {
    /// Bisection lands within its convergence width, or within the
    /// distance the body covers while inside the early-exact band.
    #[test]
    fn prop_refined_instant_matches_linear_root(
        slope in 0.5..15.0f64,
        root in 0.1..0.9f64,
    ) {
        let epoch = JulianDay::new(2_448_000.0);
        let oracle = mars_crossing(slope, root, epoch);
        let window = TransitWindow::new(epoch, epoch.add_days(1.0)).unwrap();

        let events =
            compute_transits(&oracle, &chart(), window, &conjunction_only(1.0)).unwrap();
        prop_assert_eq!(events.len(), 1);

        let tol = 1e-4 + 0.001 / slope;
        let error = (events[0].instant.days_since(epoch) - root).abs();
        prop_assert!(error <= tol, "instant off by {} days (tol {})", error, tol);
    }

    #[test]
    fn prop_recorded_orb_respects_scaled_limit(
        slope in 0.5..15.0f64,
        root in 0.1..0.9f64,
        scale in 0.5..2.0f64,
    ) {
        let epoch = JulianDay::new(2_448_000.0);
        let oracle = mars_crossing(slope, root, epoch);
        let window = TransitWindow::new(epoch, epoch.add_days(1.0)).unwrap();

        let events =
            compute_transits(&oracle, &chart(), window, &conjunction_only(scale)).unwrap();
        prop_assert_eq!(events.len(), 1);

        let limit = orb_for(Aspect::Conjunction, Body::Mars, Body::Mars, scale);
        prop_assert!(events[0].orb_deg <= limit + 1e-9);
    }

    #[test]
    fn prop_significance_stays_in_bounds(
        t in 0usize..10,
        n in 0usize..10,
        orb in 0.0..10.0f64,
        max_orb in 0.1..15.0f64,
        applying: bool,
    ) {
        let score = significance_score(ALL_BODIES[t], ALL_BODIES[n], orb, max_orb, applying);
        prop_assert!(score >= 1.0 - 1e-9);
        prop_assert!(score <= 18.72 + 1e-9);
    }

    #[test]
    fn prop_significance_never_rewards_wider_orb(
        a in 0.0..7.0f64,
        b in 0.0..7.0f64,
    ) {
        let (tight, wide) = if a <= b { (a, b) } else { (b, a) };
        let tight_score = significance_score(Body::Mars, Body::Venus, tight, 7.0, false);
        let wide_score = significance_score(Body::Mars, Body::Venus, wide, 7.0, false);
        prop_assert!(tight_score >= wide_score - 1e-12);
    }
}
