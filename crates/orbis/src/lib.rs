//! Convenience wrapper for the orbis transit search engine.
//!
//! Re-exports the public surface of the workspace crates so downstream
//! code depends on a single name: angle math, time scales, the ephemeris
//! oracle seam, natal chart assembly, and the transit search itself.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use orbis::*;
//!
//! let birth = BirthData::new(
//!     UtcTime::new(1990, 1, 1, 12, 0, 0.0),
//!     GeoLocation::new(51.5, -0.1)?,
//!     HouseSystem::WholeSign,
//! )?;
//! // `oracle` implements Ephemeris, `cusps` implements CuspSource.
//! let chart = NatalChart::compute(&birth, &oracle, &cusps, &UtcZone)?;
//!
//! let events = month_transits(&oracle, &chart, 2026, 3, &TransitConfig::new())?;
//! for event in &events {
//!     let record = event.to_record()?;
//!     println!("{} {} {}", record.date, record.time, record.aspect_symbol);
//! }
//! ```

// Primary re-exports — users should only need `use orbis::*`.
pub use orbis_search::{
    ALL_ASPECTS, Aspect, AspectSelection, MAJOR_ASPECTS, MINOR_ASPECTS, SearchError,
    TransitConfig, TransitEvent, TransitRecord, aspects_at, aspects_at_with_positions,
    compute_transits, month_transits, orb_for, significance_score,
};

// Chart assembly and its provider seams.
pub use orbis_chart::{
    BirthData, ChartError, CuspError, CuspSource, GeoLocation, HouseSystem, NatalChart,
    TimezoneResolver, UtcZone,
};

// The ephemeris oracle seam and body catalog.
pub use orbis_ephem::{ALL_BODIES, Body, BodyState, Ephemeris, EphemerisError};

// Time scales and scan windows.
pub use orbis_time::{JulianDay, TimeError, TransitWindow, UtcTime};

// Angle helpers, useful when post-processing event longitudes.
pub use orbis_math::{
    ZodiacSign, angular_separation, deg_to_dm, normalize_360, sign_from_longitude,
    sign_position_label,
};
