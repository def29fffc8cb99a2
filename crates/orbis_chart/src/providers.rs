//! Provider seams for house cusps and timezone resolution.
//!
//! Both concerns need data the core workspace deliberately does not
//! carry (ephemeris house math, timezone boundary tables), so they sit
//! behind traits the caller implements or pulls from a provider crate.

use orbis_time::{JulianDay, UtcTime};

use crate::chart_types::{GeoLocation, HouseSystem};
use crate::error::CuspError;

/// Computes house cusps for a chart.
///
/// Implementations typically wrap an ephemeris library's house engine.
/// For [`HouseSystem::WholeSign`] a provider only needs the Ascendant;
/// [`whole_sign_cusps`](crate::houses::whole_sign_cusps) builds the
/// table from it.
pub trait CuspSource: Send + Sync {
    /// Twelve cusp longitudes in degrees, first house first.
    fn house_cusps(
        &self,
        at: JulianDay,
        location: GeoLocation,
        system: HouseSystem,
    ) -> Result<[f64; 12], CuspError>;
}

/// Resolves a civil birth time to a UTC offset.
///
/// Returns the offset in seconds east of UTC in effect at the given
/// location and civil instant, or `None` when the resolver cannot tell
/// (chart assembly then treats the civil time as already UTC).
pub trait TimezoneResolver: Send + Sync {
    fn utc_offset_seconds(&self, location: GeoLocation, civil: UtcTime) -> Option<i32>;
}

/// Resolver that treats every civil time as already UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcZone;

impl TimezoneResolver for UtcZone {
    fn utc_offset_seconds(&self, _location: GeoLocation, _civil: UtcTime) -> Option<i32> {
        Some(0)
    }
}
