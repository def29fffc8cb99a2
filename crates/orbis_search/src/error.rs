//! Error types for transit search.

use orbis_ephem::EphemerisError;
use orbis_time::TimeError;

/// Errors from transit scanning and snapshot queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Scan configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// An aspect name did not match the catalog.
    #[error("unknown aspect: {0}")]
    UnknownAspect(String),
    /// The position oracle failed mid-scan.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// A detected instant could not be converted to calendar form.
    #[error("time conversion error: {0}")]
    Time(#[from] TimeError),
}
