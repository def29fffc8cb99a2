//! Error types for chart assembly.

use orbis_ephem::EphemerisError;

/// Errors from natal-chart assembly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth data failed validation (calendar fields, coordinates).
    #[error("invalid birth data: {0}")]
    InvalidBirthData(String),
    /// The position oracle failed while computing natal positions.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}

/// Error reported by a [`CuspSource`](crate::providers::CuspSource)
/// provider. Chart assembly treats it as non-fatal and falls back to
/// equal cusps from 0 degrees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("house calculation failed: {0}")]
pub struct CuspError(pub String);
