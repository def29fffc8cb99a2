//! Natal chart assembly: birth data in, fixed positions and houses out.
//!
//! This crate provides:
//! - Validated birth data types ([`BirthData`], [`GeoLocation`])
//! - Provider seams for house cusps and timezone resolution
//! - Whole-sign and equal house construction, plus house lookup
//! - [`NatalChart`], the frozen chart a transit scan runs against
//!
//! Charts are assembled once and never mutated; the scan layer reads
//! natal longitudes and cusps from them on every step.

pub mod chart_types;
pub mod error;
pub mod houses;
pub mod natal;
pub mod providers;

pub use chart_types::{BirthData, GeoLocation, HouseSystem};
pub use error::{ChartError, CuspError};
pub use houses::{equal_cusps, fallback_cusps, house_of, whole_sign_cusps};
pub use natal::NatalChart;
pub use providers::{CuspSource, TimezoneResolver, UtcZone};
