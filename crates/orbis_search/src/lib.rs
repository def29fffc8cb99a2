//! Transit search engine: aspect crossings between moving bodies and a
//! natal chart.
//!
//! This crate provides:
//! - Window sweep in one-day chunks with coarse in-orb detection
//! - Bisection refinement of each crossing to about ten seconds
//! - Applying/separating, retrograde, and house classification
//! - Significance scoring with an optional reporting floor
//! - Single-instant snapshots of every aspect currently in orb
//! - Flat export records for serialization

pub mod aspect;
pub mod error;
pub mod event;
pub(crate) mod refine;
pub(crate) mod scan;
pub mod significance;
pub mod snapshot;
pub mod transit;
pub mod transit_types;

pub use aspect::{ALL_ASPECTS, Aspect, AspectSelection, MAJOR_ASPECTS, MINOR_ASPECTS, orb_for};
pub use error::SearchError;
pub use event::{TransitEvent, TransitRecord};
pub use significance::significance_score;
pub use snapshot::{aspects_at, aspects_at_with_positions};
pub use transit::{compute_transits, month_transits};
pub use transit_types::TransitConfig;
