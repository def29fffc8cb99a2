//! Angle arithmetic and zodiac positioning shared by every layer of the
//! workspace.
//!
//! This crate provides:
//! - Circular normalization and separation helpers for ecliptic longitudes
//! - Zodiac sign lookup and degree/minute formatting
//!
//! Everything here is pure math on `f64` degrees; no ephemeris access.

pub mod angle;
pub mod sign;

pub use angle::{Dm, angular_separation, deg_to_dm, normalize_360, normalize_to_pm180};
pub use sign::{ALL_SIGNS, ZodiacSign, sign_from_longitude, sign_position, sign_position_label};
