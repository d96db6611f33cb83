//! Time-base conversions for the celestial-position core.
//!
//! This crate provides:
//! - Gregorian calendar → Julian Day conversion
//! - Julian centuries since J2000.0
//! - Greenwich Mean Sidereal Time and Local Sidereal Time in degrees

pub mod error;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, centuries_since_j2000, datetime_to_jd,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
