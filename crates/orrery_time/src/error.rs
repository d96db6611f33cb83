//! Error types for calendar and time-base conversions.

use thiserror::Error;

/// Errors from calendar → Julian Day conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The calendar fields do not describe a real Gregorian date.
    #[error("invalid calendar date: {year:04}-{month:02}-{day}")]
    InvalidCalendarDate { year: i32, month: u32, day: f64 },
    /// The conversion produced NaN or infinity.
    #[error("julian day is not finite")]
    NonFiniteJulianDay,
}
