//! Gregorian calendar → Julian Day conversion.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.
//! Valid for all Gregorian dates; no Julian-calendar switch before 1582.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Meeus 7.1 without range checks. `day_frac` carries the time of day.
fn jd_from_fields(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day_frac` is the day of month with the time of day as a fraction,
/// e.g. `1.5` is the 1st at 12:00. Values up to one day past the 31st
/// are accepted so that a leap second at month end still converts.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> Result<f64, TimeError> {
    if !(1..=12).contains(&month) || !day_frac.is_finite() || !(1.0..33.0).contains(&day_frac) {
        return Err(TimeError::InvalidCalendarDate {
            year,
            month,
            day: day_frac,
        });
    }
    let jd = jd_from_fields(year, month, day_frac);
    if jd.is_finite() {
        Ok(jd)
    } else {
        Err(TimeError::NonFiniteJulianDay)
    }
}

/// Julian Date of an instant, after normalizing it to UTC.
///
/// Sub-second precision is kept down to the nanosecond field. A leap
/// second (`nanosecond >= 1e9`) is folded into the following second.
pub fn datetime_to_jd<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<f64, TimeError> {
    let utc = instant.with_timezone(&Utc);
    let seconds = utc.second() as f64 + utc.nanosecond() as f64 / 1e9;
    let hours = utc.hour() as f64 + utc.minute() as f64 / 60.0 + seconds / 3600.0;
    calendar_to_jd(utc.year(), utc.month(), utc.day() as f64 + hours / 24.0)
}

/// Julian centuries elapsed since J2000.0: `(JD − 2451545.0) / 36525`.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
