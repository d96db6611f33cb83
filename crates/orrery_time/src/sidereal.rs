//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! All angles are in degrees. The GMST polynomial takes a UT Julian Date
//! directly; no UT1 correction is applied.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, centuries_since_j2000};

/// Greenwich Mean Sidereal Time at a Julian Date, in degrees `[0, 360)`.
///
/// GMST = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///        + T²·(0.000387933 − T / 38710000)
pub fn gmst_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let gmst = 280.460_618_37
        + 360.985_647_366_29 * (jd - J2000_JD)
        + t * t * (0.000_387_933 - t / 38_710_000.0);
    wrap_360(gmst)
}

/// Local Sidereal Time from GMST and observer east longitude, in degrees `[0, 360)`.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    wrap_360(gmst_deg + longitude_east_deg)
}

/// `rem_euclid(360)` with a tiny negative input (which rounds up to
/// exactly 360.0) folded back to 0.0.
fn wrap_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
