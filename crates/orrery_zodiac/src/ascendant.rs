//! Ascendant (rising ecliptic point) computation.
//!
//! Chain: instant → JD (UTC) → GMST → LST → ascendant longitude → sign.
//! Obliquity is the fixed mean value from [`orrery_frames`]; no nutation.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12–13;
//! standard spherical astronomy (Montenbruck & Pfleger).

use chrono::{DateTime, TimeZone};
use log::debug;
use orrery_frames::{COS_OBL, SIN_OBL};
use orrery_time::{datetime_to_jd, gmst_deg, local_sidereal_time_deg};

use crate::error::ZodiacError;
use crate::location::{GeoInstant, GeoLocation};
use crate::sign::{SignPosition, ZodiacSign, sign_position};
use crate::util::normalize_360;

/// Latitude beyond which `tan(φ)` makes the ascendant meaningless.
pub const DEFAULT_POLAR_LIMIT_DEG: f64 = 89.9;

/// Settings for the ascendant computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscendantConfig {
    /// Largest |latitude| accepted, in degrees. Must lie in (0, 90).
    pub polar_limit_deg: f64,
}

impl Default for AscendantConfig {
    fn default() -> Self {
        Self {
            polar_limit_deg: DEFAULT_POLAR_LIMIT_DEG,
        }
    }
}

/// Ecliptic longitude of the ascendant from LST and latitude, in degrees.
///
/// Formula:
/// `Asc = atan2(cos(LST), −(sin(ε)·tan(φ) + cos(ε)·sin(LST)))`
///
/// Returns a value in [0, 360), or NaN if the inputs are non-finite.
pub fn ascendant_from_lst_deg(lst_deg: f64, latitude_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(lst.cos(), -(SIN_OBL * phi.tan() + COS_OBL * lst.sin()));
    normalize_360(asc.to_degrees())
}

/// Ascendant as a position within its sign, using explicit settings.
pub fn ascendant_position_with(
    config: &AscendantConfig,
    at: &GeoInstant,
) -> Result<SignPosition, ZodiacError> {
    let limit = config.polar_limit_deg;
    if !limit.is_finite() || limit <= 0.0 || limit >= 90.0 {
        return Err(ZodiacError::InvalidInput(format!(
            "polar limit must lie in (0, 90), got {limit}"
        )));
    }
    let lat = at.location.latitude_deg();
    if lat.abs() > limit {
        return Err(ZodiacError::DegenerateAscendant(format!(
            "latitude {lat} is beyond the polar limit of {limit}"
        )));
    }

    let jd = datetime_to_jd(&at.instant)?;
    let gmst = gmst_deg(jd);
    let lst = local_sidereal_time_deg(gmst, at.location.longitude_deg());
    let asc = ascendant_from_lst_deg(lst, lat);
    debug!("ascendant: jd={jd:.6} gmst={gmst:.6} lst={lst:.6} lat={lat} asc={asc:.6}");

    if !asc.is_finite() {
        return Err(ZodiacError::DegenerateAscendant(format!(
            "non-finite ascendant at jd {jd}, lst {lst}, latitude {lat}"
        )));
    }
    sign_position(asc)
}

/// Ascendant ecliptic longitude in degrees [0, 360) with default settings.
pub fn ascendant_longitude_deg<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, ZodiacError> {
    let at = GeoInstant::new(instant, GeoLocation::new(latitude_deg, longitude_deg)?);
    Ok(ascendant_position_with(&AscendantConfig::default(), &at)?.longitude_deg)
}

/// Zodiac sign rising on the eastern horizon.
///
/// Fails with [`ZodiacError::InvalidInput`] for out-of-range coordinates and
/// [`ZodiacError::DegenerateAscendant`] near the poles. Never substitutes a
/// default sign.
pub fn ascendant<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<ZodiacSign, ZodiacError> {
    let at = GeoInstant::new(instant, GeoLocation::new(latitude_deg, longitude_deg)?);
    Ok(ascendant_position_with(&AscendantConfig::default(), &at)?.sign)
}
