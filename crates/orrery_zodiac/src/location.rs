//! Validated observer inputs.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::error::ZodiacError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location, rejecting non-finite or out-of-range coordinates.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ZodiacError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(ZodiacError::InvalidInput(format!(
                "latitude must be within [-90, 90], got {latitude_deg}"
            )));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(ZodiacError::InvalidInput(format!(
                "longitude must be within [-180, 180], got {longitude_deg}"
            )));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// East-positive longitude in degrees.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
}

/// An instant paired with the place it was observed from.
///
/// The instant is normalized to UTC on construction, so callers may pass
/// any `chrono` time zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoInstant {
    pub instant: DateTime<Utc>,
    pub location: GeoLocation,
}

impl GeoInstant {
    pub fn new<Tz: TimeZone>(instant: &DateTime<Tz>, location: GeoLocation) -> Self {
        Self {
            instant: instant.with_timezone(&Utc),
            location,
        }
    }
}
