//! Ephemeris position resolution: provider vector → ecliptic longitude → sign.

use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;

use orrery_core::{Body, EphemerisProvider, ProviderError};
use orrery_frames::{cartesian_to_spherical, equatorial_to_ecliptic};

use crate::sign::{SignPosition, ZodiacSign, sign_position};

/// Outcome of resolving one body.
///
/// Provider failures are captured as data, so a chart can still be
/// assembled from the bodies that did resolve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Placement {
    Resolved(SignPosition),
    Unresolved { reason: String },
}

impl Placement {
    pub fn sign(&self) -> Option<ZodiacSign> {
        match self {
            Self::Resolved(pos) => Some(pos.sign),
            Self::Unresolved { .. } => None,
        }
    }

    pub fn position(&self) -> Option<&SignPosition> {
        match self {
            Self::Resolved(pos) => Some(pos),
            Self::Unresolved { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Geocentric ecliptic longitude of `body`, in degrees [0, 360).
///
/// Rotates the provider's equatorial vector by the mean obliquity and
/// drops latitude and distance.
pub fn ecliptic_longitude<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    instant: DateTime<Utc>,
) -> Result<f64, ProviderError> {
    let v = provider.geocentric_vector(body, instant)?;
    if !v.iter().all(|c| c.is_finite()) {
        return Err(ProviderError::DegenerateVector { body });
    }
    let ecl = cartesian_to_spherical(&equatorial_to_ecliptic(&v));
    if ecl.distance == 0.0 || !ecl.lon_deg.is_finite() {
        return Err(ProviderError::DegenerateVector { body });
    }
    Ok(ecl.lon_deg)
}

/// Resolve one body to its zodiac placement. Never fails: provider errors
/// become [`Placement::Unresolved`].
pub fn resolve<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    instant: DateTime<Utc>,
) -> Placement {
    let resolved = ecliptic_longitude(provider, body, instant)
        .map_err(|e| e.to_string())
        .and_then(|lon| sign_position(lon).map_err(|e| e.to_string()));
    match resolved {
        Ok(pos) => Placement::Resolved(pos),
        Err(reason) => {
            warn!("{body} unresolved at {instant}: {reason}");
            Placement::Unresolved { reason }
        }
    }
}
