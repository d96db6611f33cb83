//! Cartesian ↔ spherical coordinate conversion.
//!
//! Distances keep whatever unit the input vector carries (AU from the
//! built-in provider, km from most kernel-based providers).

use serde::{Deserialize, Serialize};

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin, in the input's unit.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// A zero vector maps to all-zero coordinates; callers that need to
/// distinguish that case check `distance` first.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    let lon = y.atan2(x).to_degrees().rem_euclid(360.0);
    let lat = (z / r).clamp(-1.0, 1.0).asin().to_degrees();

    SphericalCoords {
        // rem_euclid can round a tiny negative angle up to exactly 360.0
        lon_deg: if lon >= 360.0 { 0.0 } else { lon },
        lat_deg: lat,
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon = s.lon_deg.to_radians();
    let lat = s.lat_deg.to_radians();
    [
        s.distance * lat.cos() * lon.cos(),
        s.distance * lat.cos() * lon.sin(),
        s.distance * lat.sin(),
    ]
}
