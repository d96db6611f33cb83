//! Low-precision geocentric Moon position.
//!
//! Truncated trigonometric series for ecliptic longitude, latitude and
//! horizontal parallax. Accuracy is about 0.3° in longitude and 0.2° in
//! latitude, ample for 30° sign bands.
//!
//! Source: The Astronomical Almanac, "Low-precision formulas for the Moon"
//! (Section D). Series arguments are linear in `T`, centuries since J2000.0.

use orrery_frames::SphericalCoords;

/// Equatorial radius of the Earth in AU.
const EARTH_RADIUS_AU: f64 = 6378.14 / 149_597_870.7;

/// Accumulated general precession in longitude, degrees per century.
const PRECESSION_DEG_PER_CENTURY: f64 = 1.396_971;

/// Sum `amplitude · f(phase + rate · t)` over `[amplitude, phase_deg, rate_deg]` rows.
fn series(terms: &[[f64; 3]], t: f64, f: fn(f64) -> f64) -> f64 {
    terms
        .iter()
        .map(|[amp, phase, rate]| amp * f((phase + rate * t).to_radians()))
        .sum()
}

/// Geocentric ecliptic position of the Moon referred to the J2000 equinox.
///
/// `t` = Julian centuries since J2000.0. Distance is in AU.
pub fn moon_ecliptic_j2000(t: f64) -> SphericalCoords {
    #[rustfmt::skip]
    const LON: [[f64; 3]; 6] = [
        [ 6.29, 135.0,  477_198.87],
        [-1.27, 259.3, -413_335.36],
        [ 0.66, 235.7,  890_534.22],
        [ 0.21, 269.9,  954_397.74],
        [-0.19, 357.5,   35_999.05],
        [-0.11, 186.5,  966_404.03],
    ];
    #[rustfmt::skip]
    const LAT: [[f64; 3]; 4] = [
        [ 5.13,  93.3,  483_202.02],
        [ 0.28, 228.2,  960_400.89],
        [-0.28, 318.3,    6_003.15],
        [-0.17, 217.6, -407_332.21],
    ];
    #[rustfmt::skip]
    const PARALLAX: [[f64; 3]; 4] = [
        [0.0518, 135.0,  477_198.87],
        [0.0095, 259.3, -413_335.36],
        [0.0078, 235.7,  890_534.22],
        [0.0028, 269.9,  954_397.74],
    ];

    let lon_of_date = 218.32 + 481_267.881 * t + series(&LON, t, f64::sin);
    let lat = series(&LAT, t, f64::sin);
    let parallax = 0.9508 + series(&PARALLAX, t, f64::cos);

    SphericalCoords {
        lon_deg: (lon_of_date - PRECESSION_DEG_PER_CENTURY * t).rem_euclid(360.0),
        lat_deg: lat,
        distance: EARTH_RADIUS_AU / parallax.to_radians().sin(),
    }
}
