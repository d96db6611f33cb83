//! Rotation between the J2000 mean equator and the ecliptic.
//!
//! A single rotation about the x-axis by the mean obliquity ε:
//!
//! ```text
//! | x_ecl |   | 1     0       0    | | x_eq |
//! | y_ecl | = | 0   cos ε   sin ε  | | y_eq |
//! | z_ecl |   | 0  −sin ε   cos ε  | | z_eq |
//! ```

use crate::obliquity::{COS_OBL, SIN_OBL};

/// Rotate an equatorial Cartesian vector into the ecliptic frame.
pub fn equatorial_to_ecliptic(v: &[f64; 3]) -> [f64; 3] {
    [
        v[0],
        COS_OBL * v[1] + SIN_OBL * v[2],
        -SIN_OBL * v[1] + COS_OBL * v[2],
    ]
}

/// Rotate an ecliptic Cartesian vector into the equatorial frame.
pub fn ecliptic_to_equatorial(v: &[f64; 3]) -> [f64; 3] {
    [
        v[0],
        COS_OBL * v[1] - SIN_OBL * v[2],
        SIN_OBL * v[1] + COS_OBL * v[2],
    ]
}
