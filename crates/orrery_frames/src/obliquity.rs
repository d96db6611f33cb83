//! Mean obliquity of the ecliptic.
//!
//! A single fixed value is used everywhere: no precession of the ecliptic
//! and no nutation in obliquity.

/// Mean obliquity of the ecliptic at J2000.0, in degrees.
pub const MEAN_OBLIQUITY_DEG: f64 = 23.439_291_1;

/// Mean obliquity of the ecliptic at J2000.0, in radians.
pub const MEAN_OBLIQUITY_RAD: f64 = MEAN_OBLIQUITY_DEG * std::f64::consts::PI / 180.0;

/// `cos(ε)`, precomputed for the rotation matrices.
pub const COS_OBL: f64 = 0.917_482_062_146_321;

/// `sin(ε)`, precomputed for the rotation matrices.
pub const SIN_OBL: f64 = 0.397_777_155_753_990_5;
