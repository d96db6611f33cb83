//! Frame conversion helpers for the celestial-position core.
//!
//! Provides the mean-obliquity rotation between the J2000 mean equator and
//! the ecliptic, and Cartesian ↔ spherical conversion.

pub mod obliquity;
pub mod rotation;
pub mod spherical;

pub use obliquity::{COS_OBL, MEAN_OBLIQUITY_DEG, MEAN_OBLIQUITY_RAD, SIN_OBL};
pub use rotation::{ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
