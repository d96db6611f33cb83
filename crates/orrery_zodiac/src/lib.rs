//! Zodiac mapping, ascendant computation, and chart assembly.
//!
//! This crate provides:
//! - Longitude → tropical sign mapping ([`sign_position`], [`sign_of`])
//! - The ascendant from instant and place ([`ascendant`])
//! - Per-body resolution through an [`orrery_core::EphemerisProvider`]
//! - Natal and transit [`ChartRecord`]s via [`ChartBuilder`]
//!
//! All operations are pure functions of their inputs and the provider.

pub mod ascendant;
pub mod chart;
pub mod error;
pub mod location;
pub mod resolver;
pub mod sign;
pub mod util;

pub use ascendant::{
    AscendantConfig, DEFAULT_POLAR_LIMIT_DEG, ascendant, ascendant_from_lst_deg,
    ascendant_longitude_deg, ascendant_position_with,
};
pub use chart::{AscendantSlot, ChartBuilder, ChartKind, ChartPair, ChartRecord, ChartWarning};
pub use error::ZodiacError;
pub use location::{GeoInstant, GeoLocation};
pub use resolver::{Placement, ecliptic_longitude, resolve};
pub use sign::{ALL_SIGNS, SignPosition, ZodiacSign, sign_of, sign_position};
pub use util::normalize_360;
