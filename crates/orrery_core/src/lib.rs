//! Tracked celestial bodies and the ephemeris provider seam.
//!
//! This crate provides:
//! - [`Body`], the closed set of ten bodies placed on every chart
//! - [`EphemerisProvider`], the only abstraction boundary of the core
//! - [`KeplerianEphemeris`], a built-in low-precision analytical provider
//!
//! Providers return geocentric Cartesian vectors referred to the J2000
//! mean equator. Rotation to the ecliptic happens downstream.

pub mod elements;
pub mod error;
pub mod kepler;
pub mod moon;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use error::{ParseBodyError, ProviderError};
pub use kepler::{KeplerConfig, KeplerianEphemeris};

/// Bodies placed on every chart.
///
/// The set is closed; charts store one slot per body indexed by
/// [`Body::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All tracked bodies in chart order (0 = Sun, 9 = Pluto).
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// 0-based chart index (Sun=0 .. Pluto=9).
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Astronomical symbol.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Uranus => "♅",
            Self::Neptune => "♆",
            Self::Pluto => "♇",
        }
    }

    /// All tracked bodies in chart order.
    pub const fn all() -> &'static [Body; 10] {
        &ALL_BODIES
    }
}

impl Display for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = ParseBodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBodyError(s.to_string()))
    }
}

/// Source of geocentric body positions.
///
/// Implementations return a Cartesian vector from the geocenter to the
/// body, referred to the J2000 mean equator, in any consistent distance
/// unit. Light-time, aberration and epoch handling are the provider's
/// concern.
pub trait EphemerisProvider: Send + Sync {
    fn geocentric_vector(
        &self,
        body: Body,
        instant: DateTime<Utc>,
    ) -> Result<[f64; 3], ProviderError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn geocentric_vector(
        &self,
        body: Body,
        instant: DateTime<Utc>,
    ) -> Result<[f64; 3], ProviderError> {
        (**self).geocentric_vector(body, instant)
    }
}
