//! Zodiac sign mapping.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at the vernal equinox (0°). Longitudes are tropical;
//! no ayanamsha is applied.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ZodiacError;
use crate::util::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Aries => "♈",
            Self::Taurus => "♉",
            Self::Gemini => "♊",
            Self::Cancer => "♋",
            Self::Leo => "♌",
            Self::Virgo => "♍",
            Self::Libra => "♎",
            Self::Scorpio => "♏",
            Self::Sagittarius => "♐",
            Self::Capricorn => "♑",
            Self::Aquarius => "♒",
            Self::Pisces => "♓",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Ecliptic longitude where the sign begins.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude placed within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Ecliptic longitude normalized to [0, 360).
    pub longitude_deg: f64,
    /// Degrees past the start of the sign, [0, 30).
    pub degrees_in_sign: f64,
}

impl Display for SignPosition {
    /// `14°03' Leo`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let total_minutes = (self.degrees_in_sign * 60.0).floor() as u32;
        write!(
            f,
            "{:>2}°{:02}' {}",
            total_minutes / 60,
            total_minutes % 60,
            self.sign
        )
    }
}

/// Place an ecliptic longitude within its sign.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
/// Non-finite input is rejected.
pub fn sign_position(longitude_deg: f64) -> Result<SignPosition, ZodiacError> {
    if !longitude_deg.is_finite() {
        return Err(ZodiacError::InvalidInput(format!(
            "ecliptic longitude must be finite, got {longitude_deg}"
        )));
    }
    let lon = normalize_360(longitude_deg);
    // lon is in [0, 360), so idx is at most 11.
    let idx = (lon / 30.0).floor() as usize;
    let sign = ALL_SIGNS[idx];
    Ok(SignPosition {
        sign,
        longitude_deg: lon,
        degrees_in_sign: lon - sign.start_deg(),
    })
}

/// Zodiac sign of an ecliptic longitude in degrees.
pub fn sign_of(longitude_deg: f64) -> Result<ZodiacSign, ZodiacError> {
    Ok(sign_position(longitude_deg)?.sign)
}
