//! Eight-bucket Moon phase approximation from a calendar date.
//!
//! The lunation fraction comes from a closed-form calendar formula, not an
//! ephemeris. It drifts against the true phase over long spans and only
//! resolves eight discrete states: every day inside one bucket maps to the
//! same record.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_2;

/// Day-count offset that puts a known new moon at lunation fraction zero.
const EPOCH_OFFSET_DAYS: f64 = 694_039.09;

/// The eight phase buckets, in lunation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All 8 phases in order (0 = New Moon, 7 = Waning Crescent).
pub const ALL_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

struct PhaseInfo {
    name: &'static str,
    glyph: &'static str,
    mood: &'static str,
    dream: &'static str,
    illumination_percent: u8,
    age_days: u8,
}

static PHASE_TABLE: [PhaseInfo; 8] = [
    PhaseInfo {
        name: "New Moon",
        glyph: "🌑",
        mood: "Quiet, inward, ready to begin again",
        dream: "Dreams of seeds, empty rooms and unopened doors point to fresh intentions",
        illumination_percent: 0,
        age_days: 1,
    },
    PhaseInfo {
        name: "Waxing Crescent",
        glyph: "🌒",
        mood: "Hopeful and tentatively curious",
        dream: "Small lights and first steps in dreams reflect plans taking shape",
        illumination_percent: 25,
        age_days: 4,
    },
    PhaseInfo {
        name: "First Quarter",
        glyph: "🌓",
        mood: "Restless, decisive, pushing through resistance",
        dream: "Crossroads and closed gates in dreams mark choices that need commitment",
        illumination_percent: 50,
        age_days: 7,
    },
    PhaseInfo {
        name: "Waxing Gibbous",
        glyph: "🌔",
        mood: "Focused and refining the details",
        dream: "Building, repairing or rehearsing in dreams suggests work nearly finished",
        illumination_percent: 75,
        age_days: 11,
    },
    PhaseInfo {
        name: "Full Moon",
        glyph: "🌕",
        mood: "Heightened, emotional, fully visible",
        dream: "Vivid, crowded dreams bring hidden feelings into the open",
        illumination_percent: 100,
        age_days: 15,
    },
    PhaseInfo {
        name: "Waning Gibbous",
        glyph: "🌖",
        mood: "Grateful and reflective",
        dream: "Teachers, letters and shared meals in dreams invite passing on what was learned",
        illumination_percent: 75,
        age_days: 19,
    },
    PhaseInfo {
        name: "Last Quarter",
        glyph: "🌗",
        mood: "Clearing out, forgiving, letting go",
        dream: "Moving house or losing objects in dreams signals release of old patterns",
        illumination_percent: 50,
        age_days: 22,
    },
    PhaseInfo {
        name: "Waning Crescent",
        glyph: "🌘",
        mood: "Tired, tender, in need of rest",
        dream: "Soft, fading or half-remembered dreams ask for stillness before the next cycle",
        illumination_percent: 25,
        age_days: 26,
    },
];

impl MoonPhase {
    /// Index in lunation order (0 = New Moon).
    pub const fn index(self) -> u8 {
        self as u8
    }

    fn info(self) -> &'static PhaseInfo {
        &PHASE_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn glyph(self) -> &'static str {
        self.info().glyph
    }

    /// Illuminated fraction of the disc in percent: one of 0, 25, 50, 75, 100.
    pub fn illumination_percent(self) -> u8 {
        self.info().illumination_percent
    }

    /// Representative Moon age in days for the bucket.
    pub fn age_days(self) -> u8 {
        self.info().age_days
    }

    /// Phase for a bucket index; 8 and above wrap modulo 8.
    pub const fn from_bucket(bucket: u32) -> Self {
        ALL_PHASES[(bucket % 8) as usize]
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything shown for one day's Moon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoonPhaseRecord {
    pub phase: MoonPhase,
    pub name: &'static str,
    pub glyph: &'static str,
    pub mood: &'static str,
    pub dream: &'static str,
    pub illumination_percent: u8,
    pub age_days: u8,
    pub date: NaiveDate,
    /// Display label, set only on forecast entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MoonPhaseRecord {
    fn new(phase: MoonPhase, date: NaiveDate) -> Self {
        let info = phase.info();
        Self {
            phase,
            name: info.name,
            glyph: info.glyph,
            mood: info.mood,
            dream: info.dream,
            illumination_percent: info.illumination_percent,
            age_days: info.age_days,
            date,
            label: None,
        }
    }
}

/// Position within the current lunation, in [0, 1). 0 is new moon.
pub fn lunation_fraction(date: NaiveDate) -> f64 {
    let (mut year, mut month) = (date.year(), date.month());
    if month < 3 {
        year -= 1;
        month += 12;
    }
    let days = 365.25 * f64::from(year) + 30.6 * f64::from(month + 1) + f64::from(date.day())
        - EPOCH_OFFSET_DAYS;
    let cycles = days / SYNODIC_MONTH_DAYS;
    cycles - cycles.floor()
}

/// Phase bucket of a date: `round(8·f)`, with 8 wrapping to New Moon.
pub fn phase_of(date: NaiveDate) -> MoonPhase {
    let bucket = (lunation_fraction(date) * 8.0).round() as u32;
    MoonPhase::from_bucket(bucket)
}

/// Moon phase record for a calendar date. Pure: equal dates give equal records.
pub fn phase_for(date: NaiveDate) -> MoonPhaseRecord {
    MoonPhaseRecord::new(phase_of(date), date)
}
