//! Moon phase approximation for calendar dates.
//!
//! This crate provides:
//! - [`phase_for`]: one of eight discrete phases for a date
//! - [`forecast`]: the same record for each of the following `n` days
//!
//! No ephemeris is consulted; see [`phase`] for the approximation used.

pub mod error;
pub mod forecast;
pub mod phase;

pub use error::LunarError;
pub use forecast::{
    DEFAULT_LABEL_FORMAT, DEFAULT_MAX_DAYS, Forecast, ForecastConfig, forecast, forecast_with,
    format_label,
};
pub use phase::{
    ALL_PHASES, MoonPhase, MoonPhaseRecord, SYNODIC_MONTH_DAYS, lunation_fraction, phase_for,
    phase_of,
};
