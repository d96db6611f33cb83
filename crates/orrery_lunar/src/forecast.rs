//! Day-by-day Moon phase forecasts.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate};
use log::debug;

use crate::error::LunarError;
use crate::phase::{MoonPhaseRecord, phase_for};

/// Default label: short weekday, short month, unpadded day (`Fri, Jan 12`).
pub const DEFAULT_LABEL_FORMAT: &str = "%a, %b %-d";

/// Longest forecast accepted by default.
pub const DEFAULT_MAX_DAYS: u32 = 366;

/// Settings for [`forecast_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastConfig {
    /// `strftime`-style pattern for each entry's label.
    pub label_format: String,
    /// Largest `n_days` accepted.
    pub max_days: u32,
}

impl ForecastConfig {
    /// Check that `max_days` is positive and that the label pattern can
    /// be rendered from a calendar date alone.
    pub fn validate(&self) -> Result<(), LunarError> {
        if self.max_days == 0 {
            return Err(LunarError::InvalidInput(
                "max_days must be positive".to_string(),
            ));
        }
        format_label(&self.label_format, NaiveDate::default()).map(|_| ())
    }
}

/// Render a forecast label for `date`.
///
/// Fails for patterns chrono cannot parse and for fields a date does not
/// carry (`%H`, `%z`, ...).
pub fn format_label(pattern: &str, date: NaiveDate) -> Result<String, LunarError> {
    let unsupported =
        || LunarError::InvalidInput(format!("unsupported label format: {pattern:?}"));
    if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(unsupported());
    }
    let mut label = String::new();
    write!(label, "{}", date.format(pattern)).map_err(|_| unsupported())?;
    Ok(label)
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            label_format: DEFAULT_LABEL_FORMAT.to_string(),
            max_days: DEFAULT_MAX_DAYS,
        }
    }
}

/// Forecast entries for the days after a start date.
///
/// Each entry is computed independently from its own date. Cloning gives
/// an iterator that replays the same sequence from its current position.
#[derive(Debug, Clone)]
pub struct Forecast {
    start: NaiveDate,
    next_offset: u32,
    n_days: u32,
    label_format: String,
}

impl Forecast {
    /// The date the forecast counts from (not itself included).
    pub fn start(&self) -> NaiveDate {
        self.start
    }
}

impl Iterator for Forecast {
    type Item = MoonPhaseRecord;

    fn next(&mut self) -> Option<MoonPhaseRecord> {
        if self.next_offset > self.n_days {
            return None;
        }
        let date = self
            .start
            .checked_add_days(Days::new(u64::from(self.next_offset)))?;
        self.next_offset += 1;
        let mut record = phase_for(date);
        record.label = format_label(&self.label_format, date).ok();
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.n_days) + 1).saturating_sub(u64::from(self.next_offset)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Forecast {}

impl std::iter::FusedIterator for Forecast {}

/// Forecast for `date + 1 ..= date + n_days` with default settings.
pub fn forecast(date: NaiveDate, n_days: u32) -> Result<Forecast, LunarError> {
    forecast_with(&ForecastConfig::default(), date, n_days)
}

/// Forecast for `date + 1 ..= date + n_days`.
///
/// Rejects an over-long request, an unusable label format, or a range that
/// runs past the last representable date. Nothing is yielded on error.
pub fn forecast_with(
    config: &ForecastConfig,
    date: NaiveDate,
    n_days: u32,
) -> Result<Forecast, LunarError> {
    if n_days > config.max_days {
        return Err(LunarError::InvalidInput(format!(
            "forecast of {n_days} days exceeds the limit of {}",
            config.max_days
        )));
    }
    format_label(&config.label_format, date)?;
    if date.checked_add_days(Days::new(u64::from(n_days))).is_none() {
        return Err(LunarError::InvalidInput(format!(
            "forecast of {n_days} days from {date} leaves the supported date range"
        )));
    }
    debug!("moon forecast: {n_days} days after {date}");
    Ok(Forecast {
        start: date,
        next_offset: 1,
        n_days,
        label_format: config.label_format.clone(),
    })
}
