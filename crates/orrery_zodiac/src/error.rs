//! Error types for zodiac and chart calculations.

use orrery_time::TimeError;
use thiserror::Error;

/// Errors from sign mapping, the ascendant, or input validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ZodiacError {
    /// Input rejected before any computation (out of range or non-finite).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The ascendant formula is numerically unstable for this input.
    #[error("degenerate ascendant: {0}")]
    DegenerateAscendant(String),
    /// The instant could not be converted to a Julian Day.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
