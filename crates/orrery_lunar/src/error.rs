//! Error types for Moon phase forecasts.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LunarError {
    /// Forecast request rejected before any record was produced.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
