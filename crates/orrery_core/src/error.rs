//! Errors reported by ephemeris providers.

use thiserror::Error;

use crate::Body;

/// Why a provider could not produce a geocentric vector.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The provider has no data for this body or instant.
    #[error("no position for {body}: {message}")]
    Unavailable { body: Body, message: String },
    /// An iterative solver inside the provider did not converge.
    #[error("solver did not converge for {body} after {iterations} iterations")]
    NoConvergence { body: Body, iterations: u32 },
    /// The returned vector is zero-length or has non-finite components.
    #[error("degenerate position vector for {body}")]
    DegenerateVector { body: Body },
}

/// A body name that is not one of the ten tracked bodies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown body name: {0}")]
pub struct ParseBodyError(pub String);
