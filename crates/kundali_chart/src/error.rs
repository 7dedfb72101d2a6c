//! Error types for chart generation.

use kundali_time::TimeError;
use kundali_vedic_base::VedicError;
use thiserror::Error;

use crate::ephemeris::EphemerisError;

/// Errors from chart generation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Latitude or longitude was not supplied.
    #[error("birth location is required (latitude and longitude)")]
    MissingLocation,
    /// A requested varga harmonic is not one of the 16 supported.
    #[error("unsupported varga harmonic D{0}")]
    UnsupportedHarmonic(u16),
    /// The ephemeris provider failed or returned incomplete data.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    /// Birth time parsing or Julian Day conversion failed.
    #[error("time conversion failed: {0}")]
    Time(#[from] TimeError),
    /// Out-of-range or non-finite request value.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::UnsupportedHarmonic(n) => Self::UnsupportedHarmonic(n),
            VedicError::InvalidInput(msg) => Self::InvalidInput(msg),
            _ => Self::InvalidInput("vedic calculation rejected its input"),
        }
    }
}
