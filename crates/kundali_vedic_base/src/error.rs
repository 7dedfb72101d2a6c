//! Error types for Vedic base calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
///
/// The arithmetic itself is total over normalized longitudes; these only
/// arise when raw caller input is converted into the crate's closed types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Harmonic number outside the Shodashavarga set.
    #[error("unsupported varga harmonic D{0}")]
    UnsupportedHarmonic(u16),
    /// Non-finite or otherwise unusable numeric input.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
