//! Shared angle helpers.

use crate::error::VedicError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r < 0.0 {
        let wrapped = r + 360.0;
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    } else {
        r
    }
}

/// The point diametrically opposite `deg`, normalized.
///
/// Ketu is always derived this way from Rahu.
pub fn opposite_longitude(deg: f64) -> f64 {
    normalize_360(deg + 180.0)
}

/// Reject NaN/infinite longitudes, returning the normalized value otherwise.
pub fn validate_longitude(deg: f64) -> Result<f64, VedicError> {
    if deg.is_finite() {
        Ok(normalize_360(deg))
    } else {
        Err(VedicError::InvalidInput("longitude must be finite"))
    }
}
