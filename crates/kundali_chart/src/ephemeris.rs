//! Ephemeris boundary.
//!
//! The chart pipeline never computes planetary positions itself. It asks an
//! [`EphemerisProvider`] once per chart for sidereal longitudes and daily
//! motion of the seven classical grahas and Rahu, plus the ascendant and
//! house cusps. Ketu is derived from Rahu by the pipeline, never queried.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use kundali_vedic_base::Graha;

use crate::config::{AyanamshaMode, HouseSystem, NodeMode};

/// Grahas a provider must return, in `Graha::index()` order.
pub const EPHEMERIS_GRAHAS: [Graha; 8] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
];

/// Errors reported by, or about, an ephemeris provider.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The backend could not compute positions.
    #[error("backend failure: {0}")]
    Backend(String),
    /// A snapshot could not be decoded.
    #[error("malformed snapshot: {0}")]
    Parse(String),
    /// The snapshot is missing data or holds non-finite values.
    #[error("incomplete data: {0}")]
    Incomplete(String),
}

/// One ephemeris query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EphemerisRequest {
    pub jd_ut: f64,
    /// Geographic latitude, degrees north.
    pub latitude: f64,
    /// Geographic longitude, degrees east.
    pub longitude: f64,
    pub ayanamsha: AyanamshaMode,
    pub house_system: HouseSystem,
    pub node_mode: NodeMode,
}

/// Position and motion of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Sidereal longitude, degrees.
    pub longitude: f64,
    /// Daily motion in longitude, degrees/day. Negative is retrograde.
    #[serde(default)]
    pub speed: f64,
}

impl BodyState {
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// Everything a provider returns for one moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    /// Sidereal ascendant, degrees.
    pub ascendant: f64,
    /// 12 sidereal house cusps; `cusps[0]` is the ascendant.
    pub cusps: Vec<f64>,
    pub bodies: BTreeMap<Graha, BodyState>,
}

impl EphemerisSnapshot {
    /// Body state, or an `Incomplete` error naming what is missing.
    pub fn body(&self, graha: Graha) -> Result<BodyState, EphemerisError> {
        let state = self.bodies.get(&graha).copied().ok_or_else(|| {
            EphemerisError::Incomplete(format!("no position for {}", graha.english_name()))
        })?;
        if !(state.longitude.is_finite() && state.speed.is_finite()) {
            return Err(EphemerisError::Incomplete(format!(
                "non-finite state for {}",
                graha.english_name()
            )));
        }
        Ok(state)
    }

    /// Validated house cusps.
    pub fn house_cusps(&self) -> Result<[f64; 12], EphemerisError> {
        let cusps: [f64; 12] = self.cusps.as_slice().try_into().map_err(|_| {
            EphemerisError::Incomplete(format!("expected 12 house cusps, got {}", self.cusps.len()))
        })?;
        if !self.ascendant.is_finite() || cusps.iter().any(|c| !c.is_finite()) {
            return Err(EphemerisError::Incomplete(
                "non-finite ascendant or cusp".to_string(),
            ));
        }
        Ok(cusps)
    }
}

/// Source of sidereal positions for a chart.
pub trait EphemerisProvider {
    fn sidereal_positions(
        &self,
        request: &EphemerisRequest,
    ) -> Result<EphemerisSnapshot, EphemerisError>;
}

/// Provider that returns one precomputed snapshot for every request.
///
/// Used for tests, replaying stored charts, and the CLI's `--positions`
/// file.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedEphemeris {
    snapshot: EphemerisSnapshot,
}

impl FixedEphemeris {
    pub fn new(snapshot: EphemerisSnapshot) -> Self {
        Self { snapshot }
    }

    /// Decode a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, EphemerisError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| EphemerisError::Parse(e.to_string()))
    }

    pub fn snapshot(&self) -> &EphemerisSnapshot {
        &self.snapshot
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn sidereal_positions(
        &self,
        request: &EphemerisRequest,
    ) -> Result<EphemerisSnapshot, EphemerisError> {
        debug!(jd_ut = request.jd_ut, "serving fixed ephemeris snapshot");
        Ok(self.snapshot.clone())
    }
}
