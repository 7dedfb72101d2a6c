//! Chart generation settings.

use serde::{Deserialize, Serialize};

use kundali_vedic_base::dasha::MAX_DASHA_LEVEL;
use kundali_vedic_base::{SHODASHAVARGA, Varga};

use crate::error::ChartError;

/// Sidereal zodiac reference passed through to the ephemeris provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AyanamshaMode {
    #[default]
    Lahiri,
    Raman,
    Krishnamurti,
    FaganBradley,
    Yukteshwar,
}

/// House division scheme passed through to the ephemeris provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Porphyry,
    Equal,
    WholeSign,
}

/// Mean or true (osculating) lunar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    #[default]
    Mean,
    True,
}

/// Settings for one chart generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Varga harmonics to build, e.g. `[1, 9, 10, 60]`.
    pub harmonics: Vec<u16>,
    pub ayanamsha: AyanamshaMode,
    pub house_system: HouseSystem,
    pub node_mode: NodeMode,
    /// Dasha sequences are generated until at least this many years after birth.
    pub dasha_horizon_years: f64,
    /// Deepest level of the running-period stack (0 = mahadasha,
    /// 4 = pranadasha).
    pub dasha_max_level: u8,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            harmonics: SHODASHAVARGA.iter().map(|v| v.divisions()).collect(),
            ayanamsha: AyanamshaMode::default(),
            house_system: HouseSystem::default(),
            node_mode: NodeMode::default(),
            dasha_horizon_years: 120.0,
            dasha_max_level: MAX_DASHA_LEVEL,
        }
    }
}

impl ChartConfig {
    /// Resolve `harmonics`, rejecting any outside the supported set.
    pub fn vargas(&self) -> Result<Vec<Varga>, ChartError> {
        self.harmonics
            .iter()
            .map(|&n| Varga::try_from(n).map_err(ChartError::from))
            .collect()
    }

    /// Check everything that can be checked without an ephemeris.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.dasha_horizon_years.is_finite() || self.dasha_horizon_years <= 0.0 {
            return Err(ChartError::InvalidInput(
                "dasha_horizon_years must be a positive number",
            ));
        }
        if self.dasha_max_level > MAX_DASHA_LEVEL {
            return Err(ChartError::InvalidInput(
                "dasha_max_level must be between 0 and 4",
            ));
        }
        self.vargas().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_shodashavarga() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.vargas().unwrap().len(), 16);
        assert_eq!(cfg.ayanamsha, AyanamshaMode::Lahiri);
        assert_eq!(cfg.house_system, HouseSystem::Placidus);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unsupported_harmonic_rejected() {
        let cfg = ChartConfig {
            harmonics: vec![1, 9, 11],
            ..ChartConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ChartError::UnsupportedHarmonic(11)));
    }

    #[test]
    fn bad_horizon_rejected() {
        for h in [0.0, -5.0, f64::NAN] {
            let cfg = ChartConfig {
                dasha_horizon_years: h,
                ..ChartConfig::default()
            };
            assert!(matches!(cfg.validate(), Err(ChartError::InvalidInput(_))));
        }
    }

    #[test]
    fn dasha_depth_bounded() {
        assert_eq!(ChartConfig::default().dasha_max_level, 4);
        let cfg = ChartConfig {
            dasha_max_level: 5,
            ..ChartConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ChartConfig =
            serde_json::from_str(r#"{"harmonics":[9],"house_system":"whole_sign"}"#).unwrap();
        assert_eq!(cfg.harmonics, vec![9]);
        assert_eq!(cfg.house_system, HouseSystem::WholeSign);
        assert_eq!(cfg.node_mode, NodeMode::Mean);
        assert!((cfg.dasha_horizon_years - 120.0).abs() < 1e-12);
    }
}
