//! Serializable chart document.
//!
//! This is the only output shape of the pipeline. Map keys are stable
//! strings (English body names, harmonic numbers) so the JSON form can be
//! consumed without knowing the Rust enums.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use kundali_vedic_base::{
    Ashtakavarga, Dms, Graha, House, KpLords, Paksha, Panchang, Rashi, SignPoints, VargaChart,
    VargaPosition, kp_lords, nakshatra_from_longitude, nakshatra_lord, normalize_360,
    rashi_from_longitude,
};

use crate::config::ChartConfig;

/// Key used for the ascendant in body-keyed maps.
pub const ASCENDANT_KEY: &str = "Ascendant";

/// A complete generated chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDocument {
    pub birth: BirthSummary,
    pub settings: ChartConfig,
    pub ascendant: Placement,
    /// D1 placements keyed by English graha name.
    pub planets: BTreeMap<String, Placement>,
    /// Varga charts keyed by harmonic number ("1", "9", "60", ...).
    pub divisional_charts: BTreeMap<String, VargaChartDoc>,
    /// KP lords keyed by English graha name, plus [`ASCENDANT_KEY`].
    pub kp: BTreeMap<String, KpLords>,
    pub kp_cusps: Vec<KpCusp>,
    /// Whole-sign D1 houses from the lagna.
    pub houses: Vec<HouseDoc>,
    pub panchang: PanchangDoc,
    pub ashtakavarga: AshtakavargaDoc,
    pub dashas: Dashas,
}

/// Birth data as resolved by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthSummary {
    pub local: NaiveDateTime,
    pub utc_offset_minutes: i32,
    pub utc: DateTime<Utc>,
    pub jd_ut: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Sign, nakshatra and motion of one D1 point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub longitude: f64,
    pub sign: Rashi,
    pub degree: f64,
    pub dms: Dms,
    pub nakshatra: &'static str,
    pub nakshatra_number: u8,
    pub pada: u8,
    pub nakshatra_lord: Graha,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    pub retrograde: bool,
}

impl Placement {
    /// Describe a sidereal longitude; `speed` is absent for the ascendant.
    pub fn new(sidereal_lon: f64, speed: Option<f64>) -> Self {
        let lon = normalize_360(sidereal_lon);
        let rashi = rashi_from_longitude(lon);
        let nak = nakshatra_from_longitude(lon);
        Self {
            longitude: lon,
            sign: rashi.rashi,
            degree: rashi.degrees_in_rashi,
            dms: rashi.dms,
            nakshatra: nak.nakshatra.name(),
            nakshatra_number: nak.nakshatra.number(),
            pada: nak.pada,
            nakshatra_lord: nakshatra_lord(nak.nakshatra_index),
            speed,
            retrograde: speed.is_some_and(|s| s < 0.0),
        }
    }
}

/// Sign and degree inside a varga chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VargaPoint {
    pub sign: Rashi,
    pub degree: f64,
}

impl From<&VargaPosition> for VargaPoint {
    fn from(p: &VargaPosition) -> Self {
        Self {
            sign: p.rashi,
            degree: p.degrees_in_rashi,
        }
    }
}

/// A body inside a varga chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VargaBody {
    pub sign: Rashi,
    pub degree: f64,
    pub house: u8,
}

/// One varga chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VargaChartDoc {
    pub harmonic: u16,
    pub name: &'static str,
    pub ascendant: VargaPoint,
    pub bodies: BTreeMap<String, VargaBody>,
}

impl From<&VargaChart> for VargaChartDoc {
    fn from(chart: &VargaChart) -> Self {
        let bodies = chart
            .bodies
            .iter()
            .map(|b| {
                (
                    b.graha.english_name().to_string(),
                    VargaBody {
                        sign: b.position.rashi,
                        degree: b.position.degrees_in_rashi,
                        house: b.house,
                    },
                )
            })
            .collect();
        Self {
            harmonic: chart.varga.divisions(),
            name: chart.varga.name(),
            ascendant: VargaPoint::from(&chart.ascendant),
            bodies,
        }
    }
}

/// KP lords of one house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpCusp {
    pub house: u8,
    pub longitude: f64,
    pub sign: Rashi,
    pub degree: f64,
    #[serde(flatten)]
    pub lords: KpLords,
}

impl KpCusp {
    pub fn new(house: u8, sidereal_lon: f64) -> Self {
        let lon = normalize_360(sidereal_lon);
        let rashi = rashi_from_longitude(lon);
        Self {
            house,
            longitude: lon,
            sign: rashi.rashi,
            degree: rashi.degrees_in_rashi,
            lords: kp_lords(lon),
        }
    }
}

/// One D1 house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseDoc {
    pub house: u8,
    pub sign: Rashi,
    pub lord: Graha,
    pub occupants: Vec<Graha>,
}

impl From<&House> for HouseDoc {
    fn from(h: &House) -> Self {
        Self {
            house: h.number,
            sign: h.rashi,
            lord: h.lord,
            occupants: h.occupants.clone(),
        }
    }
}

/// Tithi with its paksha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiDoc {
    pub name: &'static str,
    /// 1..=30 through the synodic month.
    pub number: u8,
    pub paksha: Paksha,
    pub tithi_in_paksha: u8,
    pub degrees_in_tithi: f64,
}

/// A named panchang limb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedLimb {
    pub name: &'static str,
    /// 1-based position in its cycle.
    pub number: u8,
}

/// Weekday with its ruling graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VaraDoc {
    pub name: &'static str,
    pub weekday: &'static str,
    pub lord: Graha,
}

/// Panchang at the birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangDoc {
    pub tithi: TithiDoc,
    pub vara: VaraDoc,
    pub yoga: NamedLimb,
    pub karana: NamedLimb,
    pub nakshatra: NamedLimb,
}

impl From<&Panchang> for PanchangDoc {
    fn from(p: &Panchang) -> Self {
        Self {
            tithi: TithiDoc {
                name: p.tithi.tithi.name(),
                number: p.tithi.tithi_index + 1,
                paksha: p.tithi.paksha,
                tithi_in_paksha: p.tithi.tithi_in_paksha,
                degrees_in_tithi: p.tithi.degrees_in_tithi,
            },
            vara: VaraDoc {
                name: p.vaar.name(),
                weekday: p.vaar.english_name(),
                lord: p.vaar.lord(),
            },
            yoga: NamedLimb {
                name: p.yoga.yoga.name(),
                number: p.yoga.yoga.number(),
            },
            karana: NamedLimb {
                name: p.karana.karana.name(),
                number: p.karana.karana_index + 1,
            },
            nakshatra: NamedLimb {
                name: p.nakshatra.nakshatra.name(),
                number: p.nakshatra.nakshatra.number(),
            },
        }
    }
}

/// Ashtakavarga points, sign-indexed from Mesha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AshtakavargaDoc {
    /// Sarvashtakavarga per sign.
    pub sav: SignPoints,
    pub sav_after_trikona: SignPoints,
    pub sav_after_ekadhipatya: SignPoints,
    /// Bhinnashtakavarga keyed by English graha name.
    pub bav: BTreeMap<String, SignPoints>,
}

impl From<&Ashtakavarga> for AshtakavargaDoc {
    fn from(av: &Ashtakavarga) -> Self {
        Self {
            sav: av.sarva.points,
            sav_after_trikona: av.sarva.after_trikona,
            sav_after_ekadhipatya: av.sarva.after_ekadhipatya,
            bav: av
                .bhinna
                .iter()
                .map(|b| (b.graha.english_name().to_string(), b.points))
                .collect(),
        }
    }
}

/// All dasha timelines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashas {
    pub vimshottari: DashaTimeline,
    pub yogini: DashaTimeline,
    pub chara: DashaTimeline,
}

/// One system's mahadashas plus what is running at the query time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaTimeline {
    pub system: &'static str,
    pub query_time: DateTime<Utc>,
    pub periods: Vec<PeriodEntry>,
    /// `None` when the query time is outside the generated range.
    pub current: Option<PeriodEntry>,
    pub current_antardasha: Option<PeriodEntry>,
    /// Running periods from the mahadasha down to the configured depth.
    pub current_stack: Vec<PeriodEntry>,
}

/// One dasha period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodEntry {
    /// "Mahadasha", "Antardasha", ... "Pranadasha".
    pub level: &'static str,
    pub entity: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lord: Option<Graha>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_years: f64,
    pub current: bool,
}
