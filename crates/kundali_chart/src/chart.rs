//! Chart generation pipeline.
//!
//! One ephemeris call per chart; everything after that is pure arithmetic
//! from `kundali_vedic_base`.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, debug_span};

use kundali_time::datetime_to_jd;
use kundali_vedic_base::dasha::horizon_jd;
use kundali_vedic_base::{
    ALL_GRAHAS, Graha, GrahaPlacements, ashtakavarga, kp_lords, opposite_longitude, panchang,
    rashi_from_longitude, varga_chart, whole_sign_houses,
};

use crate::config::ChartConfig;
use crate::dasha::{DashaInputs, build_dashas};
use crate::document::{
    ASCENDANT_KEY, AshtakavargaDoc, BirthSummary, ChartDocument, HouseDoc, KpCusp, PanchangDoc,
    Placement, VargaChartDoc,
};
use crate::ephemeris::{
    BodyState, EPHEMERIS_GRAHAS, EphemerisError, EphemerisProvider, EphemerisRequest,
    EphemerisSnapshot,
};
use crate::error::ChartError;
use crate::request::ChartRequest;

/// Validated sidereal inputs with Ketu filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartInputs {
    pub ascendant: f64,
    pub cusps: [f64; 12],
    /// Indexed by `Graha::index()`.
    pub grahas: [BodyState; 9],
}

impl ChartInputs {
    /// Check a provider snapshot and derive the descending node.
    pub fn from_snapshot(snapshot: &EphemerisSnapshot) -> Result<Self, EphemerisError> {
        let cusps = snapshot.house_cusps()?;
        let mut grahas = [BodyState {
            longitude: 0.0,
            speed: 0.0,
        }; 9];
        for g in EPHEMERIS_GRAHAS {
            grahas[g.index() as usize] = snapshot.body(g)?;
        }
        let rahu = grahas[Graha::Rahu.index() as usize];
        grahas[Graha::Ketu.index() as usize] = BodyState {
            longitude: opposite_longitude(rahu.longitude),
            speed: rahu.speed,
        };
        Ok(Self {
            ascendant: snapshot.ascendant,
            cusps,
            grahas,
        })
    }

    pub fn state(&self, graha: Graha) -> BodyState {
        self.grahas[graha.index() as usize]
    }

    pub fn longitudes(&self) -> [f64; 9] {
        self.grahas.map(|b| b.longitude)
    }

    /// `(graha, longitude)` pairs in `ALL_GRAHAS` order.
    pub fn bodies(&self) -> Vec<(Graha, f64)> {
        ALL_GRAHAS
            .iter()
            .map(|&g| (g, self.state(g).longitude))
            .collect()
    }
}

/// Generate a full chart document.
///
/// Fails before touching the provider when the location is missing or a
/// requested harmonic is unsupported.
pub fn generate_chart<P>(
    request: &ChartRequest,
    config: &ChartConfig,
    provider: &P,
) -> Result<ChartDocument, ChartError>
where
    P: EphemerisProvider + ?Sized,
{
    let (latitude, longitude) = request.location()?;
    config.validate()?;
    let vargas = config.vargas()?;

    let birth_jd = request.birth.jd_ut();
    let horizon_jd = horizon_jd(birth_jd, config.dasha_horizon_years)?;
    let query_jd = datetime_to_jd(&request.query_time.unwrap_or_else(Utc::now));

    let span = debug_span!("generate_chart", jd_ut = birth_jd, latitude, longitude);
    let _enter = span.enter();

    let snapshot = provider.sidereal_positions(&EphemerisRequest {
        jd_ut: birth_jd,
        latitude,
        longitude,
        ayanamsha: config.ayanamsha,
        house_system: config.house_system,
        node_mode: config.node_mode,
    })?;
    let inputs = ChartInputs::from_snapshot(&snapshot)?;

    let planets: BTreeMap<String, Placement> = ALL_GRAHAS
        .iter()
        .map(|&g| {
            let s = inputs.state(g);
            (
                g.english_name().to_string(),
                Placement::new(s.longitude, Some(s.speed)),
            )
        })
        .collect();

    let bodies = inputs.bodies();
    let divisional_charts: BTreeMap<String, VargaChartDoc> = vargas
        .iter()
        .map(|&v| {
            let chart = varga_chart(inputs.ascendant, &bodies, v);
            (v.divisions().to_string(), VargaChartDoc::from(&chart))
        })
        .collect();

    let mut kp: BTreeMap<String, _> = bodies
        .iter()
        .map(|&(g, lon)| (g.english_name().to_string(), kp_lords(lon)))
        .collect();
    kp.insert(ASCENDANT_KEY.to_string(), kp_lords(inputs.ascendant));

    let kp_cusps = inputs
        .cusps
        .iter()
        .zip(1u8..)
        .map(|(&lon, house)| KpCusp::new(house, lon))
        .collect();

    let placements = GrahaPlacements::from_longitudes(inputs.longitudes());
    let lagna = rashi_from_longitude(inputs.ascendant).rashi;

    let houses = whole_sign_houses(lagna, &placements)
        .iter()
        .map(HouseDoc::from)
        .collect();
    let local_jd = birth_jd + request.birth.offset_minutes() as f64 / 1440.0;
    let panchang = PanchangDoc::from(&panchang(
        inputs.state(Graha::Surya).longitude,
        inputs.state(Graha::Chandra).longitude,
        local_jd,
    ));
    let ashtakavarga = AshtakavargaDoc::from(&ashtakavarga(&placements, lagna));

    let dashas = build_dashas(&DashaInputs {
        birth_jd,
        horizon_jd,
        query_jd,
        moon_lon: inputs.state(Graha::Chandra).longitude,
        lagna,
        placements: &placements,
        max_level: config.dasha_max_level,
    })?;

    debug!(
        vargas = divisional_charts.len(),
        vimshottari = dashas.vimshottari.periods.len(),
        yogini = dashas.yogini.periods.len(),
        chara = dashas.chara.periods.len(),
        "chart generated"
    );

    Ok(ChartDocument {
        birth: BirthSummary {
            local: request.birth.local(),
            utc_offset_minutes: request.birth.offset_minutes(),
            utc: request.birth.utc(),
            jd_ut: birth_jd,
            latitude,
            longitude,
        },
        settings: config.clone(),
        ascendant: Placement::new(inputs.ascendant, None),
        planets,
        divisional_charts,
        kp,
        kp_cusps,
        houses,
        panchang,
        ashtakavarga,
        dashas,
    })
}
