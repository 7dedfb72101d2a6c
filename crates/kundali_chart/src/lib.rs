//! Chart assembly on top of `kundali_vedic_base`.
//!
//! [`generate_chart`] takes a birth moment and place, asks an
//! [`EphemerisProvider`] for sidereal positions once, and produces a
//! serializable [`ChartDocument`] with D1 placements, the requested varga
//! charts, KP lords for bodies and cusps, whole-sign houses, panchang,
//! ashtakavarga, and Vimshottari, Yogini and Chara dasha timelines.

pub mod chart;
pub mod config;
pub mod dasha;
pub mod document;
pub mod ephemeris;
pub mod error;
pub mod request;

pub use chart::{ChartInputs, generate_chart};
pub use config::{AyanamshaMode, ChartConfig, HouseSystem, NodeMode};
pub use dasha::{DashaInputs, build_dashas};
pub use document::{
    ASCENDANT_KEY, AshtakavargaDoc, BirthSummary, ChartDocument, DashaTimeline, Dashas, HouseDoc,
    KpCusp, NamedLimb, PanchangDoc, PeriodEntry, Placement, TithiDoc, VaraDoc, VargaBody,
    VargaChartDoc, VargaPoint,
};
pub use ephemeris::{
    BodyState, EPHEMERIS_GRAHAS, EphemerisError, EphemerisProvider, EphemerisRequest,
    EphemerisSnapshot, FixedEphemeris,
};
pub use error::ChartError;
pub use request::ChartRequest;
