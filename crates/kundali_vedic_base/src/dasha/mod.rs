//! Dasha (planetary period) calculations.
//!
//! Three systems:
//! - Vimshottari: nakshatra-based, 9 grahas, 120 years
//! - Yogini: nakshatra-based, 8 yoginis, 36 years
//! - Chara: sign-based (Jaimini), 12 signs, chart-dependent length
//!
//! Each system generates mahadashas out to a caller-supplied horizon
//! (repeating its cycle as needed), can expand any period into the next
//! level down (antardasha through pranadasha), and answers "what is
//! running at time T" via a snapshot.

pub mod balance;
pub mod chain;
pub mod chara;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;
pub mod vimshottari_data;
pub mod yogini;
pub mod yogini_data;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use chain::{chain_cycles, horizon_jd};
pub use chara::{
    CHARA_FORWARD, chara_children, chara_level0, chara_period_years, chara_sequence,
    chara_snapshot, is_forward,
};
pub use query::{find_active_period, snapshot_at};
pub use subperiod::{equal_children, proportional_children, snap_last_child_end};
pub use types::{
    DAYS_PER_YEAR, DashaEntity, DashaLevel, DashaPeriod, DashaSnapshot, DashaSystem,
    MAX_DASHA_LEVEL, MAX_PERIODS_PER_LEVEL,
};
pub use vimshottari::{vimshottari_children, vimshottari_level0, vimshottari_snapshot};
pub use vimshottari_data::{VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS};
pub use yogini::{yogini_children, yogini_level0, yogini_snapshot};
pub use yogini_data::{
    YOGINI_GRAHAS, YOGINI_NAMES, YOGINI_TOTAL_YEARS, YOGINI_YEARS, yogini_graha, yogini_name,
    yogini_start_index,
};
