//! Panchang elements at a single moment.
//!
//! Tithi and karana come from the Moon-Sun elongation, yoga from the sum of
//! the two sidereal longitudes, nakshatra from the Moon alone. Vaar is the
//! civil weekday of a local Julian Day; no sunrise boundary is applied.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::util::normalize_360;

/// Elongation covered by one tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Elongation covered by one karana (half a tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Longitude sum covered by one yoga: 360/27.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

// ── Tithi ──

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing.
    Shukla,
    /// Waning.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (0 = Shukla Pratipada).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Day names within a paksha; the 15th is Purnima or Amavasya.
const PAKSHA_DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based day within the paksha (1..=15).
    pub const fn day_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    /// Name without the paksha prefix, e.g. "Ekadashi".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => PAKSHA_DAY_NAMES[(self.index() % 15) as usize],
        }
    }
}

/// Tithi at a given elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based (0..=29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based within the paksha (1..=15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation already covered in this tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

/// Tithi from Moon-Sun elongation in degrees (any range).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let e = normalize_360(elongation_deg);
    let idx = ((e / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let tithi = ALL_TITHIS[idx as usize];
    TithiPosition {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.day_in_paksha(),
        degrees_in_tithi: e - idx as f64 * TITHI_SEGMENT_DEG,
    }
}

// ── Karana ──

/// The 11 karanas: seven repeating, four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Karana of the 0-based half-tithi slot (0..=59) in a synodic month.
    ///
    /// Slot 0 is Kimstughna, slots 57..=59 are Shakuni, Chatushpada and
    /// Naga; slots 1..=56 cycle through the seven movable karanas.
    pub const fn from_slot(slot: u8) -> Karana {
        match slot {
            0 => Self::Kimstughna,
            1..=56 => MOVABLE_KARANAS[((slot - 1) % 7) as usize],
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            _ => Self::Naga,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-based half-tithi slot (0..=59).
    pub karana_index: u8,
}

/// Karana from Moon-Sun elongation in degrees (any range).
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let e = normalize_360(elongation_deg);
    let slot = ((e / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    KaranaPosition {
        karana: Karana::from_slot(slot),
        karana_index: slot,
    }
}

// ── Yoga ──

/// The 27 nitya yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 1-based position (Vishkumbha = 1).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based (0..=26).
    pub yoga_index: u8,
}

/// Yoga from the sum of sidereal Sun and Moon longitudes (any range).
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> YogaPosition {
    let s = normalize_360(sidereal_sum_deg);
    let idx = ((s / YOGA_SEGMENT_DEG).floor() as u8).min(26);
    YogaPosition {
        yoga: ALL_YOGAS[idx as usize],
        yoga_index: idx,
    }
}

// ── Vaar ──

/// Weekday, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// Graha ruling the day.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }
}

/// Weekday of the civil day containing `jd`.
///
/// Days roll over at midnight of whatever time scale `jd` is in, so pass a
/// local Julian Day to get the local weekday.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    // JD 0.0 is a Monday noon; +1.5 moves the rollover to midnight with
    // Sunday at 0.
    let day = (jd + 1.5).floor() as i64;
    ALL_VAARS[day.rem_euclid(7) as usize]
}

// ── Combined ──

/// The five panchang limbs at one moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panchang {
    pub tithi: TithiPosition,
    pub vaar: Vaar,
    pub yoga: YogaPosition,
    pub karana: KaranaPosition,
    /// Moon's nakshatra.
    pub nakshatra: NakshatraInfo,
}

/// Panchang from sidereal Sun and Moon longitudes and a local Julian Day.
pub fn panchang(sun_lon: f64, moon_lon: f64, local_jd: f64) -> Panchang {
    let elongation = normalize_360(moon_lon - sun_lon);
    Panchang {
        tithi: tithi_from_elongation(elongation),
        vaar: vaar_from_jd(local_jd),
        yoga: yoga_from_sum(sun_lon + moon_lon),
        karana: karana_from_elongation(elongation),
        nakshatra: nakshatra_from_longitude(moon_lon),
    }
}
