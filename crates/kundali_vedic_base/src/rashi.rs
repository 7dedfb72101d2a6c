//! Rashi (zodiac sign) lookup, sign classification and DMS formatting.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg sidereal.

use serde::{Deserialize, Serialize};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
///
/// Serialized by western name; Sanskrit names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rashi {
    #[serde(rename = "Aries", alias = "Mesha")]
    Mesha,
    #[serde(rename = "Taurus", alias = "Vrishabha")]
    Vrishabha,
    #[serde(rename = "Gemini", alias = "Mithuna")]
    Mithuna,
    #[serde(rename = "Cancer", alias = "Karka")]
    Karka,
    #[serde(rename = "Leo", alias = "Simha")]
    Simha,
    #[serde(rename = "Virgo", alias = "Kanya")]
    Kanya,
    #[serde(rename = "Libra", alias = "Tula")]
    Tula,
    #[serde(rename = "Scorpio", alias = "Vrischika")]
    Vrischika,
    #[serde(rename = "Sagittarius", alias = "Dhanu")]
    Dhanu,
    #[serde(rename = "Capricorn", alias = "Makara")]
    Makara,
    #[serde(rename = "Aquarius", alias = "Kumbha")]
    Kumbha,
    #[serde(rename = "Pisces", alias = "Meena")]
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Element (tattva) of a sign. Fire, earth, air, water repeat from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl RashiElement {
    /// 0-based position in fire/earth/air/water order.
    pub const fn index(self) -> usize {
        match self {
            Self::Fire => 0,
            Self::Earth => 1,
            Self::Air => 2,
            Self::Water => 3,
        }
    }
}

/// Modality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignType {
    /// Chara (movable): Mesha, Karka, Tula, Makara.
    Chara,
    /// Sthira (fixed): Vrishabha, Simha, Vrischika, Kumbha.
    Sthira,
    /// Dvisvabhava (dual): Mithuna, Kanya, Dhanu, Meena.
    Dvisvabhava,
}

impl SignType {
    /// 0-based position in movable/fixed/dual order.
    pub const fn index(self) -> usize {
        match self {
            Self::Chara => 0,
            Self::Sthira => 1,
            Self::Dvisvabhava => 2,
        }
    }
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rashi for any index, taken modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Element by the fire/earth/air/water cycle.
    pub const fn element(self) -> RashiElement {
        match self.index() % 4 {
            0 => RashiElement::Fire,
            1 => RashiElement::Earth,
            2 => RashiElement::Air,
            _ => RashiElement::Water,
        }
    }

    /// Modality by the movable/fixed/dual cycle.
    pub const fn sign_type(self) -> SignType {
        match self.index() % 3 {
            0 => SignType::Chara,
            1 => SignType::Sthira,
            _ => SignType::Dvisvabhava,
        }
    }

    /// Odd sign in 1-based counting (Mesha, Mithuna, Simha, ...).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    /// Sign `steps` places forward (zodiacal order).
    pub const fn forward(self, steps: u8) -> Rashi {
        Self::from_index(((self.index() as u16 + steps as u16) % 12) as u8)
    }

    /// Sign `steps` places backward.
    pub const fn backward(self, steps: u8) -> Rashi {
        Self::from_index(((self.index() as u16 + 12 - (steps % 12) as u16) % 12) as u8)
    }

    /// Signs counted forward from `self` to `to`, 0..=11 (0 = same sign).
    pub const fn distance_forward(self, to: Rashi) -> u8 {
        (to.index() + 12 - self.index()) % 12
    }

    /// Signs counted backward from `self` to `to`, 0..=11.
    pub const fn distance_backward(self, to: Rashi) -> u8 {
        (self.index() + 12 - to.index()) % 12
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), etc. Input of any magnitude is
/// reduced modulo 360 first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = crate::util::normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * 30.0;

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
        assert_eq!(Rashi::from_index(13), Rashi::Vrishabha);
    }

    #[test]
    fn elements_cycle_from_aries() {
        assert_eq!(Rashi::Mesha.element(), RashiElement::Fire);
        assert_eq!(Rashi::Makara.element(), RashiElement::Earth);
        assert_eq!(Rashi::Kumbha.element(), RashiElement::Air);
        assert_eq!(Rashi::Meena.element(), RashiElement::Water);
        assert_eq!(Rashi::Dhanu.element(), RashiElement::Fire);
    }

    #[test]
    fn modalities_cycle_from_aries() {
        assert_eq!(Rashi::Karka.sign_type(), SignType::Chara);
        assert_eq!(Rashi::Vrischika.sign_type(), SignType::Sthira);
        assert_eq!(Rashi::Meena.sign_type(), SignType::Dvisvabhava);
    }

    #[test]
    fn odd_even_parity() {
        assert!(Rashi::Mesha.is_odd());
        assert!(!Rashi::Vrishabha.is_odd());
        assert!(Rashi::Kumbha.is_odd());
        assert!(!Rashi::Meena.is_odd());
    }

    #[test]
    fn stepping_and_distances() {
        assert_eq!(Rashi::Meena.forward(1), Rashi::Mesha);
        assert_eq!(Rashi::Mesha.backward(1), Rashi::Meena);
        assert_eq!(Rashi::Dhanu.backward(14), Rashi::Tula);
        assert_eq!(Rashi::Dhanu.distance_forward(Rashi::Mesha), 4);
        assert_eq!(Rashi::Dhanu.distance_backward(Rashi::Mesha), 8);
        assert_eq!(Rashi::Simha.distance_forward(Rashi::Simha), 0);
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
        assert!((dms_to_deg(&d) - 23.853).abs() < 1e-9);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let info = rashi_from_longitude(lon);
            assert_eq!(info.rashi_index, i, "boundary at {lon} deg");
            assert!(info.degrees_in_rashi.abs() < 1e-10);
        }
    }

    #[test]
    fn rashi_wraps_and_negatives() {
        let info = rashi_from_longitude(365.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert!((info.degrees_in_rashi - 5.0).abs() < 1e-10);

        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn rashi_just_below_360_is_meena() {
        let info = rashi_from_longitude(359.999_999_999);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!(info.degrees_in_rashi < 30.0);
    }

    #[test]
    fn serde_uses_western_names() {
        let json = serde_json::to_string(&Rashi::Dhanu).unwrap();
        assert_eq!(json, "\"Sagittarius\"");
        let back: Rashi = serde_json::from_str("\"Kumbha\"").unwrap();
        assert_eq!(back, Rashi::Kumbha);
    }
}
