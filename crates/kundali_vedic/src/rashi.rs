//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! Twelve equal signs of 30° from Mesha (Aries) at 0° sidereal. A longitude
//! exactly on a boundary belongs to the later sign (`[start, end)`).

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    #[serde(rename = "aries")]
    Mesha,
    #[serde(rename = "taurus")]
    Vrishabha,
    #[serde(rename = "gemini")]
    Mithuna,
    #[serde(rename = "cancer")]
    Karka,
    #[serde(rename = "leo")]
    Simha,
    #[serde(rename = "virgo")]
    Kanya,
    #[serde(rename = "libra")]
    Tula,
    #[serde(rename = "scorpio")]
    Vrischika,
    #[serde(rename = "sagittarius")]
    Dhanu,
    #[serde(rename = "capricorn")]
    Makara,
    #[serde(rename = "aquarius")]
    Kumbha,
    #[serde(rename = "pisces")]
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

/// Quality of a sign, which drives several varga rotation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    /// Chara: Mesha, Karka, Tula, Makara.
    Movable,
    /// Sthira: Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Dvisvabhava: Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

impl Rashi {
    /// Sanskrit name.
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

    /// Western (English) name.
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

    /// Rashi from a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Odd signs (Mesha, Mithuna, ...) are the masculine signs.
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

/// Full rashi position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Convert decimal degrees to degrees-minutes-seconds (absolute value).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// Determine the rashi of a sidereal longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // min(11) guards the float edge just below 360
    let idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = (lon - idx as f64 * 30.0).clamp(0.0, 30.0 - f64::EPSILON * 32.0);
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn boundaries_belong_to_later_sign() {
        assert_eq!(rashi_from_longitude(0.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(330.0).rashi, Rashi::Meena);
        assert_eq!(rashi_from_longitude(360.0).rashi, Rashi::Mesha);
    }

    #[test]
    fn degrees_within_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert_abs_diff_eq!(info.degrees_in_rashi, 15.5, epsilon = 1e-12);
        assert_eq!(info.dms.degrees, 15);
        assert_eq!(info.dms.minutes, 30);
    }

    #[test]
    fn negative_longitude_wraps() {
        let info = rashi_from_longitude(-15.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert_abs_diff_eq!(info.degrees_in_rashi, 15.0, epsilon = 1e-12);
    }

    #[test]
    fn just_below_360_stays_in_pisces() {
        let info = rashi_from_longitude(360.0 - 1e-13);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!(info.degrees_in_rashi < 30.0);
    }

    #[test]
    fn numbers_and_indices() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(r.number() as usize, i + 1);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
    }

    #[test]
    fn modalities_cycle() {
        assert_eq!(Rashi::Mesha.modality(), Modality::Movable);
        assert_eq!(Rashi::Vrishabha.modality(), Modality::Fixed);
        assert_eq!(Rashi::Mithuna.modality(), Modality::Dual);
        assert_eq!(Rashi::Makara.modality(), Modality::Movable);
        assert_eq!(Rashi::Meena.modality(), Modality::Dual);
    }

    #[test]
    fn odd_signs() {
        assert!(Rashi::Mesha.is_odd());
        assert!(!Rashi::Vrishabha.is_odd());
        assert!(Rashi::Kumbha.is_odd());
    }

    #[test]
    fn dms_conversion() {
        let dms = deg_to_dms(23.853);
        assert_eq!(dms.degrees, 23);
        assert_eq!(dms.minutes, 51);
        assert_abs_diff_eq!(dms.seconds, 10.8, epsilon = 1e-6);
    }
}
