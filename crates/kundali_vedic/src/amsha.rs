//! Amsha (divisional chart / varga) calculations.
//!
//! Each amsha divides the 30° rashi span into N parts and maps
//! (natal rashi, part index) to a target rashi. The target longitude keeps
//! the position within the part, rescaled to a full 30° sign.
//!
//! Rotation rules follow the BPHS Shodashavarga definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::{Modality, Rashi};
use crate::util::normalize_360;

/// Element classification used by the Bhamsha (D27) start rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// Element of a rashi: Mesha fire, Vrishabha earth, Mithuna air, Karka water, repeating.
pub fn rashi_element(rashi: Rashi) -> RashiElement {
    match rashi.index() % 4 {
        0 => RashiElement::Fire,
        1 => RashiElement::Earth,
        2 => RashiElement::Air,
        _ => RashiElement::Water,
    }
}

/// The sixteen Shodashavarga charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Amsha {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

pub const ALL_AMSHAS: [Amsha; 16] = [
    Amsha::D1,
    Amsha::D2,
    Amsha::D3,
    Amsha::D4,
    Amsha::D7,
    Amsha::D9,
    Amsha::D10,
    Amsha::D12,
    Amsha::D16,
    Amsha::D20,
    Amsha::D24,
    Amsha::D27,
    Amsha::D30,
    Amsha::D40,
    Amsha::D45,
    Amsha::D60,
];

/// The seven vargas (saptavarga) used by Saptavargaja bala.
pub const SAPTAVARGA: [Amsha; 7] = [
    Amsha::D1,
    Amsha::D2,
    Amsha::D3,
    Amsha::D7,
    Amsha::D9,
    Amsha::D12,
    Amsha::D30,
];

/// Trimshamsha segments for odd signs: (end degree, target rashi index).
const TRIMSHAMSHA_ODD: [(f64, u8); 5] = [(5.0, 0), (10.0, 10), (18.0, 8), (25.0, 2), (30.0, 6)];
/// Trimshamsha segments for even signs.
const TRIMSHAMSHA_EVEN: [(f64, u8); 5] = [(5.0, 1), (12.0, 5), (20.0, 11), (25.0, 9), (30.0, 7)];

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Chart code, e.g. `"D9"`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D4 => "D4",
            Self::D7 => "D7",
            Self::D9 => "D9",
            Self::D10 => "D10",
            Self::D12 => "D12",
            Self::D16 => "D16",
            Self::D20 => "D20",
            Self::D24 => "D24",
            Self::D27 => "D27",
            Self::D30 => "D30",
            Self::D40 => "D40",
            Self::D45 => "D45",
            Self::D60 => "D60",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D27 => "Bhamsha",
            Self::D30 => "Trimshamsha",
            Self::D40 => "Khavedamsha",
            Self::D45 => "Akshavedamsha",
            Self::D60 => "Shashtiamsha",
        }
    }
}

impl fmt::Display for Amsha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Amsha {
    type Err = VedicError;

    /// Accepts `D9`, `d9` or a Sanskrit name such as `navamsha`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_AMSHAS
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(t) || a.sanskrit_name().eq_ignore_ascii_case(t))
            .ok_or_else(|| VedicError::UnknownAmsha(s.to_string()))
    }
}

/// Where a longitude lands in an amsha chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmshaPosition {
    /// Target rashi in the divisional chart.
    pub rashi: Rashi,
    /// 1-based part index within the natal sign (Trimshamsha: segment 1..=5).
    pub part: u16,
    /// Amsha longitude in [0, 360).
    pub longitude: f64,
}

/// Map a sidereal longitude through an amsha.
pub fn amsha_position(sidereal_lon: f64, amsha: Amsha) -> AmshaPosition {
    let lon = normalize_360(sidereal_lon);
    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let natal = Rashi::from_index(rashi_idx);
    let pos_in_rashi = lon - rashi_idx as f64 * 30.0;

    if amsha == Amsha::D30 {
        return trimshamsha(natal, pos_in_rashi);
    }

    let n = amsha.divisions();
    let deg_per_div = 30.0 / n as f64;
    let div_idx = ((pos_in_rashi / deg_per_div).floor() as u16).min(n - 1);
    let target = target_rashi(amsha, natal, div_idx);
    let scaled = (pos_in_rashi - div_idx as f64 * deg_per_div) / deg_per_div * 30.0;

    AmshaPosition {
        rashi: target,
        part: div_idx + 1,
        longitude: normalize_360(target.index() as f64 * 30.0 + scaled),
    }
}

/// Amsha rashi only.
pub fn amsha_rashi(sidereal_lon: f64, amsha: Amsha) -> Rashi {
    amsha_position(sidereal_lon, amsha).rashi
}

fn target_rashi(amsha: Amsha, natal: Rashi, div_idx: u16) -> Rashi {
    let idx = natal.index() as u16;
    let odd = natal.is_odd();
    let by_modality = |movable: u16, fixed: u16, dual: u16| match natal.modality() {
        Modality::Movable => movable,
        Modality::Fixed => fixed,
        Modality::Dual => dual,
    };

    // (first target rashi, step between consecutive parts)
    let (start, step): (u16, u16) = match amsha {
        Amsha::D1 => (idx, 0),
        // Odd: Sun's hora (Simha) then Moon's (Karka); even signs reversed.
        Amsha::D2 => {
            let leo_first = odd;
            let first = if leo_first { 4 } else { 3 };
            return Rashi::from_index(if div_idx == 0 { first } else { 7 - first } as u8);
        }
        // Same sign, 5th, 9th.
        Amsha::D3 => (idx, 4),
        // Same sign, 4th, 7th, 10th.
        Amsha::D4 => (idx, 3),
        Amsha::D7 => (if odd { idx } else { idx + 6 }, 1),
        // Movable from itself, fixed from the 9th, dual from the 5th.
        Amsha::D9 => (by_modality(idx, idx + 8, idx + 4), 1),
        // Odd from itself, even from the 9th.
        Amsha::D10 => (if odd { idx } else { idx + 8 }, 1),
        Amsha::D12 => (idx, 1),
        Amsha::D16 => (by_modality(0, 4, 8), 1),
        Amsha::D20 => (by_modality(0, 8, 4), 1),
        Amsha::D24 => (if odd { 4 } else { 3 }, 1),
        Amsha::D27 => (
            match rashi_element(natal) {
                RashiElement::Fire => 0,
                RashiElement::Earth => 3,
                RashiElement::Air => 6,
                RashiElement::Water => 9,
            },
            1,
        ),
        Amsha::D40 => (if odd { 0 } else { 6 }, 1),
        Amsha::D45 => (by_modality(0, 4, 8), 1),
        Amsha::D60 => (idx, 1),
        // Handled by the unequal segment table.
        Amsha::D30 => (idx, 0),
    };
    Rashi::from_index(((start + div_idx * step) % 12) as u8)
}

fn trimshamsha(natal: Rashi, pos_in_rashi: f64) -> AmshaPosition {
    let table = if natal.is_odd() {
        &TRIMSHAMSHA_ODD
    } else {
        &TRIMSHAMSHA_EVEN
    };
    let mut seg_start = 0.0;
    for (i, &(end, target)) in table.iter().enumerate() {
        if pos_in_rashi < end || i == table.len() - 1 {
            let width = end - seg_start;
            let scaled = ((pos_in_rashi - seg_start) / width * 30.0).clamp(0.0, 30.0);
            return AmshaPosition {
                rashi: Rashi::from_index(target),
                part: i as u16 + 1,
                longitude: normalize_360(target as f64 * 30.0 + scaled),
            };
        }
        seg_start = end;
    }
    // Tables are non-empty; the loop always returns on its last segment.
    AmshaPosition {
        rashi: natal,
        part: 1,
        longitude: normalize_360(natal.index() as f64 * 30.0 + pos_in_rashi),
    }
}
