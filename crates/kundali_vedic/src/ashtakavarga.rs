//! Ashtakavarga (benefic points).
//!
//! For each sapta graha, eight contributors (the seven grahas and the lagna)
//! each award a bindu to the signs at fixed offsets from themselves. The
//! per-graha table is the Bhinna Ashtakavarga (BAV); the per-sign sum over
//! all seven is the Sarvashtakavarga (SAV).
//!
//! Totals are chart-independent: Sun 48, Moon 49, Mars 39, Mercury 54,
//! Jupiter 56, Venus 52, Saturn 39; SAV 337.

use serde::Serialize;

use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::rashi::Rashi;

const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// `RULES[target][contributor]`: bitmask of 1-based favourable offsets.
///
/// Targets Sun .. Saturn; contributors Sun .. Saturn then Lagna.
const RULES: [[u16; 8]; 7] = [
    // Sun
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 6, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 5, 6, 9, 10, 11, 12]),
        bits(&[5, 6, 9, 11]),
        bits(&[6, 7, 12]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[3, 4, 6, 10, 11, 12]),
    ],
    // Moon
    [
        bits(&[3, 6, 7, 8, 10, 11]),
        bits(&[1, 3, 6, 7, 10, 11]),
        bits(&[2, 3, 5, 6, 9, 10, 11]),
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),
        bits(&[1, 4, 7, 8, 10, 11, 12]),
        bits(&[3, 4, 5, 7, 9, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[3, 6, 10, 11]),
    ],
    // Mars
    [
        bits(&[3, 5, 6, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[6, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 6, 10, 11]),
    ],
    // Mercury
    [
        bits(&[5, 6, 9, 11, 12]),
        bits(&[2, 4, 6, 8, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 2, 4, 6, 8, 10, 11]),
    ],
    // Jupiter
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),
        bits(&[2, 5, 7, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),
        bits(&[2, 5, 6, 9, 10, 11]),
        bits(&[3, 5, 6, 12]),
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),
    ],
    // Venus
    [
        bits(&[8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),
        bits(&[3, 4, 6, 9, 11, 12]),
        bits(&[3, 5, 6, 9, 11]),
        bits(&[5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),
        bits(&[3, 4, 5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
    ],
    // Saturn
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[3, 5, 6, 10, 11, 12]),
        bits(&[6, 8, 9, 10, 11, 12]),
        bits(&[5, 6, 11, 12]),
        bits(&[6, 11, 12]),
        bits(&[3, 5, 6, 11]),
        bits(&[1, 3, 4, 6, 10, 11]),
    ],
];

/// BAV totals, Sun .. Saturn.
pub const BAV_TOTALS: [u8; 7] = [48, 49, 39, 54, 56, 52, 39];

pub const SAV_TOTAL: u16 = 337;

/// Bhinna Ashtakavarga of one graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BhinnaAshtakavarga {
    pub graha: Graha,
    /// Bindus per rashi, indexed Mesha .. Meena.
    pub by_rashi: [u8; 12],
    /// Bindus per house; `by_house[0]` is the lagna's sign.
    pub by_house: [u8; 12],
}

impl BhinnaAshtakavarga {
    pub fn total(&self) -> u8 {
        self.by_rashi.iter().sum()
    }
}

/// Sarvashtakavarga with the two classical reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SarvaAshtakavarga {
    pub by_rashi: [u8; 12],
    /// Heatmap: SAV per house, house 1 first.
    pub by_house: [u8; 12],
    /// After Trikona Sodhana, per rashi.
    pub after_trikona: [u8; 12],
    /// After Ekadhipatya Sodhana, per rashi.
    pub after_ekadhipatya: [u8; 12],
}

impl SarvaAshtakavarga {
    pub fn total(&self) -> u16 {
        self.by_rashi.iter().map(|&p| p as u16).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AshtakavargaResult {
    /// Sun .. Saturn.
    pub bavs: [BhinnaAshtakavarga; 7],
    pub sav: SarvaAshtakavarga,
}

fn rotate_to_houses(by_rashi: &[u8; 12], lagna: Rashi) -> [u8; 12] {
    let start = lagna.index() as usize;
    std::array::from_fn(|h| by_rashi[(start + h) % 12])
}

/// BAV for one sapta graha. `graha_rashis` holds Sun .. Saturn.
///
/// `None` for the nodes, which have no Ashtakavarga.
pub fn calculate_bav(
    graha: Graha,
    graha_rashis: &[Rashi; 7],
    lagna: Rashi,
) -> Option<BhinnaAshtakavarga> {
    (!graha.is_node()).then(|| bav(graha, graha_rashis, lagna))
}

fn bav(graha: Graha, graha_rashis: &[Rashi; 7], lagna: Rashi) -> BhinnaAshtakavarga {
    let rules = &RULES[graha.index() as usize];
    let contributors = graha_rashis.iter().copied().chain(std::iter::once(lagna));

    let mut by_rashi = [0u8; 12];
    for (mask, from) in rules.iter().zip(contributors) {
        for (rashi, points) in by_rashi.iter_mut().enumerate() {
            let offset = (rashi + 12 - from.index() as usize) % 12 + 1;
            if (mask >> offset) & 1 == 1 {
                *points += 1;
            }
        }
    }

    BhinnaAshtakavarga {
        graha,
        by_rashi,
        by_house: rotate_to_houses(&by_rashi, lagna),
    }
}

const TRIKONA_GROUPS: [[usize; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// Subtract the minimum of each fire/earth/air/water triangle.
pub fn trikona_sodhana(totals: &[u8; 12]) -> [u8; 12] {
    let mut result = *totals;
    for group in &TRIKONA_GROUPS {
        let min = group.iter().map(|&i| result[i]).min().unwrap_or(0);
        for &i in group {
            result[i] -= min;
        }
    }
    result
}

// Mercury (Mithuna/Kanya) and Jupiter (Dhanu/Meena). The other dual
// lordships fall in different triangles and are already reduced.
const EKADHIPATYA_PAIRS: [[usize; 2]; 2] = [[2, 5], [8, 11]];

/// Subtract the minimum of each same-lord sign pair.
pub fn ekadhipatya_sodhana(after_trikona: &[u8; 12]) -> [u8; 12] {
    let mut result = *after_trikona;
    for [a, b] in EKADHIPATYA_PAIRS {
        let min = result[a].min(result[b]);
        result[a] -= min;
        result[b] -= min;
    }
    result
}

/// BAVs of all seven grahas plus the SAV.
pub fn calculate_ashtakavarga(graha_rashis: &[Rashi; 7], lagna: Rashi) -> AshtakavargaResult {
    let bavs = SAPTA_GRAHAS.map(|g| bav(g, graha_rashis, lagna));

    let mut by_rashi = [0u8; 12];
    for bav in &bavs {
        for (sum, p) in by_rashi.iter_mut().zip(bav.by_rashi) {
            *sum += p;
        }
    }
    let after_trikona = trikona_sodhana(&by_rashi);
    AshtakavargaResult {
        bavs,
        sav: SarvaAshtakavarga {
            by_rashi,
            by_house: rotate_to_houses(&by_rashi, lagna),
            after_trikona,
            after_ekadhipatya: ekadhipatya_sodhana(&after_trikona),
        },
    }
}
