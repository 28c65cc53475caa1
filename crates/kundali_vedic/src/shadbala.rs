//! Shadbala (six-fold planetary strength).
//!
//! Sapta grahas only; the nodes have no Shadbala. Every component is in
//! shashtiamsas (virupas, 1/60 rupa) and is clamped to be non-negative, so
//! the total is the plain sum of the component map.
//!
//! Components and their families:
//! 1. Sthana: uchcha, saptavargaja, ojhayugma, kendradi, drekkana
//! 2. Dig
//! 3. Kala: nathonnatha, paksha
//! 4. Cheshta
//! 5. Naisargika
//! 6. Drik

use std::collections::BTreeMap;

use serde::Serialize;

use crate::amsha::{SAPTAVARGA, amsha_position};
use crate::drishti::drishti_virupa;
use crate::error::VedicError;
use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use crate::graha_relationships::{
    BeneficNature, Dignity, GrahaGender, contextual_nature, dignity_in_rashi,
    distance_from_exaltation, graha_gender,
};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{arc_contains, normalize_360};

/// Natural strength (Sun .. Saturn).
pub const NAISARGIKA_BALA: [f64; 7] = [60.0, 51.43, 17.14, 25.71, 34.29, 42.86, 8.57];

/// House of maximum directional strength (Sun .. Saturn).
pub const DIG_BALA_BHAVA: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

/// Mean daily motion used to scale cheshta bala (Sun .. Saturn).
pub const MAX_SPEED: [f64; 7] = [1.0, 15.0, 0.8, 2.2, 0.25, 1.6, 0.13];

/// Minimum total for a graha to count as strong (Sun .. Saturn).
pub const REQUIRED_STRENGTH: [f64; 7] = [390.0, 360.0, 300.0, 420.0, 390.0, 330.0, 300.0];

/// One Shadbala component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadbalaComponent {
    Uchcha,
    Saptavargaja,
    Ojhayugma,
    Kendradi,
    Drekkana,
    Dig,
    Nathonnatha,
    Paksha,
    Cheshta,
    Naisargika,
    Drik,
}

pub const ALL_COMPONENTS: [ShadbalaComponent; 11] = [
    ShadbalaComponent::Uchcha,
    ShadbalaComponent::Saptavargaja,
    ShadbalaComponent::Ojhayugma,
    ShadbalaComponent::Kendradi,
    ShadbalaComponent::Drekkana,
    ShadbalaComponent::Dig,
    ShadbalaComponent::Nathonnatha,
    ShadbalaComponent::Paksha,
    ShadbalaComponent::Cheshta,
    ShadbalaComponent::Naisargika,
    ShadbalaComponent::Drik,
];

impl ShadbalaComponent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uchcha => "uchcha",
            Self::Saptavargaja => "saptavargaja",
            Self::Ojhayugma => "ojhayugma",
            Self::Kendradi => "kendradi",
            Self::Drekkana => "drekkana",
            Self::Dig => "dig",
            Self::Nathonnatha => "nathonnatha",
            Self::Paksha => "paksha",
            Self::Cheshta => "cheshta",
            Self::Naisargika => "naisargika",
            Self::Drik => "drik",
        }
    }
}

/// Chart facts Shadbala needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadbalaInputs {
    /// Sidereal longitudes of all nine grahas, indexed by [`Graha::index`].
    pub sidereal_lons: [f64; 9],
    /// Longitude speed, degrees/day, of the seven sapta grahas.
    pub speeds: [f64; 7],
    /// House number (1..=12) of the seven sapta grahas.
    pub bhava_numbers: [u8; 7],
    /// Sidereal ascendant, for day/night birth.
    pub lagna_deg: f64,
}

impl ShadbalaInputs {
    fn lon(&self, graha: Graha) -> f64 {
        self.sidereal_lons[graha.index() as usize]
    }

    fn moon_sun_elongation(&self) -> f64 {
        normalize_360(self.lon(Graha::Chandra) - self.lon(Graha::Surya))
    }

    /// Sun above the horizon: between descendant and ascendant through the MC.
    fn is_daytime(&self) -> bool {
        arc_contains(
            self.lagna_deg + 180.0,
            self.lagna_deg,
            self.lon(Graha::Surya),
        )
    }

    fn validate(&self) -> Result<(), VedicError> {
        let lons = self.sidereal_lons.iter();
        if lons.chain(&self.speeds).any(|v| !v.is_finite()) || !self.lagna_deg.is_finite() {
            return Err(VedicError::InvalidInput(
                "non-finite shadbala input".to_string(),
            ));
        }
        if self.bhava_numbers.iter().any(|&b| !(1..=12).contains(&b)) {
            return Err(VedicError::InvalidInput(
                "house number outside 1..=12".to_string(),
            ));
        }
        Ok(())
    }
}

/// Shadbala of one graha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadbalaBreakdown {
    pub graha: Graha,
    pub components: BTreeMap<ShadbalaComponent, f64>,
    /// Sum of `components`, shashtiamsas.
    pub total: f64,
    pub total_rupas: f64,
    pub required_strength: f64,
    pub is_strong: bool,
}

/// Uchcha bala: `60 · (1 − distance from exaltation / 180)`.
pub fn uchcha_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    distance_from_exaltation(graha, sidereal_lon).map_or(0.0, |d| 60.0 * (1.0 - d / 180.0))
}

fn saptavargaja_points(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 30.0,
        Dignity::Moolatrikona => 22.5,
        Dignity::OwnSign => 20.0,
        Dignity::AdhiMitra => 15.0,
        Dignity::Mitra => 10.0,
        Dignity::Sama => 7.5,
        Dignity::Shatru => 5.0,
        Dignity::AdhiShatru => 2.5,
        Dignity::Debilitated => 1.25,
    }
}

/// Saptavargaja bala: dignity points summed over D1, D2, D3, D7, D9, D12, D30.
///
/// Temporal friendship is judged within each varga.
pub fn saptavargaja_bala(graha: Graha, sidereal_lons: &[f64; 9]) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    SAPTAVARGA
        .iter()
        .map(|&amsha| {
            let positions =
                SAPTA_GRAHAS.map(|g| amsha_position(sidereal_lons[g.index() as usize], amsha));
            let rashis: [Rashi; 7] = positions.map(|p| p.rashi);
            let own = positions[graha.index() as usize];
            let deg = own.longitude - own.rashi.index() as f64 * 30.0;
            saptavargaja_points(dignity_in_rashi(graha, own.rashi, deg, &rashis))
        })
        .sum()
}

fn favours_odd(graha: Graha) -> bool {
    // Mercury and Saturn take the masculine rule.
    graha_gender(graha) != GrahaGender::Female
}

/// Ojhayugma bala: 15 for the rashi and 15 for the navamsha when the sign
/// parity suits the graha's gender.
pub fn ojhayugma_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let rashi = rashi_from_longitude(sidereal_lon).rashi;
    let navamsha = amsha_position(sidereal_lon, crate::amsha::Amsha::D9).rashi;
    let wants_odd = favours_odd(graha);
    [rashi, navamsha]
        .iter()
        .filter(|r| r.is_odd() == wants_odd)
        .count() as f64
        * 15.0
}

/// Kendradi bala: kendra 60, panaphara 30, apoklima 15.
pub fn kendradi_bala(bhava_number: u8) -> f64 {
    match bhava_number {
        1 | 4 | 7 | 10 => 60.0,
        2 | 5 | 8 | 11 => 30.0,
        3 | 6 | 9 | 12 => 15.0,
        _ => 0.0,
    }
}

/// Drekkana bala: male grahas in the first decanate, female in the second,
/// neuter in the third, each 15.
pub fn drekkana_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let deg = rashi_from_longitude(sidereal_lon).degrees_in_rashi;
    let decanate = ((deg / 10.0).floor() as u8).min(2);
    match (graha_gender(graha), decanate) {
        (GrahaGender::Male, 0) | (GrahaGender::Female, 1) | (GrahaGender::Neuter, 2) => 15.0,
        _ => 0.0,
    }
}

/// Dig bala: 60 at the graha's best house, falling 10 per house to 0 opposite.
pub fn dig_bala(graha: Graha, bhava_number: u8) -> f64 {
    if graha.is_node() || !(1..=12).contains(&bhava_number) {
        return 0.0;
    }
    let best = DIG_BALA_BHAVA[graha.index() as usize];
    let diff = (bhava_number as i16 - best as i16).unsigned_abs();
    let dist = diff.min(12 - diff).min(6);
    60.0 * (1.0 - dist as f64 / 6.0)
}

/// Nathonnatha bala: malefics 60 by day, benefics 60 by night.
pub fn nathonnatha_bala(graha: Graha, is_daytime: bool, moon_sun_elongation: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    match (contextual_nature(graha, moon_sun_elongation), is_daytime) {
        (BeneficNature::Malefic, true) | (BeneficNature::Benefic, false) => 60.0,
        _ => 0.0,
    }
}

/// Paksha bala: benefics gain towards full moon, malefics towards new moon.
///
/// The Moon always takes the benefic curve.
pub fn paksha_bala(graha: Graha, moon_sun_elongation: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let elong = normalize_360(moon_sun_elongation);
    let phase = if elong <= 180.0 { elong } else { 360.0 - elong };
    let benefic_score = phase / 3.0;
    let nature = if graha == Graha::Chandra {
        BeneficNature::Benefic
    } else {
        contextual_nature(graha, moon_sun_elongation)
    };
    match nature {
        BeneficNature::Benefic => benefic_score,
        BeneficNature::Malefic => 60.0 - benefic_score,
    }
}

/// Cheshta bala: 60 when retrograde, else speed relative to mean motion.
///
/// The luminaries never retrograde and score 0 here.
pub fn cheshta_bala(graha: Graha, speed_deg_per_day: f64) -> f64 {
    if graha.is_node() || matches!(graha, Graha::Surya | Graha::Chandra) {
        return 0.0;
    }
    if speed_deg_per_day < 0.0 {
        60.0
    } else {
        (speed_deg_per_day / MAX_SPEED[graha.index() as usize] * 60.0).min(60.0)
    }
}

pub fn naisargika_bala(graha: Graha) -> f64 {
    if graha.is_node() {
        0.0
    } else {
        NAISARGIKA_BALA[graha.index() as usize]
    }
}

/// Drik bala: `(benefic aspect virupas − malefic aspect virupas) / 4`,
/// floored at zero.
pub fn drik_bala(graha: Graha, sidereal_lons: &[f64; 9], moon_sun_elongation: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let target = sidereal_lons[graha.index() as usize];
    let net: f64 = ALL_GRAHAS
        .iter()
        .filter(|&&src| src != graha)
        .map(|&src| {
            let v = drishti_virupa(src, sidereal_lons[src.index() as usize], target);
            match contextual_nature(src, moon_sun_elongation) {
                BeneficNature::Benefic => v,
                BeneficNature::Malefic => -v,
            }
        })
        .sum();
    (net / 4.0).max(0.0)
}

/// Full breakdown for one sapta graha.
pub fn shadbala(graha: Graha, inputs: &ShadbalaInputs) -> Result<ShadbalaBreakdown, VedicError> {
    if graha.is_node() {
        return Err(VedicError::InvalidInput(format!(
            "{} has no shadbala",
            graha.english_name()
        )));
    }
    inputs.validate()?;

    let gi = graha.index() as usize;
    let lon = inputs.lon(graha);
    let elong = inputs.moon_sun_elongation();
    let bhava = inputs.bhava_numbers[gi];

    let components: BTreeMap<ShadbalaComponent, f64> = ALL_COMPONENTS
        .iter()
        .map(|&c| {
            let value = match c {
                ShadbalaComponent::Uchcha => uchcha_bala(graha, lon),
                ShadbalaComponent::Saptavargaja => saptavargaja_bala(graha, &inputs.sidereal_lons),
                ShadbalaComponent::Ojhayugma => ojhayugma_bala(graha, lon),
                ShadbalaComponent::Kendradi => kendradi_bala(bhava),
                ShadbalaComponent::Drekkana => drekkana_bala(graha, lon),
                ShadbalaComponent::Dig => dig_bala(graha, bhava),
                ShadbalaComponent::Nathonnatha => {
                    nathonnatha_bala(graha, inputs.is_daytime(), elong)
                }
                ShadbalaComponent::Paksha => paksha_bala(graha, elong),
                ShadbalaComponent::Cheshta => cheshta_bala(graha, inputs.speeds[gi]),
                ShadbalaComponent::Naisargika => naisargika_bala(graha),
                ShadbalaComponent::Drik => drik_bala(graha, &inputs.sidereal_lons, elong),
            };
            (c, value.max(0.0))
        })
        .collect();

    let total: f64 = components.values().sum();
    let required = REQUIRED_STRENGTH[gi];
    Ok(ShadbalaBreakdown {
        graha,
        components,
        total,
        total_rupas: total / 60.0,
        required_strength: required,
        is_strong: total >= required,
    })
}

/// Shadbala for all seven sapta grahas, in order Sun .. Saturn.
pub fn all_shadbalas(inputs: &ShadbalaInputs) -> Result<Vec<ShadbalaBreakdown>, VedicError> {
    SAPTA_GRAHAS.iter().map(|&g| shadbala(g, inputs)).collect()
}
