//! Graha dignity and classification.
//!
//! Exaltation points, moolatrikona ranges, own signs, natural / temporal /
//! compound friendship, benefic-malefic nature and gender (BPHS).

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;
use crate::util::{normalize_360, separation};

/// Exaltation point (sidereal longitude). `None` for the nodes.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation point, opposite the exaltation point.
pub fn debilitation_degree(graha: Graha) -> Option<f64> {
    exaltation_degree(graha).map(|e| normalize_360(e + 180.0))
}

/// Moolatrikona: (rashi, start degree, end degree), end exclusive.
pub const fn moolatrikona_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Surya => Some((Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some((Rashi::Vrishabha, 4.0, 20.0)),
        Graha::Mangal => Some((Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some((Rashi::Kanya, 16.0, 20.0)),
        Graha::Guru => Some((Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some((Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some((Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Signs ruled by the graha.
pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaisargikaMaitri {
    Friend,
    Neutral,
    Enemy,
}

/// Natural friendship of `graha` towards `other` (BPHS table).
///
/// Not symmetric: the Moon has no enemies but Mercury counts it as one.
/// Any pairing with a node is neutral.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,
        (Chandra, Surya | Buddh) => Friend,
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,
        _ => Neutral,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TatkalikaMaitri {
    Friend,
    Enemy,
}

/// Temporal friendship: `other` in the 2nd, 3rd, 4th, 10th, 11th or 12th
/// sign from `graha` is a friend.
pub fn tatkalika_maitri(graha_rashi: Rashi, other_rashi: Rashi) -> TatkalikaMaitri {
    let dist = (other_rashi.index() + 12 - graha_rashi.index()) % 12;
    match dist {
        1 | 2 | 3 | 9 | 10 | 11 => TatkalikaMaitri::Friend,
        _ => TatkalikaMaitri::Enemy,
    }
}

/// Five-fold compound relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanchadhaMaitri {
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
}

pub fn panchadha_maitri(n: NaisargikaMaitri, t: TatkalikaMaitri) -> PanchadhaMaitri {
    use NaisargikaMaitri as N;
    use PanchadhaMaitri as P;
    use TatkalikaMaitri as T;

    match (n, t) {
        (N::Friend, T::Friend) => P::AdhiMitra,
        (N::Neutral, T::Friend) => P::Mitra,
        (N::Friend, T::Enemy) | (N::Enemy, T::Friend) => P::Sama,
        (N::Neutral, T::Enemy) => P::Shatru,
        (N::Enemy, T::Enemy) => P::AdhiShatru,
    }
}

/// Dignity of a graha in a sign, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
    Debilitated,
}

fn in_moolatrikona(graha: Graha, rashi: Rashi, degrees_in_rashi: f64) -> bool {
    matches!(
        moolatrikona_range(graha),
        Some((r, start, end)) if r == rashi && (start..end).contains(&degrees_in_rashi)
    )
}

/// Dignity of `graha` occupying `rashi`.
///
/// `degrees_in_rashi` is only consulted for the moolatrikona span, so it may
/// come from a divisional chart. `sapta_rashis` holds the rashis of the seven
/// sapta grahas (indexed by [`Graha::index`]) in the same chart, used for
/// temporal friendship with the sign lord. Nodes are always `Sama`.
pub fn dignity_in_rashi(
    graha: Graha,
    rashi: Rashi,
    degrees_in_rashi: f64,
    sapta_rashis: &[Rashi; 7],
) -> Dignity {
    if graha.is_node() {
        return Dignity::Sama;
    }
    if exaltation_degree(graha).is_some_and(|e| Rashi::from_index((e / 30.0) as u8) == rashi) {
        return Dignity::Exalted;
    }
    if debilitation_degree(graha).is_some_and(|d| Rashi::from_index((d / 30.0) as u8) == rashi) {
        return Dignity::Debilitated;
    }
    if in_moolatrikona(graha, rashi, degrees_in_rashi) {
        return Dignity::Moolatrikona;
    }
    let lord = rashi_lord(rashi);
    if lord == graha || own_signs(graha).contains(&rashi) {
        return Dignity::OwnSign;
    }

    let natural = naisargika_maitri(graha, lord);
    let temporal = tatkalika_maitri(
        sapta_rashis[graha.index() as usize],
        sapta_rashis[lord.index() as usize],
    );
    match panchadha_maitri(natural, temporal) {
        PanchadhaMaitri::AdhiMitra => Dignity::AdhiMitra,
        PanchadhaMaitri::Mitra => Dignity::Mitra,
        PanchadhaMaitri::Sama => Dignity::Sama,
        PanchadhaMaitri::Shatru => Dignity::Shatru,
        PanchadhaMaitri::AdhiShatru => Dignity::AdhiShatru,
    }
}

/// Angular distance from the exaltation point, [0, 180]. `None` for nodes.
pub fn distance_from_exaltation(graha: Graha, sidereal_lon: f64) -> Option<f64> {
    exaltation_degree(graha).map(|e| separation(sidereal_lon, e))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Natural nature. The Moon defaults to benefic; see [`moon_benefic_nature`].
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
    }
}

/// The Moon is benefic once at least 72° from the Sun on either side.
pub fn moon_benefic_nature(moon_sun_elongation: f64) -> BeneficNature {
    let elong = normalize_360(moon_sun_elongation);
    let phase = if elong <= 180.0 { elong } else { 360.0 - elong };
    if phase >= 72.0 {
        BeneficNature::Benefic
    } else {
        BeneficNature::Malefic
    }
}

/// Nature used in strength contexts: Moon and Mercury follow the lunar phase.
pub fn contextual_nature(graha: Graha, moon_sun_elongation: f64) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh => moon_benefic_nature(moon_sun_elongation),
        _ => natural_benefic_malefic(graha),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrahaGender {
    Male,
    Female,
    Neuter,
}

pub const fn graha_gender(graha: Graha) -> GrahaGender {
    match graha {
        Graha::Surya | Graha::Mangal | Graha::Guru => GrahaGender::Male,
        Graha::Chandra | Graha::Shukra => GrahaGender::Female,
        Graha::Buddh | Graha::Shani | Graha::Rahu | Graha::Ketu => GrahaGender::Neuter,
    }
}
