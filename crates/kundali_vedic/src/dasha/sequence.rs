//! The Vimshottari graha sequence and year weights.
//!
//! One table drives every level of the hierarchy: mahadashas, and the
//! proportional sub-periods at all deeper levels.

use crate::graha::Graha;

use super::types::DAYS_PER_YEAR;

/// Vimshottari order, starting from the lord of Ashwini.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Years of each graha's mahadasha, aligned with [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the full cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Position of a graha in the sequence.
pub fn sequence_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full mahadasha length of a graha in years.
pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[sequence_position(graha)]
}

/// Full mahadasha length of a graha in days.
pub fn vimshottari_days(graha: Graha) -> f64 {
    vimshottari_years(graha) * DAYS_PER_YEAR
}

/// The nine-graha cycle starting at `start`, with each graha's weight in years.
pub fn cycle_from(start: Graha) -> [(Graha, f64); 9] {
    let offset = sequence_position(start);
    std::array::from_fn(|i| {
        let idx = (offset + i) % 9;
        (VIMSHOTTARI_SEQUENCE[idx], VIMSHOTTARI_YEARS[idx])
    })
}
