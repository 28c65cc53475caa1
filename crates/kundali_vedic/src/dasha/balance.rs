//! Birth balance: how much of the first mahadasha remains at birth.
//!
//! The Moon's position within its nakshatra gives the fraction of the
//! nakshatra lord's mahadasha already elapsed.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

use super::sequence::vimshottari_days;

/// Dasha state at the birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthBalance {
    /// Moon's nakshatra.
    pub nakshatra: Nakshatra,
    /// Lord of the first mahadasha.
    pub lord: Graha,
    /// Fraction of the lord's mahadasha elapsed before birth, [0, 1).
    pub elapsed_fraction: f64,
    /// Days of the first mahadasha remaining after birth.
    pub balance_days: f64,
    /// Days of the first mahadasha elapsed before birth.
    pub elapsed_days: f64,
}

/// Compute the birth balance from the Moon's sidereal longitude.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let lord = info.nakshatra.lord();
    let full = vimshottari_days(lord);
    let elapsed_days = full * info.fraction_elapsed;
    BirthBalance {
        nakshatra: info.nakshatra,
        lord,
        elapsed_fraction: info.fraction_elapsed,
        balance_days: full - elapsed_days,
        elapsed_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;
    use approx::assert_abs_diff_eq;

    #[test]
    fn balance_at_start_of_ashwini() {
        let b = nakshatra_birth_balance(0.0);
        assert_eq!(b.lord, Graha::Ketu);
        assert_eq!(b.elapsed_days, 0.0);
        assert_abs_diff_eq!(b.balance_days, 7.0 * 365.25, epsilon = 1e-10);
    }

    #[test]
    fn balance_at_midpoint() {
        let b = nakshatra_birth_balance(NAKSHATRA_SPAN / 2.0);
        assert_abs_diff_eq!(b.elapsed_fraction, 0.5, epsilon = 1e-10);
        assert_abs_diff_eq!(b.balance_days, 7.0 * 365.25 * 0.5, epsilon = 1e-6);
    }

    #[test]
    fn balance_rohini_is_moon() {
        let b = nakshatra_birth_balance(40.0);
        assert_eq!(b.nakshatra, Nakshatra::Rohini);
        assert_eq!(b.lord, Graha::Chandra);
        assert!(b.elapsed_fraction < 1e-10);
    }

    #[test]
    fn balance_wraps_negative() {
        let b = nakshatra_birth_balance(-1.0);
        assert_eq!(b.nakshatra, Nakshatra::Revati);
        assert_eq!(b.lord, Graha::Buddh);
    }

    #[test]
    fn parts_add_up() {
        let b = nakshatra_birth_balance(123.456);
        let full = vimshottari_days(b.lord);
        assert_abs_diff_eq!(b.balance_days + b.elapsed_days, full, epsilon = 1e-9);
    }
}
