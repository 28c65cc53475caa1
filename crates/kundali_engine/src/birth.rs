//! Birth record input.

use chrono::{NaiveDate, NaiveTime};
use kundali_ephem::Ayanamsa;
use kundali_time::{ResolvedInstant, datetime_to_jd, resolve_local};
use kundali_vedic::HouseSystem;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Local birth date, time and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    /// Subject label, carried into outputs. May be empty.
    #[serde(default)]
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub time_of_day: NaiveTime,
    /// IANA zone name, `UTC`/`Z`, or a fixed offset such as `+05:30`.
    pub timezone: String,
    /// Decimal degrees, north positive.
    pub latitude: f64,
    /// Decimal degrees, east positive.
    pub longitude: f64,
    #[serde(default)]
    pub house_system: HouseSystem,
    #[serde(default)]
    pub ayanamsa: Ayanamsa,
}

impl BirthDetails {
    /// Whole-sign, Lahiri record.
    pub fn new(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        time_of_day: NaiveTime,
        timezone: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            time_of_day,
            timezone: timezone.into(),
            latitude,
            longitude,
            house_system: HouseSystem::default(),
            ayanamsa: Ayanamsa::default(),
        }
    }

    pub fn with_house_system(mut self, system: HouseSystem) -> Self {
        self.house_system = system;
        self
    }

    pub fn with_ayanamsa(mut self, ayanamsa: Ayanamsa) -> Self {
        self.ayanamsa = ayanamsa;
        self
    }

    /// Check field ranges. Timezone resolution is checked separately.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(EngineError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(EngineError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        if self.timezone.trim().is_empty() {
            return Err(EngineError::InvalidInput("timezone is empty".to_string()));
        }
        Ok(())
    }

    /// The birth instant in UTC with the offset that applied locally.
    pub fn resolve_instant(&self) -> Result<ResolvedInstant, EngineError> {
        Ok(resolve_local(
            self.date_of_birth,
            self.time_of_day,
            &self.timezone,
        )?)
    }

    /// Birth instant as a UTC Julian Day.
    pub fn julian_day(&self) -> Result<f64, EngineError> {
        Ok(datetime_to_jd(&self.resolve_instant()?.utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn delhi() -> BirthDetails {
        BirthDetails::new(
            "test",
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            "Asia/Kolkata",
            28.6139,
            77.2090,
        )
    }

    #[test]
    fn defaults_are_whole_and_lahiri() {
        let b = delhi();
        assert_eq!(b.house_system, HouseSystem::Whole);
        assert_eq!(b.ayanamsa, Ayanamsa::Lahiri);
        assert!(b.validate().is_ok());
    }

    #[test]
    fn julian_day_of_kolkata_morning() {
        // 10:30 IST = 05:00 UTC
        let jd = delhi().julian_day().unwrap();
        assert_abs_diff_eq!(jd, 2_447_906.708_333, epsilon = 1e-5);
    }

    #[test]
    fn out_of_range_coordinates() {
        let mut b = delhi();
        b.latitude = 91.0;
        assert!(matches!(b.validate(), Err(EngineError::InvalidInput(_))));
        let mut b = delhi();
        b.longitude = f64::NAN;
        assert!(matches!(b.validate(), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn unknown_zone_is_timezone_error() {
        let mut b = delhi();
        b.timezone = "Atlantis/Capital".into();
        assert!(matches!(
            b.resolve_instant(),
            Err(EngineError::InvalidTimezone(_))
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let b: BirthDetails = serde_json::from_str(
            r#"{"date_of_birth":"1990-01-15","time_of_day":"10:30:00",
                "timezone":"Asia/Kolkata","latitude":28.6139,"longitude":77.209}"#,
        )
        .unwrap();
        assert_eq!(b.name, "");
        assert_eq!(b.house_system, HouseSystem::Whole);
    }
}
