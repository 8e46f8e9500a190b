//! Weather sample records consumed from the forecast fixture

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::crop::GrowingConditions;

/// Daily weather readings for one location.
///
/// Field names follow the fixture format (camelCase) so the bundled
/// dataset can be loaded without translation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSample {
    pub lat: f64,
    pub lon: f64,
    pub date: NaiveDate,
    /// Percent
    pub rain_probability: Decimal,
    /// Millimeters
    pub precipitation: Decimal,
    /// Celsius
    pub temp_high: Decimal,
    /// Celsius
    pub temp_low: Decimal,
    /// Percent
    pub humidity: Decimal,
    /// Percent
    pub soil_moisture: Decimal,
    /// km/h
    pub wind_speed: Decimal,
}

impl WeatherSample {
    /// Midpoint of the daily high and low
    pub fn mean_temperature(&self) -> Decimal {
        (self.temp_high + self.temp_low) / Decimal::from(2)
    }

    /// Readings used by the crop recommendation panel
    pub fn growing_conditions(&self) -> GrowingConditions {
        GrowingConditions {
            rain_probability: self.rain_probability,
            temperature: self.mean_temperature(),
            soil_moisture: self.soil_moisture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_record_parses() {
        let json = r#"{
            "lat": 28.6139, "lon": 77.209, "date": "2025-07-14",
            "rainProbability": 75, "precipitation": 12,
            "tempHigh": 28, "tempLow": 18, "humidity": 68,
            "soilMoisture": 72, "windSpeed": 15
        }"#;
        let sample: WeatherSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.date, NaiveDate::from_ymd_opt(2025, 7, 14).unwrap());
        assert_eq!(sample.mean_temperature(), Decimal::from(23));
        assert_eq!(sample.growing_conditions().soil_moisture, Decimal::from(72));
    }
}
