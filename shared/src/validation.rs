//! Validation utilities for AgriRain inputs and fixture data

use rust_decimal::Decimal;

use crate::models::WeatherSample;

/// Longest free-text query forwarded to the geocoding provider
pub const MAX_SEARCH_QUERY_LENGTH: usize = 200;

/// Longest client search session id accepted
pub const MAX_SESSION_ID_LENGTH: usize = 64;

/// Highest zoom level offered by the map widgets
pub const MAX_MAP_ZOOM: u8 = 19;

// ============================================================================
// Coordinates
// ============================================================================

/// Validate latitude is within -90..=90 degrees
pub fn validate_latitude(lat: f64) -> Result<(), &'static str> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate longitude is within -180..=180 degrees
pub fn validate_longitude(lon: f64) -> Result<(), &'static str> {
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), &'static str> {
    validate_latitude(lat)?;
    validate_longitude(lon)
}

/// Validate a map zoom level
pub fn validate_zoom(zoom: u8) -> Result<(), &'static str> {
    if zoom > MAX_MAP_ZOOM {
        return Err("Zoom must be between 0 and 19");
    }
    Ok(())
}

// ============================================================================
// Readings
// ============================================================================

/// Validate a percentage reading is within 0..=100
pub fn validate_percentage(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO || value > Decimal::from(100) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Check a fixture record is plausible enough to serve.
///
/// Records failing this are treated as absent, not as zero readings.
pub fn validate_weather_sample(sample: &WeatherSample) -> Result<(), &'static str> {
    validate_coordinates(sample.lat, sample.lon)?;
    validate_percentage(sample.rain_probability)
        .map_err(|_| "Rain probability must be between 0 and 100")?;
    validate_percentage(sample.humidity).map_err(|_| "Humidity must be between 0 and 100")?;
    validate_percentage(sample.soil_moisture)
        .map_err(|_| "Soil moisture must be between 0 and 100")?;
    if sample.precipitation < Decimal::ZERO {
        return Err("Precipitation cannot be negative");
    }
    if sample.wind_speed < Decimal::ZERO {
        return Err("Wind speed cannot be negative");
    }
    if sample.temp_low > sample.temp_high {
        return Err("Low temperature cannot exceed high temperature");
    }
    Ok(())
}

// ============================================================================
// Search
// ============================================================================

/// Validate a location search query before it leaves the service
pub fn validate_search_query(query: &str) -> Result<(), &'static str> {
    if query.chars().count() > MAX_SEARCH_QUERY_LENGTH {
        return Err("Search query is too long");
    }
    if query.chars().any(|c| c.is_control()) {
        return Err("Search query contains control characters");
    }
    Ok(())
}

/// Validate a client search session id: 1-64 printable ASCII characters
pub fn validate_session_id(session: &str) -> Result<(), &'static str> {
    if session.is_empty() || session.len() > MAX_SESSION_ID_LENGTH {
        return Err("Session id must be 1-64 characters");
    }
    if !session.chars().all(|c| c.is_ascii_graphic()) {
        return Err("Session id must be printable ASCII without spaces");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> WeatherSample {
        WeatherSample {
            lat: 28.6139,
            lon: 77.209,
            date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
            rain_probability: Decimal::from(75),
            precipitation: Decimal::from(12),
            temp_high: Decimal::from(28),
            temp_low: Decimal::from(18),
            humidity: Decimal::from(68),
            soil_moisture: Decimal::from(72),
            wind_speed: Decimal::from(15),
        }
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(28.6, 77.2).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(90.5, 0.0).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_validate_zoom() {
        assert!(validate_zoom(0).is_ok());
        assert!(validate_zoom(19).is_ok());
        assert!(validate_zoom(20).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage(Decimal::ZERO).is_ok());
        assert!(validate_percentage(Decimal::from(100)).is_ok());
        assert!(validate_percentage(Decimal::from(-1)).is_err());
        assert!(validate_percentage(Decimal::from(101)).is_err());
    }

    #[test]
    fn test_validate_weather_sample_valid() {
        assert!(validate_weather_sample(&sample()).is_ok());
    }

    #[test]
    fn test_validate_weather_sample_inverted_temperatures() {
        let mut s = sample();
        s.temp_low = Decimal::from(30);
        assert_eq!(
            validate_weather_sample(&s),
            Err("Low temperature cannot exceed high temperature")
        );
    }

    #[test]
    fn test_validate_weather_sample_bad_probability() {
        let mut s = sample();
        s.rain_probability = Decimal::from(140);
        assert!(validate_weather_sample(&s).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert!(validate_search_query("New Delhi").is_ok());
        assert!(validate_search_query(&"x".repeat(201)).is_err());
        assert!(validate_search_query("Delhi\n").is_err());
    }

    #[test]
    fn test_validate_session_id() {
        assert!(validate_session_id("tab-1").is_ok());
        assert!(validate_session_id(&"a".repeat(64)).is_ok());
        assert!(validate_session_id(&"a".repeat(65)).is_err());
        assert!(validate_session_id("").is_err());
        assert!(validate_session_id("tab 1").is_err());
        assert!(validate_session_id("tab\u{0}1").is_err());
        assert!(validate_session_id("séance").is_err());
    }
}
