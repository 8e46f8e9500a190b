//! Assembles the prediction page from weather, banding, crops and area

use rust_decimal::Decimal;
use shared::{
    classify, validate_latitude, validate_longitude, AreaMeasurement, CropRecommendation,
    FarmArea, GpsCoordinates, PredictionReport, PredictionRequest, ShapeStyle,
};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::services::weather::WeatherSource;

/// Prediction service
#[derive(Clone)]
pub struct PredictionService {
    weather: Arc<dyn WeatherSource>,
}

impl PredictionService {
    pub fn new(weather: Arc<dyn WeatherSource>) -> Self {
        Self { weather }
    }

    /// Build the report for a location, date and optional drawn shape
    pub fn predict(&self, request: &PredictionRequest) -> AppResult<PredictionReport> {
        validate_latitude(request.lat).map_err(|e| AppError::field("lat", e))?;
        validate_longitude(request.lon).map_err(|e| AppError::field("lon", e))?;

        let weather = self.weather.lookup(request.lat, request.lon, request.date);
        if weather.is_none() {
            tracing::debug!(
                lat = request.lat,
                lon = request.lon,
                date = %request.date,
                "No weather sample for prediction"
            );
        }

        let classification = weather.as_ref().map(|w| classify(w.rain_probability));
        let recommendation = weather
            .as_ref()
            .map(|w| CropRecommendation::evaluate(w.growing_conditions()));

        let shape_style = match (&weather, &classification) {
            (Some(w), Some(c)) if w.rain_probability > Decimal::ZERO => {
                Some(ShapeStyle::for_band(c.band))
            }
            _ => None,
        };

        let area = request.shape.as_ref().map(|shape| FarmArea {
            shape: shape.clone(),
            measurement: AreaMeasurement::from_hectares(shape.area_hectares()),
            bounds: shape.bounds(),
        });

        Ok(PredictionReport {
            location: GpsCoordinates::new(request.lat, request.lon),
            date: request.date,
            weather,
            classification,
            recommendation,
            area,
            shape_style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::weather::WeatherDataset;
    use chrono::NaiveDate;
    use shared::{GeoShape, ProbabilityBand, WaterRegime, WeatherSample};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    }

    fn service(rain: i64) -> PredictionService {
        let sample = WeatherSample {
            lat: 28.6139,
            lon: 77.209,
            date: date(),
            rain_probability: Decimal::from(rain),
            precipitation: Decimal::from(12),
            temp_high: Decimal::from(32),
            temp_low: Decimal::from(24),
            humidity: Decimal::from(78),
            soil_moisture: Decimal::from(62),
            wind_speed: Decimal::from(14),
        };
        PredictionService::new(Arc::new(WeatherDataset::new(vec![sample], 0.5)))
    }

    fn request(shape: Option<GeoShape>) -> PredictionRequest {
        PredictionRequest {
            lat: 28.62,
            lon: 77.21,
            date: date(),
            shape,
        }
    }

    #[test]
    fn test_report_with_data() {
        let report = service(80).predict(&request(None)).unwrap();

        assert!(report.has_data());
        let classification = report.classification.unwrap();
        assert_eq!(classification.band, ProbabilityBand::VeryHigh);

        let recommendation = report.recommendation.unwrap();
        assert_eq!(recommendation.water_regime, WaterRegime::HighWater);
        assert_eq!(recommendation.conditions.temperature, Decimal::from(28));
        assert_eq!(recommendation.crops[0].score, 95);
        assert!(report.area.is_none());
    }

    #[test]
    fn test_shape_gets_band_style() {
        let shape = GeoShape::circle(GpsCoordinates::new(28.62, 77.21), 100.0);
        let report = service(55).predict(&request(Some(shape))).unwrap();

        let style = report.shape_style.unwrap();
        assert_eq!(style.color, "#ffffff");
        assert_eq!(style.fill_color, "#3b82f6");
        assert_eq!(style.fill_opacity, 0.5);
        assert_eq!(style.weight, 2);

        let area = report.area.unwrap();
        assert!((area.measurement.hectares - 3.14159).abs() < 1e-3);
    }

    #[test]
    fn test_zero_rain_leaves_shape_unstyled() {
        let report = service(0).predict(&request(None)).unwrap();
        assert!(report.shape_style.is_none());
        assert!(report.classification.is_some());
    }

    #[test]
    fn test_missing_sample_is_no_data() {
        let shape = GeoShape::circle(GpsCoordinates::new(19.07, 72.87), 50.0);
        let mut req = request(Some(shape));
        req.lat = 19.076;
        req.lon = 72.8777;

        let report = service(80).predict(&req).unwrap();
        assert!(!report.has_data());
        assert!(report.classification.is_none());
        assert!(report.recommendation.is_none());
        assert!(report.shape_style.is_none());
        assert!(report.area.is_some());
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let mut req = request(None);
        req.lat = 123.0;
        let err = service(80).predict(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
