//! Prediction report combining weather, banding, crops and drawn area

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::crop::CropRecommendation;
use crate::models::geometry::GeoShape;
use crate::models::probability::{Classification, ProbabilityBand};
use crate::models::weather::WeatherSample;
use crate::types::{AreaMeasurement, BoundingBox, GpsCoordinates};

/// Request for a prediction at a location and date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub lat: f64,
    pub lon: f64,
    pub date: NaiveDate,
    /// Farm area drawn on the map, if any
    #[serde(default)]
    pub shape: Option<GeoShape>,
}

/// Fill style applied to drawn shapes once a rain probability is known
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ShapeStyle {
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub weight: u8,
}

impl ShapeStyle {
    pub fn for_band(band: ProbabilityBand) -> Self {
        Self {
            color: "#ffffff",
            fill_color: band.color(),
            fill_opacity: 0.5,
            weight: 2,
        }
    }
}

/// Drawn farm area with its measurement
#[derive(Debug, Clone, Serialize)]
pub struct FarmArea {
    pub shape: GeoShape,
    pub measurement: AreaMeasurement,
    pub bounds: Option<BoundingBox>,
}

/// Everything the prediction page shows for one location and date.
///
/// `weather` is absent when the dataset has no sample; classification and
/// recommendation are then absent too, never zero-filled.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub location: GpsCoordinates,
    pub date: NaiveDate,
    pub weather: Option<WeatherSample>,
    pub classification: Option<Classification>,
    pub recommendation: Option<CropRecommendation>,
    pub area: Option<FarmArea>,
    pub shape_style: Option<ShapeStyle>,
}

impl PredictionReport {
    pub fn has_data(&self) -> bool {
        self.weather.is_some()
    }
}
