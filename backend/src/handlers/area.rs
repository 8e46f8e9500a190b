//! HTTP handler for drawn-area measurement

use axum::Json;
use shared::{AreaMeasurement, GeoShape};

/// Measure a drawn shape in hectares and acres
pub async fn calculate_area(Json(shape): Json<GeoShape>) -> Json<AreaMeasurement> {
    Json(AreaMeasurement::from_hectares(shape.area_hectares()))
}
