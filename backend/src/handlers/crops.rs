//! HTTP handlers for crop recommendations

use axum::{extract::Query, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{validate_percentage, CropRecommendation, GrowingConditions};

use crate::error::{AppError, AppResult};

/// Query parameters for crop recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub rain_probability: Decimal,
    pub temperature: Decimal,
    pub soil_moisture: Decimal,
}

/// Recommend crops for the given conditions
pub async fn recommend_crops(
    Query(query): Query<RecommendQuery>,
) -> AppResult<Json<CropRecommendation>> {
    validate_percentage(query.rain_probability)
        .map_err(|e| AppError::field("rain_probability", e))?;
    validate_percentage(query.soil_moisture).map_err(|e| AppError::field("soil_moisture", e))?;

    Ok(Json(CropRecommendation::evaluate(GrowingConditions {
        rain_probability: query.rain_probability,
        temperature: query.temperature,
        soil_moisture: query.soil_moisture,
    })))
}
