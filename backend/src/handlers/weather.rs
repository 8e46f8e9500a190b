//! HTTP handlers for weather sample lookup

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{validate_latitude, validate_longitude, WeatherSample};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for weather lookup
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: f64,
    pub lon: f64,
    pub date: NaiveDate,
}

/// Weather sample nearest to a location on a date
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherSample>> {
    validate_latitude(query.lat).map_err(|e| AppError::field("lat", e))?;
    validate_longitude(query.lon).map_err(|e| AppError::field("lon", e))?;

    state
        .weather
        .lookup(query.lat, query.lon, query.date)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Weather data".to_string()))
}
