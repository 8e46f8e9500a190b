//! HTTP handler for prediction reports

use axum::{extract::State, Json};
use shared::{PredictionReport, PredictionRequest};

use crate::error::AppResult;
use crate::services::PredictionService;
use crate::AppState;

/// Build the prediction report for a location, date and optional shape
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> AppResult<Json<PredictionReport>> {
    let service = PredictionService::new(state.weather.clone());
    let report = service.predict(&request)?;
    Ok(Json(report))
}
