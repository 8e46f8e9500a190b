//! HTTP handler for map widget configuration

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{validate_latitude, validate_longitude, validate_zoom, GpsCoordinates};

use crate::error::{AppError, AppResult};
use crate::services::MapWidgetConfig;
use crate::AppState;

/// Optional view overrides; omitted values use the configured defaults
#[derive(Debug, Deserialize)]
pub struct MapConfigQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub zoom: Option<u8>,
}

/// Describe the map widget the front end should render
pub async fn get_map_config(
    State(state): State<AppState>,
    Query(query): Query<MapConfigQuery>,
) -> AppResult<Json<MapWidgetConfig>> {
    let defaults = &state.config.map;
    let lat = query.lat.unwrap_or(defaults.default_lat);
    let lon = query.lon.unwrap_or(defaults.default_lon);
    let zoom = query.zoom.unwrap_or(defaults.default_zoom);

    validate_latitude(lat).map_err(|e| AppError::field("lat", e))?;
    validate_longitude(lon).map_err(|e| AppError::field("lon", e))?;
    validate_zoom(zoom).map_err(|e| AppError::field("zoom", e))?;

    Ok(Json(state.map.widget_config(GpsCoordinates::new(lat, lon), zoom)))
}
