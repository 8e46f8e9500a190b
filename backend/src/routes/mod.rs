//! Route definitions for the AgriRain API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/locations", location_routes())
        .route("/area", post(handlers::calculate_area))
        .nest("/bands", band_routes())
        .nest("/crops", crop_routes())
        .route("/weather", get(handlers::get_weather))
        .route("/predictions", post(handlers::create_prediction))
        .route("/map/config", get(handlers::get_map_config))
        .route("/contact", post(handlers::submit_contact))
}

/// Location search routes
fn location_routes() -> Router<AppState> {
    Router::new().route("/search", get(handlers::search_locations))
}

/// Probability band routes
fn band_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_bands))
        .route("/classify", get(handlers::classify_probability))
}

/// Crop recommendation routes
fn crop_routes() -> Router<AppState> {
    Router::new().route("/recommend", get(handlers::recommend_crops))
}
