//! HTTP handlers for location search

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{validate_search_query, validate_session_id, LocationSearchResponse};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for location search
#[derive(Debug, Deserialize)]
pub struct LocationSearchQuery {
    pub q: String,
    /// Client session id; enables debouncing and stale-result suppression
    pub session: Option<String>,
}

/// Search places by free text
pub async fn search_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationSearchQuery>,
) -> AppResult<Json<LocationSearchResponse>> {
    validate_search_query(&query.q).map_err(|e| AppError::field("q", e))?;

    let session = query
        .session
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let response = match session {
        Some(session) => {
            validate_session_id(session).map_err(|e| AppError::field("session", e))?;
            state.locations.search_in_session(session, &query.q).await
        }
        None => LocationSearchResponse::found(state.locations.search(&query.q).await),
    };

    Ok(Json(response))
}
