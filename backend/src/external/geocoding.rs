//! Geocoding API client for free-text location search
//!
//! Integrates with Nominatim-compatible providers (OpenStreetMap by default)

use reqwest::Client;
use serde::Deserialize;
use shared::LocationCandidate;
use std::time::Duration;

use crate::config::GeocodingConfig;
use crate::error::{AppError, AppResult};

/// Geocoding API client
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    result_limit: u8,
}

/// Nominatim search response item
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    place_id: u64,
    display_name: String,
    lat: String,
    lon: String,
}

impl GeocodingClient {
    /// Create a new GeocodingClient from configuration
    pub fn new(config: &GeocodingConfig) -> AppResult<Self> {
        Self::with_base_url(config, config.base_url.clone())
    }

    /// Create a new GeocodingClient with custom base URL (for testing)
    pub fn with_base_url(config: &GeocodingConfig, base_url: String) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Geocoding client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            result_limit: config.result_limit,
        })
    }

    /// Search the provider for places matching free text
    pub async fn search(&self, query: &str) -> AppResult<Vec<LocationCandidate>> {
        let url = format!("{}/search", self.base_url);
        let limit = self.result_limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", query), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Geocoding(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Geocoding(format!("{} - {}", status, body)));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| AppError::Geocoding(format!("failed to parse response: {}", e)))?;

        Ok(places.into_iter().filter_map(convert_place).collect())
    }
}

/// Convert a provider record, dropping ones with unparsable coordinates
fn convert_place(place: NominatimPlace) -> Option<LocationCandidate> {
    match (place.lat.trim().parse::<f64>(), place.lon.trim().parse::<f64>()) {
        (Ok(lat), Ok(lon)) if shared::validate_coordinates(lat, lon).is_ok() => {
            Some(LocationCandidate {
                id: place.place_id,
                display_name: place.display_name,
                lat,
                lon,
            })
        }
        _ => {
            tracing::warn!(
                place_id = place.place_id,
                lat = %place.lat,
                lon = %place.lon,
                "Skipping geocoding result with invalid coordinates"
            );
            None
        }
    }
}
