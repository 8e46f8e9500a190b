//! AgriRain - Backend Server
//!
//! Rain probability, crop suitability and farm area measurement for
//! farmers choosing what to plant.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use services::{LocationService, MapAdapter, WeatherDataset, WeatherSource};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub locations: Arc<LocationService>,
    pub weather: Arc<dyn WeatherSource>,
    pub map: Arc<dyn MapAdapter>,
}

impl AppState {
    /// Build services from configuration
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let locations = LocationService::new(&config.geocoding)?;
        let weather = WeatherDataset::load(
            &config.weather.dataset_path,
            config.weather.match_tolerance_degrees,
        );
        let map = services::adapter_for(&config.map)?;

        Ok(Self {
            config: Arc::new(config),
            locations: Arc::new(locations),
            weather: Arc::new(weather),
            map: Arc::from(map),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    init_tracing(&config);

    tracing::info!("Starting AgriRain Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Map provider: {}", config.map.provider.as_str());

    let addr: SocketAddr = config.bind_address().parse()?;

    // Create application state
    let state = AppState::from_config(config)?;
    tracing::info!("Weather samples available: {}", state.weather.sample_count());

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize tracing with pretty or JSON output
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "agrirain_server=debug,tower_http=debug".into());

    let json = config.log.format.eq_ignore_ascii_case("json");

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriRain API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
