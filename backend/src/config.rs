//! Configuration management for the AgriRain server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRIRAIN_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Geocoding provider configuration
    pub geocoding: GeocodingConfig,

    /// Weather fixture configuration
    pub weather: WeatherConfig,

    /// Map widget configuration
    pub map: MapConfig,

    /// Log output configuration
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    /// Provider base URL (Nominatim-compatible)
    pub base_url: String,

    /// Client identifier sent as User-Agent
    pub user_agent: String,

    /// Maximum candidates requested per query
    pub result_limit: u8,

    /// Quiet period before a session's query is sent
    pub debounce_ms: u64,

    /// Outbound request timeout
    pub timeout_secs: u64,

    /// Search sessions idle longer than this are forgotten
    pub session_idle_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Path to the weather fixture (.json or .csv)
    pub dataset_path: String,

    /// Maximum latitude/longitude difference for a sample to match
    pub match_tolerance_degrees: f64,
}

/// Which map widget implementation the front end should load
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    /// Raster tiles with drawing tools
    Tile,
    /// Commercial maps SDK
    Sdk,
}

impl MapProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapProvider::Tile => "tile",
            MapProvider::Sdk => "sdk",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    pub provider: MapProvider,

    /// Tile URL template for the tile provider
    pub tile_url: String,

    pub attribution: String,

    pub max_zoom: u8,

    /// Maps SDK key; held in memory only
    pub sdk_api_key: Option<String>,

    pub default_lat: f64,

    pub default_lon: f64,

    pub default_zoom: u8,

    /// Zoom applied after a search result is selected
    pub selected_zoom: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// "pretty" or "json"
    pub format: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRIRAIN_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("geocoding.base_url", "https://nominatim.openstreetmap.org")?
            .set_default("geocoding.user_agent", "AgriRain/1.0")?
            .set_default("geocoding.result_limit", 5)?
            .set_default("geocoding.debounce_ms", 500)?
            .set_default("geocoding.timeout_secs", 10)?
            .set_default("geocoding.session_idle_secs", 300)?
            .set_default("weather.dataset_path", "data/mock_weather_data.json")?
            .set_default("weather.match_tolerance_degrees", 0.5)?
            .set_default("map.provider", "tile")?
            .set_default(
                "map.tile_url",
                "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            )?
            .set_default("map.attribution", "© OpenStreetMap contributors")?
            .set_default("map.max_zoom", 19)?
            .set_default("map.default_lat", 28.6139)?
            .set_default("map.default_lon", 77.209)?
            .set_default("map.default_zoom", 10)?
            .set_default("map.selected_zoom", 12)?
            .set_default("log.format", "pretty")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRIRAIN_ prefix)
            .add_source(
                Environment::with_prefix("AGRIRAIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by unit tests; never touches the environment
    pub fn for_tests() -> Self {
        Self {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            geocoding: GeocodingConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                user_agent: "AgriRain/1.0".to_string(),
                result_limit: 5,
                debounce_ms: 0,
                timeout_secs: 2,
                session_idle_secs: 300,
            },
            weather: WeatherConfig {
                dataset_path: String::new(),
                match_tolerance_degrees: 0.5,
            },
            map: MapConfig {
                provider: MapProvider::Tile,
                tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                attribution: "© OpenStreetMap contributors".to_string(),
                max_zoom: 19,
                sdk_api_key: None,
                default_lat: 28.6139,
                default_lon: 77.209,
                default_zoom: 10,
                selected_zoom: 12,
            },
            log: LogConfig {
                format: "pretty".to_string(),
            },
        }
    }
}
