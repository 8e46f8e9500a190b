//! Map widget adapters
//!
//! The front end renders whichever widget the server describes. Both
//! providers offer the same drawing tools and legend; they differ in how
//! the base map is loaded.

use serde::Serialize;
use shared::{legend, GpsCoordinates, LegendEntry};

use crate::config::{MapConfig, MapProvider};
use crate::error::{AppError, AppResult};

/// Stroke color for shapes while they are being drawn
pub const DRAW_COLOR: &str = "#22c55e";

/// Fill opacity for shapes while they are being drawn
pub const DRAW_FILL_OPACITY: f64 = 0.4;

/// Produces the widget description for a map view
pub trait MapAdapter: Send + Sync {
    fn provider(&self) -> MapProvider;

    fn widget_config(&self, center: GpsCoordinates, zoom: u8) -> MapWidgetConfig;
}

/// Drawing tool settings shared by all providers
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DrawTools {
    pub polygon: bool,
    pub circle: bool,
    pub rectangle: bool,
    pub polyline: bool,
    pub marker: bool,
    pub allow_self_intersection: bool,
    pub color: &'static str,
    pub fill_opacity: f64,
}

impl Default for DrawTools {
    fn default() -> Self {
        Self {
            polygon: true,
            circle: true,
            rectangle: true,
            polyline: false,
            marker: false,
            allow_self_intersection: false,
            color: DRAW_COLOR,
            fill_opacity: DRAW_FILL_OPACITY,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SdkSettings {
    pub api_key: String,
}

/// Everything the front end needs to render the map
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapWidgetConfig {
    pub provider: &'static str,
    pub center: GpsCoordinates,
    pub zoom: u8,
    pub max_zoom: u8,
    /// Zoom applied after a search result is selected
    pub selected_zoom: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiles: Option<TileLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk: Option<SdkSettings>,
    pub draw: DrawTools,
    pub legend: Vec<LegendEntry>,
}

/// OpenStreetMap-style raster tiles
pub struct TileMapAdapter {
    tiles: TileLayer,
    max_zoom: u8,
    selected_zoom: u8,
}

impl TileMapAdapter {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            tiles: TileLayer {
                url_template: config.tile_url.clone(),
                attribution: config.attribution.clone(),
            },
            max_zoom: config.max_zoom,
            selected_zoom: config.selected_zoom,
        }
    }
}

impl MapAdapter for TileMapAdapter {
    fn provider(&self) -> MapProvider {
        MapProvider::Tile
    }

    fn widget_config(&self, center: GpsCoordinates, zoom: u8) -> MapWidgetConfig {
        MapWidgetConfig {
            provider: MapProvider::Tile.as_str(),
            center,
            zoom: zoom.min(self.max_zoom),
            max_zoom: self.max_zoom,
            selected_zoom: self.selected_zoom,
            tiles: Some(self.tiles.clone()),
            sdk: None,
            draw: DrawTools::default(),
            legend: legend(),
        }
    }
}

/// Commercial maps SDK loaded with an API key
pub struct SdkMapAdapter {
    api_key: String,
    max_zoom: u8,
    selected_zoom: u8,
}

impl SdkMapAdapter {
    pub fn new(config: &MapConfig) -> AppResult<Self> {
        let api_key = config
            .sdk_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Configuration("map.sdk_api_key is required for the sdk provider".into())
            })?;

        Ok(Self {
            api_key: api_key.to_string(),
            max_zoom: config.max_zoom,
            selected_zoom: config.selected_zoom,
        })
    }
}

impl MapAdapter for SdkMapAdapter {
    fn provider(&self) -> MapProvider {
        MapProvider::Sdk
    }

    fn widget_config(&self, center: GpsCoordinates, zoom: u8) -> MapWidgetConfig {
        MapWidgetConfig {
            provider: MapProvider::Sdk.as_str(),
            center,
            zoom: zoom.min(self.max_zoom),
            max_zoom: self.max_zoom,
            selected_zoom: self.selected_zoom,
            tiles: None,
            sdk: Some(SdkSettings {
                api_key: self.api_key.clone(),
            }),
            draw: DrawTools::default(),
            legend: legend(),
        }
    }
}

/// Build the adapter selected by configuration
pub fn adapter_for(config: &MapConfig) -> AppResult<Box<dyn MapAdapter>> {
    match config.provider {
        MapProvider::Tile => Ok(Box::new(TileMapAdapter::new(config))),
        MapProvider::Sdk => Ok(Box::new(SdkMapAdapter::new(config)?)),
    }
}
