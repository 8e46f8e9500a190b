//! Business logic services for the AgriRain server

pub mod contact;
pub mod location;
pub mod map;
pub mod prediction;
pub mod weather;

pub use contact::ContactService;
pub use location::LocationService;
pub use map::{adapter_for, MapAdapter, MapWidgetConfig};
pub use prediction::PredictionService;
pub use weather::{WeatherDataset, WeatherSource};
