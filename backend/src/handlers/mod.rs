//! HTTP handlers for the AgriRain API

pub mod area;
pub mod bands;
pub mod contact;
pub mod crops;
pub mod health;
pub mod location;
pub mod map;
pub mod prediction;
pub mod weather;

pub use area::*;
pub use bands::*;
pub use contact::*;
pub use crops::*;
pub use health::*;
pub use location::*;
pub use map::*;
pub use prediction::*;
pub use weather::*;
