//! Domain models for the AgriRain platform

mod contact;
mod crop;
mod geometry;
mod location;
mod prediction;
mod probability;
mod weather;

pub use contact::*;
pub use crop::*;
pub use geometry::*;
pub use location::*;
pub use prediction::*;
pub use probability::*;
pub use weather::*;
