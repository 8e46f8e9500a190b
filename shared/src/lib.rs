//! Shared types and computations for the AgriRain platform
//!
//! This crate holds the pure computations (drawn-area measurement, rain
//! probability banding, crop recommendations) shared between the backend
//! and the browser map widget (via WASM).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
