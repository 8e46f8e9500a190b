//! Common types used across the platform

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hectares to acres conversion factor
pub const ACRES_PER_HECTARE: f64 = 2.47105;

/// Square meters in one hectare
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for GpsCoordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Axis-aligned bounds of a drawn shape
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for an empty iterator
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GpsCoordinates>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => BoundingBox {
                    south: p.latitude,
                    west: p.longitude,
                    north: p.latitude,
                    east: p.longitude,
                },
                Some(b) => BoundingBox {
                    south: b.south.min(p.latitude),
                    west: b.west.min(p.longitude),
                    north: b.north.max(p.latitude),
                    east: b.east.max(p.longitude),
                },
            })
        })
    }
}

/// Area of a drawn shape in the units shown to farmers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AreaMeasurement {
    pub hectares: f64,
    pub acres: f64,
}

impl AreaMeasurement {
    pub fn from_hectares(hectares: f64) -> Self {
        Self {
            hectares,
            acres: hectares_to_acres(hectares),
        }
    }
}

/// Convert hectares to acres
pub fn hectares_to_acres(hectares: f64) -> f64 {
    hectares * ACRES_PER_HECTARE
}

/// Convert a browser-side float into the decimal probability domain.
///
/// NaN maps to zero and values beyond the decimal range saturate, so the
/// classifiers stay total when fed raw JavaScript numbers.
pub fn saturating_decimal(value: f64) -> Decimal {
    if value.is_nan() || value.abs() < 1e-28 {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(if value > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}
