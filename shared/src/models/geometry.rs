//! Drawn map shapes and their surface area

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::types::{BoundingBox, GpsCoordinates, SQUARE_METERS_PER_HECTARE};
use crate::validation::validate_coordinates;

/// Equatorial radius used for geodesic polygon area (WGS84, meters)
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Minimum number of vertices for a polygon to enclose any area
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A shape produced by a drawing interaction on the map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeoShape {
    Circle {
        center_lat: f64,
        center_lon: f64,
        radius_meters: f64,
    },
    /// Vertex ring in drawing order; the closing edge is implicit
    Polygon { vertices: Vec<GpsCoordinates> },
    Rectangle {
        south: f64,
        west: f64,
        north: f64,
        east: f64,
    },
}

impl GeoShape {
    pub fn circle(center: GpsCoordinates, radius_meters: f64) -> Self {
        GeoShape::Circle {
            center_lat: center.latitude,
            center_lon: center.longitude,
            radius_meters,
        }
    }

    pub fn polygon<I, P>(vertices: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<GpsCoordinates>,
    {
        GeoShape::Polygon {
            vertices: vertices.into_iter().map(Into::into).collect(),
        }
    }

    /// Area in hectares; degenerate shapes measure zero
    pub fn area_hectares(&self) -> f64 {
        area(self)
    }

    /// Bounding box of the shape. Circles use a spherical approximation of
    /// the radius in degrees.
    pub fn bounds(&self) -> Option<BoundingBox> {
        match self {
            GeoShape::Circle {
                center_lat,
                center_lon,
                radius_meters,
            } => {
                let radius = radius_meters.max(0.0);
                let dlat = (radius / EARTH_RADIUS_METERS).to_degrees();
                let cos_lat = center_lat.to_radians().cos().abs().max(1e-12);
                let dlon = dlat / cos_lat;
                Some(BoundingBox {
                    south: center_lat - dlat,
                    west: center_lon - dlon,
                    north: center_lat + dlat,
                    east: center_lon + dlon,
                })
            }
            GeoShape::Polygon { vertices } => BoundingBox::enclosing(vertices.iter().copied()),
            GeoShape::Rectangle {
                south,
                west,
                north,
                east,
            } => Some(BoundingBox {
                south: south.min(*north),
                west: west.min(*east),
                north: south.max(*north),
                east: west.max(*east),
            }),
        }
    }
}

/// Area of a drawn shape in hectares.
///
/// Circles use the planar disc formula. Polygons and rectangles use the
/// spherical-excess approximation on a sphere of [`EARTH_RADIUS_METERS`].
/// Fewer than three vertices, non-positive radii and coordinates off the
/// globe all measure zero, as does any result that overflows.
pub fn area(shape: &GeoShape) -> f64 {
    let hectares = match shape {
        GeoShape::Circle {
            center_lat,
            center_lon,
            radius_meters,
        } => {
            if validate_coordinates(*center_lat, *center_lon).is_err() {
                return 0.0;
            }
            circle_area_hectares(*radius_meters)
        }
        GeoShape::Polygon { vertices } => geodesic_area_m2(vertices) / SQUARE_METERS_PER_HECTARE,
        GeoShape::Rectangle {
            south,
            west,
            north,
            east,
        } => {
            let ring = [
                GpsCoordinates::new(*south, *west),
                GpsCoordinates::new(*north, *west),
                GpsCoordinates::new(*north, *east),
                GpsCoordinates::new(*south, *east),
            ];
            geodesic_area_m2(&ring) / SQUARE_METERS_PER_HECTARE
        }
    };

    if hectares.is_finite() {
        hectares
    } else {
        0.0
    }
}

fn circle_area_hectares(radius_meters: f64) -> f64 {
    if !radius_meters.is_finite() || radius_meters <= 0.0 {
        return 0.0;
    }
    PI * radius_meters * radius_meters / SQUARE_METERS_PER_HECTARE
}

/// Geodesic surface area of a closed vertex ring in square meters.
///
/// Rings with a vertex outside valid latitude/longitude ranges measure zero.
pub fn geodesic_area_m2(ring: &[GpsCoordinates]) -> f64 {
    if ring.len() < MIN_POLYGON_VERTICES
        || ring
            .iter()
            .any(|p| validate_coordinates(p.latitude, p.longitude).is_err())
    {
        return 0.0;
    }

    let sum: f64 = ring
        .iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(p1, p2)| {
            (p2.longitude - p1.longitude).to_radians()
                * (2.0 + p1.latitude.to_radians().sin() + p2.latitude.to_radians().sin())
        })
        .sum();

    (sum * EARTH_RADIUS_METERS * EARTH_RADIUS_METERS / 2.0).abs()
}
