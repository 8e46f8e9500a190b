//! WebAssembly module for AgriRain
//!
//! Provides client-side computation for:
//! - Drawn area measurement
//! - Rain probability classification
//! - Crop recommendations
//! - Search query gating

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

fn js_error(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

#[cfg(target_arch = "wasm32")]
fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_message: &str) {}

/// Area of a drawn shape in hectares.
///
/// Accepts the tagged shape JSON (`{"type": "circle", ...}`); degenerate
/// shapes measure zero.
#[wasm_bindgen]
pub fn calculate_area_hectares(shape_json: &str) -> Result<f64, JsValue> {
    let shape: GeoShape = serde_json::from_str(shape_json).map_err(|e| {
        warn("Rejected drawn shape");
        js_error("Invalid shape JSON", e)
    })?;
    Ok(shape.area_hectares())
}

/// Area of a circle in hectares
#[wasm_bindgen]
pub fn circle_area_hectares(radius_meters: f64) -> f64 {
    GeoShape::circle(GpsCoordinates::new(0.0, 0.0), radius_meters).area_hectares()
}

/// Convert hectares to acres
#[wasm_bindgen]
pub fn to_acres(hectares: f64) -> f64 {
    hectares_to_acres(hectares)
}

/// Band label for a rain probability percentage
#[wasm_bindgen]
pub fn classify_rain_probability(probability: f64) -> String {
    band_for(saturating_decimal(probability)).to_string()
}

/// Fill color for a rain probability percentage
#[wasm_bindgen]
pub fn rain_color(probability: f64) -> String {
    classify(saturating_decimal(probability)).color.to_string()
}

/// Crop panel contents as JSON
#[wasm_bindgen]
pub fn recommend_crops_json(
    rain_probability: f64,
    temperature: f64,
    soil_moisture: f64,
) -> Result<String, JsValue> {
    let recommendation = CropRecommendation::evaluate(GrowingConditions {
        rain_probability: saturating_decimal(rain_probability),
        temperature: saturating_decimal(temperature),
        soil_moisture: saturating_decimal(soil_moisture),
    });
    serde_json::to_string(&recommendation).map_err(|e| js_error("Serialization failed", e))
}

/// Map legend rows as JSON, highest band first
#[wasm_bindgen]
pub fn legend_json() -> Result<String, JsValue> {
    serde_json::to_string(&legend()).map_err(|e| js_error("Serialization failed", e))
}

/// Whether a search box value should be sent to the geocoder
#[wasm_bindgen]
pub fn should_search_location(query: &str) -> bool {
    is_searchable_query(query) && validate_search_query(query).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_area_hectares() {
        let json = r#"{"type": "circle", "center_lat": 28.6, "center_lon": 77.2, "radius_meters": 100.0}"#;
        let hectares = calculate_area_hectares(json).unwrap();
        assert!((hectares - 3.14159).abs() < 0.001);
        assert!((circle_area_hectares(100.0) - hectares).abs() < 1e-9);
    }

    #[test]
    fn test_to_acres() {
        assert!((to_acres(1.0) - 2.47105).abs() < 1e-9);
    }

    #[test]
    fn test_classify_rain_probability() {
        assert_eq!(classify_rain_probability(72.0), "Very High");
        assert_eq!(classify_rain_probability(50.0), "High");
        assert_eq!(classify_rain_probability(35.0), "Moderate");
        assert_eq!(classify_rain_probability(15.0), "Low");
        assert_eq!(classify_rain_probability(14.0), "Very Low");
        assert_eq!(classify_rain_probability(f64::NAN), "Very Low");
    }

    #[test]
    fn test_rain_color() {
        assert_eq!(rain_color(72.0), "#1e3a8a");
        assert_eq!(rain_color(14.0), "#fca5a5");
    }

    #[test]
    fn test_recommend_crops_json() {
        let json = recommend_crops_json(80.0, 28.0, 60.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["crops"][0]["name"], "Rice");
        assert_eq!(value["crops"][0]["score"], 95);
    }

    #[test]
    fn test_legend_json() {
        let value: serde_json::Value = serde_json::from_str(&legend_json().unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_should_search_location() {
        assert!(!should_search_location("De"));
        assert!(should_search_location("Delhi"));
        assert!(!should_search_location("Del\u{0007}hi"));
    }
}
