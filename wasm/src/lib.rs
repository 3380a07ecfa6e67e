//! WebAssembly module for the Crop Advisor client
//!
//! Exposes the pure projection helpers to a browser front-end:
//! - Crop image path derivation
//! - Season-keyed response projection into render-ready views
//! - Season key listing in response order

use wasm_bindgen::prelude::*;

use shared::models::{crop_image_path as image_path, SeasonalCropPredictions, SeasonalWeather};
use shared::types::SeasonMap;
use shared::view::{recommendation_view, weather_view};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&"crop-advisor wasm module loaded".into());
}

/// Derive the display image path for a crop name
#[wasm_bindgen]
pub fn crop_image_path(name: &str) -> String {
    image_path(name)
}

/// Project a weather response (JSON object keyed by season) into the
/// render-ready view, preserving season order
#[wasm_bindgen]
pub fn weather_view_json(weather_json: &str) -> Result<String, JsValue> {
    let weather: SeasonalWeather = serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;

    serde_json::to_string(&weather_view(&weather))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize view: {}", e)))
}

/// Project a prediction response (JSON object keyed by season) into the
/// render-ready view, marking empty seasons as having no suitable crops
#[wasm_bindgen]
pub fn recommendation_view_json(predictions_json: &str) -> Result<String, JsValue> {
    let predictions: SeasonalCropPredictions = serde_json::from_str(predictions_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid predictions JSON: {}", e)))?;

    serde_json::to_string(&recommendation_view(&predictions))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize view: {}", e)))
}

/// List the season keys of a season-keyed JSON object in response order
#[wasm_bindgen]
pub fn season_names(response_json: &str) -> Result<js_sys::Array, JsValue> {
    let map: SeasonMap<serde_json::Value> = serde_json::from_str(response_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid response JSON: {}", e)))?;

    Ok(map
        .iter()
        .map(|(season, _)| JsValue::from_str(season))
        .collect())
}
