//! Crop recommendation records returned by the prediction service

use serde::{Deserialize, Serialize};

use crate::types::SeasonMap;

/// One recommended crop for a season, produced entirely by the
/// prediction service. The client treats it as opaque display data; the
/// only derived value is the image path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub name: String,
    pub soil_type: String,
    pub min_yield: f64,
    pub max_yield: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub fertilizer: String,
    pub description: String,
    /// Model confidence as formatted by the service (e.g. "95.23%").
    /// Older service builds omit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

impl Crop {
    /// Path of this crop's display image.
    pub fn image_path(&self) -> String {
        crop_image_path(&self.name)
    }
}

/// Recommended crops grouped by season, in the order the service
/// returned them. A season may map to an empty list.
pub type SeasonalCropPredictions = SeasonMap<Vec<Crop>>;

/// Derive the display image path for a crop name.
///
/// Whitespace is stripped and the remainder lowercased, so "Black Gram"
/// maps to `/crop_images/blackgram.jpg`. Total over any input; whether
/// the path resolves to a real image is the presentation layer's
/// problem.
pub fn crop_image_path(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    format!("/crop_images/{slug}.jpg")
}
