//! Plain-text rendering of the projected views
//!
//! One section per season, in response order. Values are printed
//! verbatim from the service; a missing field in a malformed-but-
//! decodable payload would already have surfaced at decode time, and
//! anything that decoded is shown as-is.

use shared::view::{RecommendationView, SeasonRecommendation, WeatherView};

/// Marker shown for a season with an empty crop list.
pub const NO_SUITABLE_CROPS: &str = "No suitable crops found for this season.";

/// Render seasonal weather as terminal text.
pub fn render_weather(view: &WeatherView) -> String {
    let mut output = String::from("Seasonal Weather Data\n\n");
    for section in &view.seasons {
        output.push_str(&format!(
            "{}:\n  Temperature: {}\n  Humidity: {}\n  Rainfall: {} mm\n\n",
            section.season, section.temperature, section.humidity, section.rainfall
        ));
    }
    output
}

/// Render crop recommendations as terminal text.
pub fn render_recommendations(view: &RecommendationView) -> String {
    let mut output = String::from("Recommended Crops\n\n");
    for section in &view.seasons {
        output.push_str(&format!("{} Season:\n", section.season));
        match &section.recommendation {
            SeasonRecommendation::Crops(cards) => {
                for card in cards {
                    output.push_str(&format!(
                        "  {} ({})\n    Soil Type: {}\n    Yield: {} - {} tons\n    Price: {} - {} per kg\n    Recommended Fertilizer: {}\n",
                        card.name,
                        card.image_path,
                        card.soil_type,
                        card.min_yield,
                        card.max_yield,
                        card.min_price,
                        card.max_price,
                        card.fertilizer
                    ));
                    if let Some(confidence) = &card.confidence {
                        output.push_str(&format!("    Confidence: {}\n", confidence));
                    }
                    output.push_str(&format!("    {}\n", card.description));
                }
            }
            SeasonRecommendation::NoSuitableCrops => {
                output.push_str(&format!("  {}\n", NO_SUITABLE_CROPS));
            }
        }
        output.push('\n');
    }
    output
}
