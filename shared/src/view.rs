//! Render-ready projections of the service responses
//!
//! The presentation layer (terminal renderer or browser front-end) gets
//! a deterministic structure and never reaches into the raw mappings:
//! seasons stay in response order, empty seasons carry an explicit
//! no-suitable-crops marker, and each crop card includes its derived
//! image path.

use serde::{Deserialize, Serialize};

use crate::models::{crop_image_path, Crop, SeasonalCropPredictions, SeasonalWeather};

/// Weather readings projected for rendering, one section per season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherView {
    pub seasons: Vec<WeatherSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSection {
    pub season: String,
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
}

/// Crop recommendations projected for rendering, one section per season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationView {
    pub seasons: Vec<SeasonSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSection {
    pub season: String,
    #[serde(flatten)]
    pub recommendation: SeasonRecommendation,
}

/// What a season renders as. An empty crop list is a presentation
/// marker, not a deleted season: the season heading still appears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "crops", rename_all = "snake_case")]
pub enum SeasonRecommendation {
    Crops(Vec<CropCard>),
    NoSuitableCrops,
}

/// One crop card, carrying the service's fields verbatim plus the
/// derived image path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropCard {
    pub name: String,
    pub image_path: String,
    pub soil_type: String,
    pub min_yield: f64,
    pub max_yield: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub fertilizer: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

impl From<&Crop> for CropCard {
    fn from(crop: &Crop) -> Self {
        Self {
            image_path: crop_image_path(&crop.name),
            name: crop.name.clone(),
            soil_type: crop.soil_type.clone(),
            min_yield: crop.min_yield,
            max_yield: crop.max_yield,
            min_price: crop.min_price,
            max_price: crop.max_price,
            fertilizer: crop.fertilizer.clone(),
            description: crop.description.clone(),
            confidence: crop.confidence.clone(),
        }
    }
}

/// Project seasonal weather into its render-ready form.
pub fn weather_view(weather: &SeasonalWeather) -> WeatherView {
    WeatherView {
        seasons: weather
            .iter()
            .map(|(season, readings)| WeatherSection {
                season: season.clone(),
                temperature: readings.temperature,
                humidity: readings.humidity,
                rainfall: readings.rainfall,
            })
            .collect(),
    }
}

/// Project seasonal crop predictions into their render-ready form.
pub fn recommendation_view(predictions: &SeasonalCropPredictions) -> RecommendationView {
    RecommendationView {
        seasons: predictions
            .iter()
            .map(|(season, crops)| SeasonSection {
                season: season.clone(),
                recommendation: if crops.is_empty() {
                    SeasonRecommendation::NoSuitableCrops
                } else {
                    SeasonRecommendation::Crops(crops.iter().map(CropCard::from).collect())
                },
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pune_predictions() -> SeasonalCropPredictions {
        serde_json::from_str(
            r#"{
                "Kharif": [{
                    "name": "Rice",
                    "soil_type": "Clayey",
                    "min_yield": 2,
                    "max_yield": 4,
                    "min_price": 15,
                    "max_price": 25,
                    "fertilizer": "Urea",
                    "description": "Staple kharif crop."
                }],
                "Rabi": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn projects_crops_and_empty_seasons() {
        let view = recommendation_view(&pune_predictions());

        assert_eq!(view.seasons.len(), 2);
        assert_eq!(view.seasons[0].season, "Kharif");
        match &view.seasons[0].recommendation {
            SeasonRecommendation::Crops(cards) => {
                assert_eq!(cards.len(), 1);
                let card = &cards[0];
                assert_eq!(card.name, "Rice");
                assert_eq!(card.image_path, "/crop_images/rice.jpg");
                assert_eq!(card.soil_type, "Clayey");
                assert_eq!((card.min_yield, card.max_yield), (2.0, 4.0));
                assert_eq!((card.min_price, card.max_price), (15.0, 25.0));
                assert_eq!(card.fertilizer, "Urea");
                assert_eq!(card.description, "Staple kharif crop.");
            }
            other => panic!("expected crop cards, got {other:?}"),
        }

        assert_eq!(view.seasons[1].season, "Rabi");
        assert_eq!(
            view.seasons[1].recommendation,
            SeasonRecommendation::NoSuitableCrops
        );
    }

    #[test]
    fn season_order_follows_the_response() {
        let weather: SeasonalWeather = serde_json::from_str(
            r#"{
                "WINTER": {"temperature": 18.2, "humidity": 40.0, "rainfall": 62.0},
                "SUMMER": {"temperature": 31.9, "humidity": 55.5, "rainfall": 12.4},
                "MONSOON": {"temperature": 27.1, "humidity": 83.0, "rainfall": 714.0}
            }"#,
        )
        .unwrap();

        let view = weather_view(&weather);
        let order: Vec<&str> = view.seasons.iter().map(|s| s.season.as_str()).collect();
        assert_eq!(order, ["WINTER", "SUMMER", "MONSOON"]);
        assert_eq!(view.seasons[2].rainfall, 714.0);
    }

    #[test]
    fn confidence_rides_along_when_present() {
        let predictions: SeasonalCropPredictions = serde_json::from_str(
            r#"{"SUMMER": [{
                "name": "Maize",
                "soil_type": "Loamy",
                "min_yield": 2.5,
                "max_yield": 3.5,
                "min_price": 12,
                "max_price": 20,
                "fertilizer": "NPK 10-26-26",
                "description": "Heat tolerant.",
                "confidence": "88.02%"
            }]}"#,
        )
        .unwrap();

        let view = recommendation_view(&predictions);
        match &view.seasons[0].recommendation {
            SeasonRecommendation::Crops(cards) => {
                assert_eq!(cards[0].confidence.as_deref(), Some("88.02%"));
            }
            other => panic!("expected crop cards, got {other:?}"),
        }
    }
}
