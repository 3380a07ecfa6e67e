//! Seasonal weather data returned by the prediction service

use serde::{Deserialize, Serialize};

use crate::types::SeasonMap;

/// Averaged weather readings for one cropping season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonWeather {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
}

/// Weather readings grouped by season, in the order the service
/// returned them. Replaced wholesale on every successful fetch.
pub type SeasonalWeather = SeasonMap<SeasonWeather>;
