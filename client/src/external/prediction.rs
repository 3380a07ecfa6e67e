//! HTTP client for the external crop prediction service
//!
//! The service owns all weather lookup and model inference; this client
//! only speaks its two endpoints and decodes the season-keyed bodies.

use reqwest::Client;
use serde::Serialize;

use shared::models::{SeasonalCropPredictions, SeasonalWeather, SoilInputs};

use crate::error::{ApiError, ApiResult};

/// Prediction service client
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

/// Flat payload of the predict endpoint: district plus the four soil
/// fields under their wire names.
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    district: &'a str,
    #[serde(flatten)]
    soil: &'a SoilInputs,
}

impl PredictionClient {
    /// Create a new PredictionClient against the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The service base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch seasonal weather for a district.
    ///
    /// `GET {base}/weather/?district=<district>`. The decoded body is
    /// returned exactly as sent, season order included.
    pub async fn fetch_weather(&self, district: &str) -> ApiResult<SeasonalWeather> {
        let url = format!("{}/weather/", self.base_url);
        tracing::debug!(district, %url, "fetching seasonal weather");

        let response = self
            .client
            .get(&url)
            .query(&[("district", district)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.json().await?)
    }

    /// Request seasonal crop recommendations for a district and soil
    /// vector.
    ///
    /// `POST {base}/predict/` with body `{district, N, P, K, ph}`. The
    /// decoded body is returned exactly as sent; no shape checking
    /// beyond decode happens here.
    pub async fn predict_crops(
        &self,
        district: &str,
        soil: &SoilInputs,
    ) -> ApiResult<SeasonalCropPredictions> {
        let url = format!("{}/predict/", self.base_url);
        tracing::debug!(district, %url, "requesting crop predictions");

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { district, soil })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.json().await?)
    }
}
