//! Prediction session controller
//!
//! Owns the three pieces of state behind the front-end: the district,
//! the editable soil vector, and the two most recent service results.
//! Input edits never trigger requests; the two request operations are
//! independent, may be repeated freely, and never surface their
//! failures to the presentation layer. A failed or stale response
//! leaves the last good result in place.

use shared::models::{SeasonalCropPredictions, SeasonalWeather, SoilField, SoilInputs};
use shared::view::{recommendation_view, weather_view, RecommendationView, WeatherView};

use crate::error::ApiResult;
use crate::external::PredictionClient;

/// District shown before the user edits anything.
pub const DEFAULT_DISTRICT: &str = "Mumbai";

/// Holder for the latest result of one request kind.
///
/// Every outbound request takes a ticket from [`begin`](Self::begin);
/// the matching outcome is handed back through
/// [`complete`](Self::complete). Only the most recently issued ticket
/// is ever applied, so a slow response from a double-click cannot
/// overwrite the newer one.
#[derive(Debug)]
pub struct RequestSlot<T> {
    issued: u64,
    data: Option<T>,
    last_failure: Option<String>,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self {
            issued: 0,
            data: None,
            last_failure: None,
        }
    }
}

impl<T> RequestSlot<T> {
    /// Tag a new outbound request.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply a request outcome.
    ///
    /// Returns `false` and changes nothing when the ticket is stale.
    /// Otherwise a success replaces the stored data wholesale and
    /// clears any recorded failure; a failure records its reason and
    /// keeps the previous data, including its absence.
    pub fn complete(&mut self, ticket: u64, outcome: ApiResult<T>) -> bool {
        if ticket != self.issued {
            return false;
        }
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.last_failure = None;
            }
            Err(err) => self.last_failure = Some(err.to_string()),
        }
        true
    }

    /// Last successfully stored data, if any request ever succeeded.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Reason of the most recent failure, cleared by the next success.
    ///
    /// Stored so a presentation layer *can* offer a retry affordance;
    /// nothing in this crate renders it as an error state.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }
}

/// The client-side session: inputs plus the two most recent results.
#[derive(Debug)]
pub struct PredictionSession {
    district: String,
    soil: SoilInputs,
    weather: RequestSlot<SeasonalWeather>,
    predictions: RequestSlot<SeasonalCropPredictions>,
    client: PredictionClient,
}

impl PredictionSession {
    /// Create a session with default inputs against the given client.
    pub fn new(client: PredictionClient) -> Self {
        Self {
            district: DEFAULT_DISTRICT.to_string(),
            soil: SoilInputs::default(),
            weather: RequestSlot::default(),
            predictions: RequestSlot::default(),
            client,
        }
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    /// Replace the district unconditionally. No trimming, case-folding,
    /// or validation against a known list.
    pub fn set_district(&mut self, district: impl Into<String>) {
        self.district = district.into();
    }

    pub fn soil(&self) -> &SoilInputs {
        &self.soil
    }

    /// Overwrite one soil field from raw user text.
    ///
    /// An unrecognized field name is a no-op; a recognized name is
    /// always overwritten, with NaN standing in for unparseable text.
    /// The value is forwarded to the service as typed; range checking
    /// is the service's concern.
    pub fn set_soil_field(&mut self, field: &str, raw: &str) {
        let Ok(field) = field.parse::<SoilField>() else {
            tracing::debug!(field, "ignoring edit to unrecognized soil field");
            return;
        };
        self.soil.set(field, raw.parse().unwrap_or(f64::NAN));
    }

    /// Fetch seasonal weather for the current district and store the
    /// outcome.
    pub async fn fetch_weather(&mut self) {
        let (ticket, district) = self.begin_weather();
        let outcome = self.client.fetch_weather(&district).await;
        self.apply_weather(ticket, outcome);
    }

    /// Request crop recommendations for the current inputs and store
    /// the outcome.
    pub async fn predict_crops(&mut self) {
        let (ticket, district, soil) = self.begin_prediction();
        let outcome = self.client.predict_crops(&district, &soil).await;
        self.apply_prediction(ticket, outcome);
    }

    /// Run both request operations concurrently. Each outcome lands in
    /// its own slot; neither blocks or cancels the other.
    pub async fn refresh(&mut self) {
        let (weather_ticket, district) = self.begin_weather();
        let (prediction_ticket, _, soil) = self.begin_prediction();

        let (weather, predictions) = tokio::join!(
            self.client.fetch_weather(&district),
            self.client.predict_crops(&district, &soil),
        );

        self.apply_weather(weather_ticket, weather);
        self.apply_prediction(prediction_ticket, predictions);
    }

    /// Tag an outbound weather request and snapshot the input it will
    /// carry. Split from [`apply_weather`](Self::apply_weather) so a
    /// presentation layer can keep the session borrowed only at the
    /// edges of the request.
    pub fn begin_weather(&mut self) -> (u64, String) {
        (self.weather.begin(), self.district.clone())
    }

    /// Store a weather request outcome.
    pub fn apply_weather(&mut self, ticket: u64, outcome: ApiResult<SeasonalWeather>) {
        if let Err(err) = &outcome {
            tracing::warn!(error = %err, "weather fetch failed; keeping previous data");
        }
        if !self.weather.complete(ticket, outcome) {
            tracing::debug!(ticket, "dropping stale weather response");
        }
    }

    /// Tag an outbound prediction request and snapshot the inputs it
    /// will carry.
    pub fn begin_prediction(&mut self) -> (u64, String, SoilInputs) {
        (self.predictions.begin(), self.district.clone(), self.soil)
    }

    /// Store a prediction request outcome.
    pub fn apply_prediction(&mut self, ticket: u64, outcome: ApiResult<SeasonalCropPredictions>) {
        if let Err(err) = &outcome {
            tracing::warn!(error = %err, "crop prediction failed; keeping previous data");
        }
        if !self.predictions.complete(ticket, outcome) {
            tracing::debug!(ticket, "dropping stale prediction response");
        }
    }

    /// Last stored seasonal weather; absent until a fetch succeeds.
    pub fn weather(&self) -> Option<&SeasonalWeather> {
        self.weather.data()
    }

    /// Last stored crop predictions; absent until a predict succeeds.
    pub fn predictions(&self) -> Option<&SeasonalCropPredictions> {
        self.predictions.data()
    }

    pub fn weather_failure(&self) -> Option<&str> {
        self.weather.last_failure()
    }

    pub fn prediction_failure(&self) -> Option<&str> {
        self.predictions.last_failure()
    }

    /// Render-ready weather projection.
    pub fn weather_view(&self) -> Option<WeatherView> {
        self.weather.data().map(weather_view)
    }

    /// Render-ready recommendation projection.
    pub fn recommendation_view(&self) -> Option<RecommendationView> {
        self.predictions.data().map(recommendation_view)
    }
}
