//! External service integrations

pub mod prediction;

pub use prediction::PredictionClient;
