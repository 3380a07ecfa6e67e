//! Error handling for the Crop Advisor client
//!
//! The client distinguishes exactly one kind of failure: the request
//! never produced a decodable 2xx response. Anything the service does
//! return as a well-formed body is stored as-is; there is no
//! validation-error variant.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a request against the prediction service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or an undecodable response body.
    #[error("prediction service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("prediction service returned {0}")]
    Status(StatusCode),
}

/// Result type alias for request operations.
pub type ApiResult<T> = Result<T, ApiError>;
