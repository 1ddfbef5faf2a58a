//! API error types and conversions

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::error::{UpstreamError, ValidationError};

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// Snapshot failed schema checks
    Validation(ValidationError),

    /// Metrics backend or inference endpoint unreachable or errored
    Upstream(UpstreamError),

    /// Anything else
    Internal(String),
}

impl ApiError {
    /// Counter label for the outcome this error maps to.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Upstream(_) => "upstream_error",
            ApiError::Internal(_) => "error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": err.to_string(),
                    "fields": err.fields,
                }),
            ),
            ApiError::Upstream(err) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": err.to_string(),
                    "address": err.address,
                }),
            ),
            ApiError::Internal(detail) => {
                // Full detail stays in the server-side logs only.
                error!("unhandled failure: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal server error",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Upstream(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
