//! Metrics exposition endpoint

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use crate::api::error::ApiError;
use crate::api::state::ApiState;
use crate::metrics::EXPOSITION_CONTENT_TYPE;

/// GET /metrics
///
/// Serves the registry's current state in the exposition text format.
pub async fn exposition(State(api): State<ApiState>) -> Result<Response, ApiError> {
    let body = api
        .metrics
        .encode()
        .map_err(|e| ApiError::Internal(format!("failed to encode metrics: {e}")))?;

    Ok(([(CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body).into_response())
}
