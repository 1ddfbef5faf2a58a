//! Anomaly check endpoint - the request orchestrator
//!
//! Sequences the pipeline per inbound request: collect metrics, assemble
//! and validate the snapshot, build the context envelope and the prompt,
//! call the inference endpoint, extract the verdict, update the gauge,
//! assemble the response. The gauge only moves on the fully successful
//! path.

use axum::{Json, extract::State};
use chrono::Utc;
use tracing::{debug, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::ApiState;
use crate::api::types::CheckResponse;
use crate::context::ContextEnvelope;
use crate::{prompt, state, verdict};

/// Human-readable description carried by every context envelope.
const CONTEXT_DESCRIPTION: &str = "Host health snapshot for anomaly assessment";

/// GET /aiops/check
#[instrument(skip_all)]
pub async fn run_check(State(api): State<ApiState>) -> ApiResult<Json<CheckResponse>> {
    match check_pipeline(&api).await {
        Ok(response) => {
            api.metrics.record_check("ok");
            Ok(Json(response))
        }
        Err(err) => {
            api.metrics.record_check(err.outcome());
            Err(err)
        }
    }
}

async fn check_pipeline(api: &ApiState) -> Result<CheckResponse, ApiError> {
    let samples = api.collector.collect().await?;

    let snapshot = state::assemble(samples, Utc::now().timestamp_millis())?;

    let context = ContextEnvelope::new(CONTEXT_DESCRIPTION, snapshot.clone());
    let rendered = prompt::render(&snapshot);

    let analysis = api.inference.analyze(&rendered).await?;

    let verdict = verdict::extract(&analysis);
    debug!(
        "verdict: code={} label={} ({} explanation bytes)",
        verdict.code,
        verdict.label,
        verdict.explanation.len()
    );

    api.metrics.set_verdict(verdict.code);

    Ok(CheckResponse {
        context,
        anomaly: verdict.label,
        explanation: verdict.explanation,
        analysis,
    })
}
