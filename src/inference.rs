//! Inference endpoint client
//!
//! Sends the rendered prompt to the external model endpoint and returns
//! the first candidate's first text part. Network or service failure is
//! an `UpstreamError` carrying the endpoint address; a well-formed
//! response with no candidates yields a fixed placeholder instead, which
//! the verdict extractor's no-match default already tolerates.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::error::UpstreamError;

/// Returned when the model answered with no candidates at all.
pub const NO_ANALYSIS_PLACEHOLDER: &str = "analysis not available";

#[derive(Debug, Clone, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Client for the model endpoint, authenticated via a pre-shared key.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    /// HTTP client (reused across requests for efficiency)
    client: reqwest::Client,

    /// Full URL of the inference endpoint
    endpoint: String,

    /// Pre-shared key; absence surfaces as an upstream failure per
    /// request rather than crashing the process
    api_key: Option<String>,
}

impl InferenceClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// POST the prompt and return the raw model text.
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn analyze(&self, prompt: &str) -> Result<String, UpstreamError> {
        let Some(api_key) = &self.api_key else {
            return Err(UpstreamError::new(
                &self.endpoint,
                "inference API key is not configured",
            ));
        };

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                UpstreamError::new(&self.endpoint, format!("inference request failed: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(UpstreamError::new(
                &self.endpoint,
                format!("inference endpoint returned HTTP {}", response.status()),
            ));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            UpstreamError::new(&self.endpoint, format!("failed to decode inference response: {e}"))
        })?;

        let text = body
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .unwrap_or_else(|| NO_ANALYSIS_PLACEHOLDER.to_string());

        trace!("received analysis ({} bytes)", text.len());

        Ok(text)
    }
}
