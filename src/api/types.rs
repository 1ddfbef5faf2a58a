//! Shared API response types

use serde::Serialize;

use crate::context::ContextEnvelope;

/// Response for GET /aiops/check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    /// The context envelope the verdict was derived from
    pub context: ContextEnvelope,

    /// Anomaly label: "Sí", "No" or "Potencial"
    pub anomaly: &'static str,

    /// Justification, capped at 50 words
    pub explanation: String,

    /// Raw model text the verdict was extracted from
    pub analysis: String,
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
