//! API shared state containing the pipeline collaborators

use crate::collector::MetricCollector;
use crate::inference::InferenceClient;
use crate::metrics::CheckMetrics;

/// Shared state passed to all API handlers.
///
/// Everything in here is cheap to clone; the metrics handle in
/// particular shares one underlying registry across clones.
#[derive(Clone)]
pub struct ApiState {
    /// Client for the metrics backend
    pub collector: MetricCollector,

    /// Client for the inference endpoint
    pub inference: InferenceClient,

    /// Exported monitoring state
    pub metrics: CheckMetrics,
}

impl ApiState {
    pub fn new(collector: MetricCollector, inference: InferenceClient, metrics: CheckMetrics) -> Self {
        Self {
            collector,
            inference,
            metrics,
        }
    }
}
