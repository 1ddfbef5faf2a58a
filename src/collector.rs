//! Metric collection from the Prometheus instant-query endpoint
//!
//! The three named queries are issued concurrently and joined
//! all-or-nothing: a transport failure on any one of them aborts the
//! whole collection step. An empty result set is not a failure - it means
//! the metric is not currently exported and maps to `None`.

use std::time::Duration;

use futures::future::try_join3;
use serde::Deserialize;
use tracing::{instrument, trace};

use crate::error::UpstreamError;

/// CPU usage as a fraction of CPU-seconds per second over a 5-minute window
pub const CPU_USAGE_QUERY: &str = r#"avg(rate(node_cpu_seconds_total{mode!="idle"}[5m]))"#;

/// 1-minute load average
pub const LOAD_AVERAGE_QUERY: &str = "node_load1";

/// Available memory in bytes
pub const MEMORY_AVAILABLE_QUERY: &str = "node_memory_MemAvailable_bytes";

/// Raw scalars fetched from the metrics backend, before unit conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSamples {
    pub cpu_usage_rate_5m: Option<f64>,
    pub load_average_1m: Option<f64>,
    pub memory_available_bytes: Option<f64>,
}

/// Partial shape of the instant-query response; only the sample values
/// are of interest.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    data: QueryData,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    result: Vec<QueryResult>,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    /// `[<timestamp>, <stringified number>]`
    value: (f64, String),
}

/// Client for the metrics backend.
#[derive(Debug, Clone)]
pub struct MetricCollector {
    /// HTTP client (reused across requests for efficiency)
    client: reqwest::Client,

    /// Base URL of the metrics backend
    base_url: String,
}

impl MetricCollector {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch all three host metrics concurrently.
    ///
    /// The join is all-or-nothing: partial backend unavailability aborts
    /// the request rather than producing a misleading half-populated
    /// snapshot.
    #[instrument(skip(self), fields(backend = %self.base_url))]
    pub async fn collect(&self) -> Result<MetricSamples, UpstreamError> {
        let (cpu, load, memory) = try_join3(
            self.fetch_scalar(CPU_USAGE_QUERY),
            self.fetch_scalar(LOAD_AVERAGE_QUERY),
            self.fetch_scalar(MEMORY_AVAILABLE_QUERY),
        )
        .await?;

        trace!("collected samples: cpu={cpu:?} load={load:?} memory={memory:?}");

        Ok(MetricSamples {
            cpu_usage_rate_5m: cpu,
            load_average_1m: load,
            memory_available_bytes: memory,
        })
    }

    /// Run one instant query and reduce it to the first result's scalar.
    ///
    /// `Ok(None)` means the backend returned no series for the query,
    /// which is a valid "metric not currently exported" state.
    async fn fetch_scalar(&self, query: &str) -> Result<Option<f64>, UpstreamError> {
        let url = format!("{}/api/v1/query", self.base_url);

        trace!("{url}: running query {query}");

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| UpstreamError::new(&self.base_url, format!("query request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(UpstreamError::new(
                &self.base_url,
                format!("metrics backend returned HTTP {}", response.status()),
            ));
        }

        let body: QueryResponse = response.json().await.map_err(|e| {
            UpstreamError::new(&self.base_url, format!("failed to decode query response: {e}"))
        })?;

        let Some(first) = body.data.result.first() else {
            return Ok(None);
        };

        first.value.1.parse::<f64>().map(Some).map_err(|e| {
            UpstreamError::new(
                &self.base_url,
                format!("unparsable sample value {:?}: {e}", first.value.1),
            )
        })
    }
}
