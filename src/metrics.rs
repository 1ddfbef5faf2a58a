//! Exported monitoring state
//!
//! One gauge reflects the latest anomaly verdict and a per-outcome
//! counter tracks completed checks. Both live in a shared registry that
//! the `/metrics` endpoint encodes in OpenMetrics text at scrape time.
//!
//! The gauge is last-write-wins by design: it reflects "latest known
//! state", not a time series - retention is the scraper's job. It is
//! only ever set on a fully successful check.

use std::sync::Arc;

use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;

/// Content type of the exposition format served by `/metrics`.
pub const EXPOSITION_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

/// Labels for the per-outcome check counter.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct CheckLabels {
    /// "ok", "validation_error", "upstream_error" or "error"
    pub outcome: String,
}

/// Handle to the process-wide monitoring registry.
///
/// Cloning is cheap; all clones share the same underlying metrics, so
/// the gauge behaves as a single injected state cell rather than ambient
/// global state.
#[derive(Clone)]
pub struct CheckMetrics {
    registry: Arc<Registry>,

    /// Latest anomaly verdict (0=no, 1=anomaly, 2=potential)
    anomaly_verdict: Gauge,

    /// Completed checks by outcome
    checks_total: Family<CheckLabels, Counter>,
}

impl CheckMetrics {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let anomaly_verdict = Gauge::default();
        registry.register(
            "centinela_anomaly_verdict",
            "Latest anomaly verdict (0=no anomaly, 1=anomaly, 2=potential anomaly)",
            anomaly_verdict.clone(),
        );

        let checks_total = Family::<CheckLabels, Counter>::default();
        registry.register(
            "centinela_checks",
            "Completed anomaly checks by outcome",
            checks_total.clone(),
        );

        Self {
            registry: Arc::new(registry),
            anomaly_verdict,
            checks_total,
        }
    }

    /// Single mutation entry point for the gauge, called once per
    /// completed check. Concurrent checks racing here is acceptable:
    /// last write wins.
    pub fn set_verdict(&self, code: i64) {
        self.anomaly_verdict.set(code);
    }

    /// Current gauge value, mainly for tests and debugging.
    pub fn verdict(&self) -> i64 {
        self.anomaly_verdict.get()
    }

    pub fn record_check(&self, outcome: &str) {
        self.checks_total
            .get_or_create(&CheckLabels {
                outcome: outcome.to_string(),
            })
            .inc();
    }

    /// Encode the registry's current state in the exposition text format.
    pub fn encode(&self) -> Result<String, std::fmt::Error> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry)?;
        Ok(buffer)
    }
}

impl Default for CheckMetrics {
    fn default() -> Self {
        Self::new()
    }
}
