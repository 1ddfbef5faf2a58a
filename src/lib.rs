pub mod api;
pub mod collector;
pub mod config;
pub mod context;
pub mod error;
pub mod inference;
pub mod metrics;
pub mod prompt;
pub mod state;
pub mod util;
pub mod verdict;

use serde::{Deserialize, Serialize};

/// One sampled instant of host health, validated at assembly time.
///
/// The three metric fields are independently optional: a backend that
/// currently exports no series for a metric yields `None`, which is valid
/// state. `timestamp` is always present and assigned at assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemState {
    /// Fraction of CPU-seconds per second over a 5-minute window
    pub cpu_usage_rate_5m: Option<f64>,

    /// 1-minute load average
    pub load_average_1m: Option<f64>,

    /// Available memory in megabytes (converted from bytes at assembly)
    pub memory_available_mb: Option<f64>,

    /// Milliseconds since epoch, assigned when the snapshot is assembled
    pub timestamp: i64,
}
