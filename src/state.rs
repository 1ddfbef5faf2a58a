//! Snapshot assembly and validation
//!
//! Collected scalars are converted (bytes -> megabytes) and validated
//! before anything downstream sees them. Validation is per-field: absent
//! metrics are valid, present metrics must be finite and non-negative,
//! and the timestamp must be a positive epoch-millisecond value.

use crate::SystemState;
use crate::collector::MetricSamples;
use crate::error::ValidationError;

pub const BYTES_PER_MEGABYTE: f64 = 1_048_576.0;

/// Exact for all finite inputs: dividing by a power of two only shifts
/// the exponent.
pub fn bytes_to_megabytes(bytes: f64) -> f64 {
    bytes / BYTES_PER_MEGABYTE
}

/// Combine collected scalars into a validated snapshot.
pub fn assemble(samples: MetricSamples, timestamp: i64) -> Result<SystemState, ValidationError> {
    let state = SystemState {
        cpu_usage_rate_5m: samples.cpu_usage_rate_5m,
        load_average_1m: samples.load_average_1m,
        memory_available_mb: samples.memory_available_bytes.map(bytes_to_megabytes),
        timestamp,
    };

    validate(&state)?;

    Ok(state)
}

/// Check a snapshot against the state schema.
///
/// Returns every violated field, not just the first one.
pub fn validate(state: &SystemState) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    if state.timestamp <= 0 {
        violations.push("timestamp".to_string());
    }

    let metric_fields = [
        ("cpu_usage_rate_5m", state.cpu_usage_rate_5m),
        ("load_average_1m", state.load_average_1m),
        ("memory_available_mb", state.memory_available_mb),
    ];

    for (name, value) in metric_fields {
        if let Some(value) = value
            && (!value.is_finite() || value < 0.0)
        {
            violations.push(name.to_string());
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}
