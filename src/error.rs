//! Domain error taxonomy shared by the check pipeline
//!
//! Two kinds are distinguished so callers can tell "our data was bad"
//! (`ValidationError`) from "an upstream was unreachable or errored"
//! (`UpstreamError`). Partial metric data is neither - absent series are
//! valid state.

use std::fmt;

/// A snapshot failed its schema checks.
///
/// Carries the list of violated field names; validation never silently
/// coerces a bad value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Names of the fields that failed validation
    pub fields: Vec<String>,
}

impl ValidationError {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "system state failed validation: [{}]",
            self.fields.join(", ")
        )
    }
}

impl std::error::Error for ValidationError {}

/// The metrics backend or the inference endpoint was unreachable or
/// returned an error.
///
/// Carries the failing service's address so the caller can report which
/// collaborator broke.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamError {
    /// Address of the failing upstream
    pub address: String,

    /// What went wrong
    pub message: String,
}

impl UpstreamError {
    pub fn new(address: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upstream {} failed: {}", self.address, self.message)
    }
}

impl std::error::Error for UpstreamError {}
