//! Context envelope construction
//!
//! Wraps a validated snapshot plus a human-readable description into the
//! protocol envelope returned to API callers. Pure construction, no I/O;
//! the envelope is built fresh per request and never persisted.

use serde::Serialize;

use crate::SystemState;

/// Fixed protocol identifier carried by every envelope.
pub const CONTEXT_PROTOCOL: &str = "aiops-context/v1";

/// Descriptive label for the shape of the wrapped data. Not a live
/// validator reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDescriptor {
    pub name: &'static str,
    pub version: u32,
}

impl SchemaDescriptor {
    pub fn system_state() -> Self {
        Self {
            name: "SystemState",
            version: 1,
        }
    }
}

/// Read-only wrapper around one validated snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextEnvelope {
    pub protocol: &'static str,
    pub description: String,
    pub schema: SchemaDescriptor,
    pub data: SystemState,
}

impl ContextEnvelope {
    pub fn new(description: impl Into<String>, data: SystemState) -> Self {
        Self {
            protocol: CONTEXT_PROTOCOL,
            description: description.into(),
            schema: SchemaDescriptor::system_state(),
            data,
        }
    }
}
