//! # Metrics Sink
//!
//! Records emitted after each secret listing and the trait that receives them.

use std::fmt;

/// Outcome of a secret listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListStatus {
    Success,
    Failure,
}

impl ListStatus {
    /// Label value used in metric records
    pub fn as_str(&self) -> &'static str {
        match self {
            ListStatus::Success => "success",
            ListStatus::Failure => "failure",
        }
    }
}

impl fmt::Display for ListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `{name, namespace, status}` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListObservation {
    pub name: &'static str,
    pub namespace: String,
    pub status: ListStatus,
}

impl ListObservation {
    pub fn new(name: &'static str, namespace: impl Into<String>, status: ListStatus) -> Self {
        Self {
            name,
            namespace: namespace.into(),
            status,
        }
    }
}

/// Receives observations synchronously
///
/// Fire-and-forget: implementations must not block and have no way to
/// report errors back to the observer.
pub trait MetricsSink: Send + Sync {
    fn observe_sync(&self, observation: &ListObservation);
}

/// Sink that drops every observation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn observe_sync(&self, _observation: &ListObservation) {}
}
