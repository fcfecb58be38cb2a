//! # Observer Metrics
//!
//! Prometheus-backed sink for secret listing observations.

use super::registry::register_collector;
use super::sink::{ListObservation, MetricsSink};
use anyhow::Result;
use prometheus::IntCounterVec;
use std::sync::LazyLock;

static SECRET_LIST_OPERATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "secret_observer_list_operations_total",
            "Total number of secret listings by observation name, namespace and status",
        ),
        &["name", "namespace", "status"],
    )
    .expect("Failed to create SECRET_LIST_OPERATIONS_TOTAL metric - this should never happen")
});

/// Register observer metrics with the registry
pub(crate) fn register_observer_metrics() -> Result<()> {
    register_collector(Box::new(SECRET_LIST_OPERATIONS_TOTAL.clone()))?;
    Ok(())
}

/// `MetricsSink` that counts observations in the crate's Prometheus registry
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheusMetrics;

impl MetricsSink for PrometheusMetrics {
    fn observe_sync(&self, observation: &ListObservation) {
        SECRET_LIST_OPERATIONS_TOTAL
            .with_label_values(&[
                observation.name,
                observation.namespace.as_str(),
                observation.status.as_str(),
            ])
            .inc();
    }
}
