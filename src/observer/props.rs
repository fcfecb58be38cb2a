//! # Observer Properties
//!
//! Everything needed to construct an observer for one namespace.

use super::StalePolicy;
use crate::config::ObserverConfig;
use crate::constants::DEFAULT_POLL_INTERVAL_MS;
use crate::error::ObserverError;
use crate::lister::SecretLister;
use crate::observability::metrics::MetricsSink;
use std::sync::Arc;
use std::time::Duration;

/// Construction properties for a `SecretObserver`
///
/// The lister is kept for the observer's lifetime and called once per cycle.
#[derive(Clone)]
pub struct ObserverProps {
    pub namespace: String,
    pub interval: Duration,
    pub stale_policy: StalePolicy,
    pub lister: Arc<dyn SecretLister>,
    pub metrics: Arc<dyn MetricsSink>,
}

impl std::fmt::Debug for ObserverProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverProps")
            .field("namespace", &self.namespace)
            .field("interval", &self.interval)
            .field("stale_policy", &self.stale_policy)
            .finish_non_exhaustive()
    }
}

impl ObserverProps {
    /// Props with the default interval and stale policy
    pub fn new(
        namespace: impl Into<String>,
        lister: Arc<dyn SecretLister>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            stale_policy: StalePolicy::default(),
            lister,
            metrics,
        }
    }

    /// Props taking interval and stale policy from configuration
    pub fn from_config(
        config: &ObserverConfig,
        namespace: impl Into<String>,
        lister: Arc<dyn SecretLister>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self::new(namespace, lister, metrics)
            .with_interval(config.interval())
            .with_stale_policy(config.stale_policy)
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_interval_ms(self, interval_ms: u64) -> Self {
        self.with_interval(Duration::from_millis(interval_ms))
    }

    #[must_use]
    pub fn with_stale_policy(mut self, stale_policy: StalePolicy) -> Self {
        self.stale_policy = stale_policy;
        self
    }

    /// Reject props that could never poll
    pub(crate) fn validate(&self) -> Result<(), ObserverError> {
        if self.namespace.trim().is_empty() {
            return Err(ObserverError::MissingNamespace);
        }
        if self.interval.is_zero() {
            return Err(ObserverError::InvalidInterval {
                namespace: self.namespace.clone(),
            });
        }
        Ok(())
    }
}
