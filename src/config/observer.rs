//! # Observer Settings
//!
//! Polling settings applied to observers built from configuration.

use super::env_var_or_default;
use crate::constants::{DEFAULT_POLL_INTERVAL_MS, ENV_POLL_INTERVAL_MS, ENV_STALE_POLICY};
use crate::observer::StalePolicy;
use std::time::Duration;

/// Observer configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverConfig {
    /// Polling interval (milliseconds)
    /// Zero is rejected when an observer is constructed
    pub interval_ms: u64,
    /// What happens to cached secrets missing from the latest listing
    pub stale_policy: StalePolicy,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
            stale_policy: StalePolicy::default(),
        }
    }
}

impl ObserverConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            interval_ms: env_var_or_default(ENV_POLL_INTERVAL_MS, DEFAULT_POLL_INTERVAL_MS),
            stale_policy: env_var_or_default(ENV_STALE_POLICY, StalePolicy::default()),
        }
    }

    /// Polling interval as a `Duration`
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
