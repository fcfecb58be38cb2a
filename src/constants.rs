//! # Constants
//!
//! Default values and well-known names shared across the crate.

/// Default polling interval for secret observers (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 30_000;

/// Metric record name emitted after every secret listing
pub const SECRET_LIST_OBSERVATION_NAME: &str = "all-internal-secrets-list";

/// Environment variable overriding the polling interval
pub const ENV_POLL_INTERVAL_MS: &str = "SECRET_OBSERVER_INTERVAL_MS";

/// Environment variable selecting the stale-entry policy (`replace` or `retain`)
pub const ENV_STALE_POLICY: &str = "SECRET_OBSERVER_STALE_POLICY";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "kube_secret_observer=info";
