//! # Logging
//!
//! Tracing subscriber setup for services embedding the observers.

use crate::constants::DEFAULT_LOG_FILTER;
use anyhow::Result;

/// Install a formatting subscriber filtered by `RUST_LOG`
///
/// Falls back to `kube_secret_observer=info`. Fails if the host already
/// installed a global subscriber.
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        init_tracing().unwrap();
        assert!(init_tracing().is_err());
    }
}
