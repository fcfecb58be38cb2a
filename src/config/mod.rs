//! # Observer Configuration
//!
//! Observer defaults loaded from environment variables.
//!
//! All configuration has sensible defaults and can be overridden via environment variables.

mod observer;

pub use observer::ObserverConfig;

/// Read environment variable or return default value
pub(crate) fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
