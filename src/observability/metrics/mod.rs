//! # Metrics Module
//!
//! Metrics reporting for secret observers.
//!
//! ## Sub-modules
//!
//! - `sink` - The `MetricsSink` trait and the observation records observers emit
//! - `registry` - Prometheus registry setup, registration and text rendering
//! - `observer_metrics` - Prometheus-backed `MetricsSink`

pub mod observer_metrics;
pub mod registry;
pub mod sink;

pub use observer_metrics::*;
pub use registry::*;
pub use sink::*;
