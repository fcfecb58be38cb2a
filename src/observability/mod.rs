//! # Observability
//!
//! Tracing setup and the metrics sink observers report to.

pub mod logging;
pub mod metrics;
