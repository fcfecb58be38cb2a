//! # Kubernetes Secret Observer
//!
//! Polls Kubernetes namespaces for `Secret` resources and answers
//! "does secret X exist in namespace Y" from an in-memory cache, without a
//! network call per check.
//!
//! ## Overview
//!
//! 1. **Registry** - `ObserverRegistry::get_or_create` hands out one observer per namespace
//! 2. **Polling** - `SecretObserver::start` lists the namespace's secrets every interval
//! 3. **Lookup** - `SecretObserver::secret_present` checks the cache synchronously
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use kube_secret_observer::{
//!     KubeSecretLister, ObserverProps, ObserverRegistry, PrometheusMetrics,
//! };
//!
//! # async fn run() -> anyhow::Result<()> {
//! let registry = ObserverRegistry::shared();
//! let lister = Arc::new(KubeSecretLister::try_default().await?);
//! let props = ObserverProps::new("payments", lister, Arc::new(PrometheusMetrics))
//!     .with_interval_ms(10_000);
//!
//! let observer = registry.get_or_create(props)?.start();
//! if observer.secret_present("stripe-api-key") {
//!     // ...
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod lister;
pub mod observability;
pub mod observer;
pub mod registry;

pub use config::ObserverConfig;
pub use error::ObserverError;
pub use lister::{KubeSecretLister, ListError, SecretLister};
pub use observability::metrics::{
    ListObservation, ListStatus, MetricsSink, NoopMetrics, PrometheusMetrics,
};
pub use observer::{ObserverProps, ObserverState, SecretObserver, StalePolicy};
pub use registry::{ObserverRegistry, SharedObserverRegistry};
