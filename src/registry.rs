//! # Observer Registry
//!
//! Deduplicates observers by namespace name.
//!
//! The registry is an ordinary value: create one at startup and share it as
//! `SharedObserverRegistry`. Tests get a fresh registry each.

use crate::error::ObserverError;
use crate::observer::{ObserverProps, SecretObserver};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Shared registry handle
pub type SharedObserverRegistry = Arc<ObserverRegistry>;

/// At most one `SecretObserver` per namespace name
///
/// Entries are never removed; the key order is the order in which namespaces
/// were first requested.
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    observers: Mutex<Vec<(String, Arc<SecretObserver>)>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry behind an `Arc`
    pub fn shared() -> SharedObserverRegistry {
        Arc::new(Self::new())
    }

    /// Return the observer for `props.namespace`, creating it on first request
    ///
    /// Props are validated before the lookup so misconfiguration fails here
    /// rather than on the first refresh. When an observer already exists the
    /// remaining props are ignored. The returned observer is never started.
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub fn get_or_create(&self, props: ObserverProps) -> Result<Arc<SecretObserver>, ObserverError> {
        props.validate()?;

        let mut observers = self.lock();
        if let Some((_, existing)) = observers.iter().find(|(ns, _)| *ns == props.namespace) {
            if existing.interval() != props.interval {
                debug!(
                    namespace = %props.namespace,
                    existing = ?existing.interval(),
                    requested = ?props.interval,
                    "observer already registered with a different interval"
                );
            }
            return Ok(Arc::clone(existing));
        }

        let namespace = props.namespace.clone();
        let observer = Arc::new(SecretObserver::new(props)?);
        observers.push((namespace.clone(), Arc::clone(&observer)));
        debug!(namespace = %namespace, "registered secret observer");
        Ok(observer)
    }

    pub fn get(&self, namespace: &str) -> Option<Arc<SecretObserver>> {
        self.lock()
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, observer)| Arc::clone(observer))
    }

    /// Registered namespace names in first-request order
    pub fn namespaces(&self) -> Vec<String> {
        self.lock().iter().map(|(ns, _)| ns.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Stop every registered observer
    pub fn stop_all(&self) {
        let observers: Vec<Arc<SecretObserver>> = self
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        info!(count = observers.len(), "stopping all secret observers");
        for observer in observers {
            observer.stop();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(String, Arc<SecretObserver>)>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
