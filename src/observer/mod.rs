//! # Secret Observer
//!
//! Polls one namespace for secrets and answers presence checks from memory.
//!
//! ## Lifecycle
//!
//! `Created -> start() -> Running -> stop() -> Stopped`
//!
//! While running, a background task waits one interval, lists the namespace's
//! secrets, applies them to the cache, and waits again. A failed listing is
//! reported and logged, the cache keeps its last good contents, and the next
//! cycle is still scheduled.

mod cache;
mod poller;
mod props;

pub use cache::StalePolicy;
pub use props::ObserverProps;

use crate::constants::SECRET_LIST_OBSERVATION_NAME;
use crate::error::ObserverError;
use crate::lister::SecretLister;
use crate::observability::metrics::{ListObservation, ListStatus, MetricsSink};
use cache::SecretCache;
use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::Secret;
use poller::Poller;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where an observer is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverState {
    /// Constructed, never started
    Created,
    /// Poll loop scheduled
    Running,
    /// Poll loop cancelled; cache frozen at its last value
    Stopped,
}

/// Per-namespace secret observer
pub struct SecretObserver {
    namespace: String,
    interval: Duration,
    stale_policy: StalePolicy,
    lister: Arc<dyn SecretLister>,
    metrics: Arc<dyn MetricsSink>,
    cache: RwLock<SecretCache>,
    poller: Mutex<Option<Poller>>,
}

impl std::fmt::Debug for SecretObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretObserver")
            .field("namespace", &self.namespace)
            .field("interval", &self.interval)
            .field("stale_policy", &self.stale_policy)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl SecretObserver {
    /// Create an observer with an empty cache; polling does not start
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub fn new(props: ObserverProps) -> Result<Self, ObserverError> {
        props.validate()?;
        Ok(Self {
            namespace: props.namespace,
            interval: props.interval,
            stale_policy: props.stale_policy,
            lister: props.lister,
            metrics: props.metrics,
            cache: RwLock::new(SecretCache::default()),
            poller: Mutex::new(None),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.stale_policy
    }

    /// Start polling; the first refresh happens one interval from now
    ///
    /// Returns the observer for chaining. Does nothing if already running.
    /// A stopped observer can be started again; if its last listing is still
    /// in flight, the new schedule begins once that listing completes.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn start(self: &Arc<Self>) -> Arc<Self> {
        let mut poller = self.lock_poller();
        if poller.as_ref().is_some_and(Poller::is_active) {
            debug!(namespace = %self.namespace, "secret observer already running");
            return Arc::clone(self);
        }

        info!(
            namespace = %self.namespace,
            interval = ?self.interval,
            "starting kubernetes secrets observer for namespace {}",
            self.namespace
        );

        // A stopped loop may still be finishing a listing; the new loop waits for it
        let previous = poller.take();
        let observer = Arc::clone(self);
        *poller = Some(Poller::spawn(self.interval, previous, move || {
            let observer = Arc::clone(&observer);
            async move { observer.poll_once().await }
        }));
        Arc::clone(self)
    }

    /// Cancel the pending refresh
    ///
    /// An in-flight listing is not aborted and may still update the cache.
    /// Safe to call when nothing is scheduled.
    pub fn stop(&self) {
        if let Some(poller) = self.lock_poller().as_ref() {
            if poller.is_active() {
                info!(namespace = %self.namespace, "stopping kubernetes secrets observer");
            }
            poller.cancel();
        }
    }

    pub fn state(&self) -> ObserverState {
        match self.lock_poller().as_ref() {
            None => ObserverState::Created,
            Some(poller) if poller.is_active() => ObserverState::Running,
            Some(_) => ObserverState::Stopped,
        }
    }

    /// Run one refresh cycle now
    ///
    /// Lists the namespace, applies the result to the cache and emits a
    /// `success` observation. On failure the cache is untouched, a `failure`
    /// observation is emitted and the error is returned. Returns the number of
    /// secrets in the listing.
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub async fn refresh(&self) -> Result<usize, ObserverError> {
        let listing = match self.lister.list(&self.namespace).await {
            Ok(listing) => listing,
            Err(source) => {
                self.report(ListStatus::Failure);
                return Err(ObserverError::List {
                    namespace: self.namespace.clone(),
                    source,
                });
            }
        };

        let listed = listing.len();
        let (skipped, cached) = {
            let mut cache = self.write_cache();
            let skipped = cache.apply(listing, self.stale_policy);
            (skipped, cache.len())
        };
        if skipped > 0 {
            warn!(
                namespace = %self.namespace,
                skipped,
                "ignored secrets without metadata.name"
            );
        }

        self.report(ListStatus::Success);
        debug!(namespace = %self.namespace, listed, cached, "refreshed secrets");
        Ok(listed)
    }

    /// Names currently cached, sorted
    pub fn secret_names(&self) -> Vec<String> {
        self.read_cache().names()
    }

    /// Whether `name` was present as of the last successful refresh
    pub fn secret_present(&self, name: &str) -> bool {
        self.read_cache().contains(name)
    }

    /// Cached copy of a secret as returned by the API
    pub fn secret(&self, name: &str) -> Option<Secret> {
        self.read_cache().get(name).cloned()
    }

    /// When the cache was last refreshed successfully
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.read_cache().refreshed_at()
    }

    async fn poll_once(&self) {
        if let Err(e) = self.refresh().await {
            warn!(
                namespace = %self.namespace,
                transient = e.is_transient(),
                error = %e,
                "secret refresh failed, keeping last known secrets until next cycle"
            );
        }
    }

    fn report(&self, status: ListStatus) {
        self.metrics.observe_sync(&ListObservation::new(
            SECRET_LIST_OBSERVATION_NAME,
            self.namespace.as_str(),
            status,
        ));
    }

    // A panic while holding a lock leaves the data consistent (writes are
    // single assignments), so poisoned locks are used as-is.
    fn read_cache(&self) -> RwLockReadGuard<'_, SecretCache> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, SecretCache> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_poller(&self) -> MutexGuard<'_, Option<Poller>> {
        self.poller.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
