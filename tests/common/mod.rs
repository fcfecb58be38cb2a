//! Shared fakes for integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube_secret_observer::{ListError, ListObservation, ListStatus, MetricsSink, SecretLister};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn secret(name: &str) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Lister returning a configurable set of secrets, or failing on demand
#[derive(Debug, Default)]
pub struct FakeLister {
    names: Mutex<Vec<String>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeLister {
    pub fn with_secrets(names: &[&str]) -> Arc<Self> {
        let lister = Arc::new(Self::default());
        lister.set_secrets(names);
        lister
    }

    pub fn set_secrets(&self, names: &[&str]) {
        *self.names.lock().unwrap() = names.iter().map(ToString::to_string).collect();
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretLister for FakeLister {
    async fn list(&self, _namespace: &str) -> Result<Vec<Secret>, ListError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ListError::Other("connection refused".to_string()));
        }
        Ok(self.names.lock().unwrap().iter().map(|n| secret(n)).collect())
    }
}

/// Sink keeping every observation it receives
#[derive(Debug, Default)]
pub struct RecordingMetrics {
    observations: Mutex<Vec<ListObservation>>,
}

impl RecordingMetrics {
    pub fn observations(&self) -> Vec<ListObservation> {
        self.observations.lock().unwrap().clone()
    }

    pub fn count(&self, status: ListStatus) -> usize {
        self.observations
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.status == status)
            .count()
    }
}

impl MetricsSink for RecordingMetrics {
    fn observe_sync(&self, observation: &ListObservation) {
        self.observations.lock().unwrap().push(observation.clone());
    }
}

/// Lister whose first call takes `first_delay` and returns `first`; later
/// calls return `rest` immediately. Tracks how many calls overlap.
#[derive(Debug)]
pub struct SlowFirstLister {
    first: Vec<String>,
    rest: Vec<String>,
    first_delay: std::time::Duration,
    calls: AtomicUsize,
    inflight: AtomicUsize,
    max_inflight: AtomicUsize,
}

impl SlowFirstLister {
    pub fn new(first: &[&str], rest: &[&str], first_delay: std::time::Duration) -> Arc<Self> {
        Arc::new(Self {
            first: first.iter().map(ToString::to_string).collect(),
            rest: rest.iter().map(ToString::to_string).collect(),
            first_delay,
            calls: AtomicUsize::new(0),
            inflight: AtomicUsize::new(0),
            max_inflight: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_inflight(&self) -> usize {
        self.max_inflight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretLister for SlowFirstLister {
    async fn list(&self, _namespace: &str) -> Result<Vec<Secret>, ListError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.inflight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_inflight.fetch_max(now, Ordering::SeqCst);

        let names = if call == 0 {
            tokio::time::sleep(self.first_delay).await;
            &self.first
        } else {
            &self.rest
        };

        self.inflight.fetch_sub(1, Ordering::SeqCst);
        Ok(names.iter().map(|n| secret(n)).collect())
    }
}

/// Lister returning the same secrets on every call
#[derive(Debug)]
pub struct StaticLister(pub Vec<Secret>);

#[async_trait]
impl SecretLister for StaticLister {
    async fn list(&self, _namespace: &str) -> Result<Vec<Secret>, ListError> {
        Ok(self.0.clone())
    }
}
