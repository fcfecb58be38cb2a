//! # Secret Listing
//!
//! The capability an observer polls: list every `Secret` in a namespace.
//!
//! `KubeSecretLister` backs it with the Kubernetes API. Tests and embedding
//! services can supply their own implementation.

mod error;
mod kubernetes;

pub use self::error::ListError;
pub use self::kubernetes::{install_crypto_provider, KubeSecretLister};

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;

/// Lists secrets for a namespace
///
/// Called once per refresh cycle. Implementations own transport, auth and
/// pagination; the observer enforces no timeout of its own.
#[async_trait]
pub trait SecretLister: Send + Sync {
    /// Return every secret currently present in `namespace`
    async fn list(&self, namespace: &str) -> Result<Vec<Secret>, ListError>;
}
