//! # Kubernetes Secret Lister
//!
//! Lists secrets through the Kubernetes API using `kube`.

use super::{ListError, SecretLister};
use anyhow::{Context, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use kube::{api::ListParams, Api, Client};
use tracing::debug;

/// `SecretLister` backed by a Kubernetes client
///
/// The client is cloned into a namespaced `Api` on every call, so credential
/// refreshes done by the client are picked up by the next cycle.
#[derive(Clone)]
pub struct KubeSecretLister {
    client: Client,
}

impl std::fmt::Debug for KubeSecretLister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeSecretLister").finish_non_exhaustive()
    }
}

impl KubeSecretLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a lister from the ambient kubeconfig or in-cluster service account
    #[allow(
        clippy::missing_errors_doc,
        reason = "Error documentation is provided in doc comments"
    )]
    pub async fn try_default() -> Result<Self> {
        install_crypto_provider();
        let client = Client::try_default()
            .await
            .context("Failed to create Kubernetes client")?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl SecretLister for KubeSecretLister {
    async fn list(&self, namespace: &str) -> Result<Vec<Secret>, ListError> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let list = secrets.list(&ListParams::default()).await?;
        debug!(namespace = %namespace, count = list.items.len(), "listed secrets");
        Ok(list.items)
    }
}

/// Install ring as the rustls crypto provider
///
/// Required for rustls 0.23+ before the first TLS connection. Safe to call
/// more than once; later calls find the provider already installed.
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}
