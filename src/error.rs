//! # Observer Error Types
//!
//! Errors surfaced by observers and the registry.

use crate::lister::ListError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObserverError {
    /// Observer requested without a namespace name
    #[error("namespace name must not be empty")]
    MissingNamespace,
    /// Polling interval of zero
    #[error("polling interval for namespace {namespace} must be greater than zero")]
    InvalidInterval { namespace: String },
    /// A refresh cycle could not list secrets
    #[error("failed to list secrets in namespace {namespace}: {source}")]
    List {
        namespace: String,
        #[source]
        source: ListError,
    },
}

impl ObserverError {
    /// Whether retrying on the next cycle can help
    ///
    /// Configuration errors never go away on their own.
    pub fn is_transient(&self) -> bool {
        match self {
            ObserverError::List { source, .. } => source.is_transient(),
            ObserverError::MissingNamespace | ObserverError::InvalidInterval { .. } => false,
        }
    }
}
