//! # Listing Error Types
//!
//! Errors returned by `SecretLister` implementations, classified as transient or permanent.

use thiserror::Error;

/// Secret listing failure
#[derive(Debug, Error)]
pub enum ListError {
    /// Kubernetes API request failed
    #[error("Kubernetes API error: {0}")]
    Api(#[from] kube::Error),
    /// Any other backend failure
    #[error("secret listing failed: {0}")]
    Other(String),
}

impl ListError {
    /// Whether the next cycle has a reasonable chance of succeeding
    ///
    /// Throttling and server errors are transient. Auth, permission and
    /// not-found responses are permanent until someone fixes RBAC or creates
    /// the namespace. Transport failures and unknown errors count as transient.
    pub fn is_transient(&self) -> bool {
        match self {
            ListError::Api(kube::Error::Api(response)) => {
                response.code == 429 || response.code >= 500
            }
            ListError::Api(_) | ListError::Other(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_errors_are_transient() {
        let err = ListError::Other("connection reset".to_string());
        assert!(err.is_transient());
        assert_eq!(err.to_string(), "secret listing failed: connection reset");
    }

    fn api_error(code: u16) -> ListError {
        ListError::Api(kube::Error::Api(kube::core::ErrorResponse {
            status: "Failure".to_string(),
            message: format!("request failed with {code}"),
            reason: "Test".to_string(),
            code,
        }))
    }

    #[test]
    fn test_api_error_classification() {
        let cases = [
            (401, false),
            (403, false),
            (404, false),
            (429, true),
            (500, true),
            (503, true),
        ];
        for (code, transient) in cases {
            assert_eq!(
                api_error(code).is_transient(),
                transient,
                "status code {code}"
            );
        }
    }
}
