//! Error handling for the credential verification flow.
//!
//! The taxonomy mirrors the outcome categories the surrounding
//! authentication framework treats distinctly: caller-visible rejections
//! (malformed request, bad credentials, unknown API key) versus
//! service-level faults (directory failures, collaborator bugs,
//! misconfiguration).

use thiserror::Error;

/// Result type alias for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Main error type for credential verification
#[derive(Error, Debug)]
pub enum AuthError {
    /// The inbound request is not the expected credential-token kind.
    /// Signals a caller/protocol mismatch rather than a wrong secret.
    #[error("expected authentication request of kind '{expected}', but received '{actual}'")]
    MalformedRequest {
        expected: &'static str,
        actual: &'static str,
    },

    /// Missing or incorrect credential. Deliberately opaque: which check
    /// failed is logged, never surfaced to the caller.
    #[error("bad credentials")]
    BadCredentials,

    /// No account exists for the presented API key
    #[error("no user found for the given api key")]
    UserNotFound,

    /// Underlying directory/storage failure; carries the original cause
    #[error("user directory failure: {0}")]
    ServiceFault(#[source] anyhow::Error),

    /// A collaborator returned an invalid result without raising an error;
    /// indicates a bug in the collaborator, not a caller error
    #[error("contract violation: {0}")]
    ContractViolation(String),

    /// Missing collaborator or invalid configuration, detected at startup
    #[error("configuration error: {0}")]
    Config(String),
}

/// Upstream handling category for a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The attempt itself was rejected (caller fault or unknown account)
    Rejection,
    /// The service could not evaluate the attempt
    ServiceError,
}

impl AuthError {
    /// Classify this error for upstream status handling
    pub fn class(&self) -> FailureClass {
        match self {
            AuthError::MalformedRequest { .. }
            | AuthError::BadCredentials
            | AuthError::UserNotFound => FailureClass::Rejection,
            AuthError::ServiceFault(_)
            | AuthError::ContractViolation(_)
            | AuthError::Config(_) => FailureClass::ServiceError,
        }
    }

    /// Create a contract violation error
    pub fn contract_violation(msg: impl Into<String>) -> Self {
        AuthError::ContractViolation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        AuthError::Config(msg.into())
    }
}

/// Errors raised by a [`UserDirectory`](crate::directory::UserDirectory) lookup
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// No record matches the API key
    #[error("no user found for the given api key")]
    UserNotFound,

    /// Any other lookup failure (connectivity, storage, ...)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_classification() {
        let malformed = AuthError::MalformedRequest {
            expected: "api-key",
            actual: "bearer",
        };
        assert_eq!(malformed.class(), FailureClass::Rejection);
        assert_eq!(AuthError::BadCredentials.class(), FailureClass::Rejection);
        assert_eq!(AuthError::UserNotFound.class(), FailureClass::Rejection);

        let fault = AuthError::ServiceFault(anyhow::anyhow!("connection refused"));
        assert_eq!(fault.class(), FailureClass::ServiceError);
        assert_eq!(
            AuthError::contract_violation("null record").class(),
            FailureClass::ServiceError
        );
        assert_eq!(
            AuthError::config("missing collaborator").class(),
            FailureClass::ServiceError
        );
    }

    #[test]
    fn test_malformed_request_names_both_kinds() {
        let err = AuthError::MalformedRequest {
            expected: "api-key",
            actual: "bearer",
        };
        let msg = err.to_string();
        assert!(msg.contains("api-key"));
        assert!(msg.contains("bearer"));
    }

    #[test]
    fn test_service_fault_keeps_cause_message() {
        let err = AuthError::ServiceFault(anyhow::anyhow!("connection refused"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_bad_credentials_is_opaque() {
        // The surfaced message must never say which check failed.
        assert_eq!(AuthError::BadCredentials.to_string(), "bad credentials");
    }
}
