//! Credential verification against a resolved account record.
//!
//! This is the core of the crate: the two hook points the surrounding
//! authentication flow invokes for an API-key attempt. [`retrieve_user`]
//! resolves the key to a [`UserRecord`] through the injected
//! [`UserDirectory`]; [`check_credentials`] validates the presented
//! salted hash through the injected [`SecretComparator`].
//!
//! [`retrieve_user`]: CredentialVerifier::retrieve_user
//! [`check_credentials`]: CredentialVerifier::check_credentials

use std::sync::Arc;

use tracing::debug;

use crate::comparator::SecretComparator;
use crate::directory::{UserDirectory, UserRecord};
use crate::error::{AuthError, DirectoryError, Result};
use crate::token::{AuthenticationRequest, API_KEY_KIND};

/// Verifies API-key credentials against a user directory.
///
/// Both collaborators are bound at construction and never change;
/// the verifier holds no per-attempt state and may serve concurrent
/// attempts.
pub struct CredentialVerifier {
    directory: Arc<dyn UserDirectory>,
    comparator: Arc<dyn SecretComparator>,
}

impl CredentialVerifier {
    /// Create a verifier with both collaborators bound for its lifetime
    pub fn new(directory: Arc<dyn UserDirectory>, comparator: Arc<dyn SecretComparator>) -> Self {
        Self {
            directory,
            comparator,
        }
    }

    /// Start building a verifier
    pub fn builder() -> CredentialVerifierBuilder {
        CredentialVerifierBuilder::new()
    }

    /// Resolve the account record for an API key.
    ///
    /// `UserNotFound` propagates unchanged from the directory; any other
    /// directory failure surfaces as `ServiceFault` with the original
    /// cause attached. A directory that reports success without a record
    /// has broken its contract and is reported as `ContractViolation`,
    /// distinct from "not found".
    pub async fn retrieve_user(&self, api_key: &str) -> Result<UserRecord> {
        let loaded = match self.directory.get_user_by_api_key(api_key).await {
            Ok(loaded) => loaded,
            Err(DirectoryError::UserNotFound) => return Err(AuthError::UserNotFound),
            Err(DirectoryError::Other(cause)) => return Err(AuthError::ServiceFault(cause)),
        };

        loaded.ok_or_else(|| {
            AuthError::contract_violation(
                "user directory returned no record without raising an error",
            )
        })
    }

    /// Validate the presented credential against a previously retrieved
    /// record.
    ///
    /// The caller guarantees `user` was retrieved for this same attempt;
    /// that is not re-checked here. On success there is no output: the
    /// verified identity is the record itself. Which check failed is
    /// traced at debug level only; the caller sees an opaque
    /// `BadCredentials` either way.
    pub fn check_credentials(
        &self,
        user: &UserRecord,
        request: &AuthenticationRequest,
    ) -> Result<()> {
        let credential = match request {
            AuthenticationRequest::ApiKey { credential, .. } => credential,
            other => {
                debug!(
                    expected = API_KEY_KIND,
                    actual = other.kind(),
                    "authentication failed: unexpected request kind"
                );
                return Err(AuthError::MalformedRequest {
                    expected: API_KEY_KIND,
                    actual: other.kind(),
                });
            }
        };

        let Some(credential) = credential else {
            debug!("authentication failed: no credentials provided");
            return Err(AuthError::BadCredentials);
        };

        if !self.comparator.is_valid(
            &credential.secure_hash,
            &user.secret,
            &credential.request_salt,
        ) {
            debug!("authentication failed: presented hash does not match stored value");
            return Err(AuthError::BadCredentials);
        }

        Ok(())
    }
}

/// Builder enforcing that both collaborators are configured before the
/// verifier serves any request. Absence of either is a configuration
/// error detected once, at build time, not per attempt.
#[derive(Default)]
pub struct CredentialVerifierBuilder {
    directory: Option<Arc<dyn UserDirectory>>,
    comparator: Option<Arc<dyn SecretComparator>>,
}

impl CredentialVerifierBuilder {
    pub fn new() -> Self {
        Self {
            directory: None,
            comparator: None,
        }
    }

    /// Set the user directory collaborator
    pub fn directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Set the secret comparator collaborator
    pub fn comparator(mut self, comparator: Arc<dyn SecretComparator>) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Build the verifier, failing fast when a collaborator is missing
    pub fn build(self) -> Result<CredentialVerifier> {
        let directory = self
            .directory
            .ok_or_else(|| AuthError::config("a UserDirectory must be set"))?;
        let comparator = self
            .comparator
            .ok_or_else(|| AuthError::config("a SecretComparator must be set"))?;
        Ok(CredentialVerifier::new(directory, comparator))
    }
}
