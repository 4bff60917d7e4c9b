//! Authentication orchestration over the two verifier hooks.
//!
//! The surrounding service consumes one [`AuthenticationProvider`] per
//! strategy. For API-key attempts the flow is fixed: resolve the
//! principal to a record, then validate the presented credential against
//! it, in that order.

use async_trait::async_trait;
use tracing::{debug, debug_span, Instrument};

use crate::error::Result;
use crate::token::AuthenticationRequest;
use crate::verifier::CredentialVerifier;

/// A verified caller identity produced by a successful attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Identity handed to downstream authorization
    pub identity: String,
}

/// One authentication strategy consumed by the surrounding service
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
    /// Run one authentication attempt to completion.
    ///
    /// All failures surface synchronously; nothing is retried or
    /// swallowed here.
    async fn authenticate(&self, request: &AuthenticationRequest) -> Result<VerifiedIdentity>;
}

#[async_trait]
impl AuthenticationProvider for CredentialVerifier {
    async fn authenticate(&self, request: &AuthenticationRequest) -> Result<VerifiedIdentity> {
        let attempt_id = crate::utils::generate_attempt_id();
        let span = debug_span!("authenticate", %attempt_id, kind = request.kind());

        async {
            let user = self.retrieve_user(request.principal()).await?;
            self.check_credentials(&user, request)?;
            debug!(identity = %user.identity, "authentication succeeded");
            Ok(VerifiedIdentity {
                identity: user.identity,
            })
        }
        .instrument(span)
        .await
    }
}
