//! Authentication request model.
//!
//! The surrounding service hands the verifier a generic authentication
//! attempt; the verifier pattern-matches on its concrete shape and fails
//! fast when the kind does not match, instead of downcasting.

use serde::{Deserialize, Serialize};

/// Kind name of the request shape this crate verifies
pub const API_KEY_KIND: &str = "api-key";

/// Kind name of bearer-token requests, handled by a different strategy
pub const BEARER_KIND: &str = "bearer";

/// Credential material presented with a single authentication attempt.
///
/// Supplied per attempt and never persisted. The secure hash is a salted
/// digest of the caller's secret; the salt is the one the caller used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresentedCredential {
    /// Salted digest of the caller's secret
    pub secure_hash: String,

    /// Per-request salt the digest was computed with
    pub request_salt: String,
}

/// An inbound authentication attempt
#[derive(Debug, Clone)]
pub enum AuthenticationRequest {
    /// API key plus salted-hash credential; the kind this crate verifies
    ApiKey {
        /// Opaque account lookup key, distinct from the username
        api_key: String,
        /// Credential payload; may be absent on a malformed attempt
        credential: Option<PresentedCredential>,
    },

    /// Bearer-token attempt belonging to a different strategy
    Bearer { token: String },
}

impl AuthenticationRequest {
    /// Kind name, used in diagnostics and malformed-request errors
    pub fn kind(&self) -> &'static str {
        match self {
            AuthenticationRequest::ApiKey { .. } => API_KEY_KIND,
            AuthenticationRequest::Bearer { .. } => BEARER_KIND,
        }
    }

    /// The identifying principal of the attempt
    pub fn principal(&self) -> &str {
        match self {
            AuthenticationRequest::ApiKey { api_key, .. } => api_key,
            AuthenticationRequest::Bearer { token } => token,
        }
    }
}
