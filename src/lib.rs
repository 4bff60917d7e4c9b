//! # apikey-auth
//!
//! An API-key authentication strategy: validates a caller's identity from
//! an API key plus a salted, hashed secret, producing a verified identity
//! for downstream authorization.
//!
//! The crate is a thin adapter over a fixed two-hook authentication flow.
//! It owns no data model and no protocol: account lookup is delegated to a
//! [`UserDirectory`](directory::UserDirectory) and hash comparison to a
//! [`SecretComparator`](comparator::SecretComparator), both injected at
//! construction. Failures are classified so the surrounding service can
//! treat not-found, bad-credentials, and service faults distinctly.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use apikey_auth::comparator::Sha256SecretComparator;
//! use apikey_auth::directory::{InMemoryUserDirectory, UserRecord};
//! use apikey_auth::{
//!     AuthenticationProvider, AuthenticationRequest, CredentialVerifier, PresentedCredential,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let comparator = Sha256SecretComparator::new();
//! let mut directory = InMemoryUserDirectory::new();
//! directory.insert(
//!     "abc123",
//!     UserRecord {
//!         identity: "alice".to_string(),
//!         secret: "s3cret".to_string(),
//!     },
//! );
//!
//! let verifier = CredentialVerifier::builder()
//!     .directory(Arc::new(directory))
//!     .comparator(Arc::new(comparator))
//!     .build()?;
//!
//! let request = AuthenticationRequest::ApiKey {
//!     api_key: "abc123".to_string(),
//!     credential: Some(PresentedCredential {
//!         secure_hash: comparator.digest("s3cret", "nonce"),
//!         request_salt: "nonce".to_string(),
//!     }),
//! };
//!
//! let verified = verifier.authenticate(&request).await?;
//! assert_eq!(verified.identity, "alice");
//! # Ok(())
//! # }
//! ```

pub mod comparator;
pub mod config;
pub mod directory;
pub mod error;
pub mod provider;
pub mod token;
pub mod utils;
pub mod verifier;

// Re-export main types for convenience
pub use config::Config;
pub use error::{AuthError, DirectoryError, FailureClass, Result};
pub use provider::{AuthenticationProvider, VerifiedIdentity};
pub use token::{AuthenticationRequest, PresentedCredential};
pub use verifier::{CredentialVerifier, CredentialVerifierBuilder};
