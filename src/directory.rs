//! User Directory collaborator: resolves API keys to account records.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::config::UserEntry;
use crate::error::DirectoryError;

/// An account record resolved from an API key.
///
/// Owned and lifecycle-managed by the directory; the verifier holds it
/// only for the duration of one attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Verified identity handed to downstream authorization
    pub identity: String,

    /// Stored secret, opaque to the verifier; only the
    /// [`SecretComparator`](crate::comparator::SecretComparator) reads it
    pub secret: String,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("identity", &self.identity)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Lookup of account records by API key.
///
/// Contract: `Ok(Some(record))` on a match, `Err(UserNotFound)` when no
/// account exists for the key, `Err(Other)` for any other fault.
/// Returning `Ok(None)` violates the contract; the verifier reports it
/// as a bug in the implementation, not as a missing account.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user_by_api_key(
        &self,
        api_key: &str,
    ) -> Result<Option<UserRecord>, DirectoryError>;
}

/// In-memory directory backed by configured user entries
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Build a directory from configured user entries
    pub fn from_entries(entries: &[UserEntry]) -> Self {
        let users = entries
            .iter()
            .map(|entry| {
                (
                    entry.api_key.clone(),
                    UserRecord {
                        identity: entry.identity.clone(),
                        secret: entry.secret.clone(),
                    },
                )
            })
            .collect();
        Self { users }
    }

    /// Register a record under an API key
    pub fn insert(&mut self, api_key: impl Into<String>, record: UserRecord) {
        self.users.insert(api_key.into(), record);
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get_user_by_api_key(
        &self,
        api_key: &str,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        match self.users.get(api_key) {
            Some(record) => Ok(Some(record.clone())),
            None => Err(DirectoryError::UserNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_hit_and_miss() {
        let mut directory = InMemoryUserDirectory::new();
        directory.insert(
            "abc123",
            UserRecord {
                identity: "alice".to_string(),
                secret: "stored-secret".to_string(),
            },
        );

        let found = directory.get_user_by_api_key("abc123").await;
        assert_eq!(found.unwrap().unwrap().identity, "alice");

        let missing = directory.get_user_by_api_key("nope").await;
        assert!(matches!(missing, Err(DirectoryError::UserNotFound)));
    }

    #[test]
    fn test_from_entries() {
        let entries = vec![UserEntry {
            api_key: "abc123".to_string(),
            identity: "alice".to_string(),
            secret: "stored-secret".to_string(),
        }];
        let directory = InMemoryUserDirectory::from_entries(&entries);
        assert_eq!(directory.len(), 1);
        assert!(!directory.is_empty());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let record = UserRecord {
            identity: "alice".to_string(),
            secret: "hunter2".to_string(),
        };
        let rendered = format!("{record:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }
}
