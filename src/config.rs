//! Configuration for the authentication service.
//!
//! Covers the registered API users fed to the in-memory directory and
//! the logging setup. The verifier itself takes its collaborators by
//! constructor, not from this file.

use crate::error::{AuthError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Registered API users
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Custom deployment-specific settings
    #[serde(default)]
    pub custom: HashMap<String, serde_json::Value>,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Accounts resolvable by API key
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

/// One configured account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    /// Opaque lookup key; distinct from the identity and not guessable
    pub api_key: String,

    /// Identity handed to downstream authorization
    pub identity: String,

    /// Stored secret that presented hashes are compared against
    pub secret: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

/// Log format enumeration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AuthError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AuthError::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AuthError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| AuthError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for user in &self.auth.users {
            if user.api_key.is_empty() {
                return Err(AuthError::Config(format!(
                    "user '{}' has an empty api key",
                    user.identity
                )));
            }
            if user.secret.is_empty() {
                return Err(AuthError::Config(format!(
                    "user '{}' has an empty secret",
                    user.identity
                )));
            }
            if !seen.insert(user.api_key.as_str()) {
                return Err(AuthError::Config(format!(
                    "duplicate api key '{}'",
                    user.api_key
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(api_key: &str, identity: &str, secret: &str) -> UserEntry {
        UserEntry {
            api_key: api_key.to_string(),
            identity: identity.to_string(),
            secret: secret.to_string(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_api_key() {
        let mut config = Config::default();
        config.auth.users.push(user("", "alice", "s3cret"));
        assert!(matches!(config.validate(), Err(AuthError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let mut config = Config::default();
        config.auth.users.push(user("abc123", "alice", ""));
        assert!(matches!(config.validate(), Err(AuthError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_api_key() {
        let mut config = Config::default();
        config.auth.users.push(user("abc123", "alice", "s3cret"));
        config.auth.users.push(user("abc123", "bob", "hunter2"));
        match config.validate() {
            Err(AuthError::Config(msg)) => assert!(msg.contains("abc123")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_file_round_trip() {
        let mut config = Config::default();
        config.auth.users.push(user("abc123", "alice", "s3cret"));
        config.logging.level = "debug".to_string();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apikey-auth.toml");
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.auth.users.len(), 1);
        assert_eq!(loaded.auth.users[0].identity, "alice");
        assert_eq!(loaded.logging.level, "debug");
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(AuthError::Config(_))
        ));
    }
}
