//! Utility functions and helpers.

pub mod logging;

/// Generate a unique id for correlating one authentication attempt in logs
pub fn generate_attempt_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Generate a random alphanumeric request salt
pub fn generate_salt(len: usize) -> String {
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
