//! Core traits and types for secret storage

use thiserror::Error;

/// Outcome of a delete that reached the backend
///
/// A missing key is not a failure; callers that don't care can ignore the
/// distinction, callers that do can match on it without parsing error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The entry existed and was removed
    Deleted,
    /// There was nothing stored under the key
    NotFound,
}

/// Errors that can occur during secret store operations
///
/// "Not found" is deliberately absent: it is `Ok(None)` on get and
/// `Ok(DeleteOutcome::NotFound)` on delete.
#[derive(Error, Debug)]
pub enum SecretStoreError {
    /// The backend cannot be reached (keychain locked, daemon not running, ...)
    #[error("Secret store unavailable: {0}")]
    Unavailable(String),

    /// The backend answered but the operation failed
    #[error("Secret store failure: {0}")]
    Backend(String),
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// Trait for secret storage implementations
///
/// Secrets are addressed by `(service, key)`. The service namespaces the
/// application; the key names an individual secret within it.
///
/// Implementations:
/// - System keychain (`KeychainSecretStore`)
/// - In-memory for testing (`MemorySecretStore`)
///
/// # Example
///
/// ```
/// use piauth_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.set("pi-weblogger", "prod:username", "alice").unwrap();
/// assert_eq!(store.get("pi-weblogger", "prod:username").unwrap(), Some("alice".to_string()));
/// ```
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Retrieve a secret, `Ok(None)` if nothing is stored under the key
    fn get(&self, service: &str, key: &str) -> SecretStoreResult<Option<String>>;

    /// Store a secret, replacing any existing value
    fn set(&self, service: &str, key: &str, value: &str) -> SecretStoreResult<()>;

    /// Delete a secret
    fn delete(&self, service: &str, key: &str) -> SecretStoreResult<DeleteOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SecretStoreError::Unavailable("keychain locked".to_string());
        assert_eq!(err.to_string(), "Secret store unavailable: keychain locked");

        let err = SecretStoreError::Backend("bad encoding".to_string());
        assert_eq!(err.to_string(), "Secret store failure: bad encoding");
    }
}
