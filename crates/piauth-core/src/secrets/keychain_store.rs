//! System keychain secret store
//!
//! Uses the OS keychain for secure secret storage:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use keyring::Entry;

use super::traits::{DeleteOutcome, SecretStore, SecretStoreError, SecretStoreResult};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::{log_debug, log_error};

/// Secret store backed by the system keychain
///
/// Each `(service, key)` pair maps to one keychain entry, with the key used
/// as the entry's user/account attribute:
///
/// - **macOS**: Keychain Services
/// - **Windows**: Credential Manager
/// - **Linux**: Secret Service API (GNOME Keyring, KWallet, etc.)
///
/// # Example
///
/// ```no_run
/// use piauth_core::secrets::{KeychainSecretStore, SecretStore};
///
/// let store = KeychainSecretStore::new();
/// store.set("pi-weblogger", "prod:username", "alice").unwrap();
///
/// let username = store.get("pi-weblogger", "prod:username").unwrap();
/// assert_eq!(username.as_deref(), Some("alice"));
/// ```
pub struct KeychainSecretStore {
    logger: SharedLogger,
}

impl KeychainSecretStore {
    pub fn new() -> Self {
        Self {
            logger: NoOpLogger::shared(),
        }
    }

    /// Route diagnostics to the given logger. Values are never logged.
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    fn entry(&self, service: &str, key: &str) -> SecretStoreResult<Entry> {
        Entry::new(service, key).map_err(|e| map_keyring_error("create entry", e))
    }
}

impl Default for KeychainSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a keyring error. `NoEntry` must be handled by the caller first.
fn map_keyring_error(op: &str, err: keyring::Error) -> SecretStoreError {
    match err {
        keyring::Error::PlatformFailure(e) => {
            SecretStoreError::Unavailable(format!("{} failed: {}", op, e))
        }
        keyring::Error::NoStorageAccess(e) => {
            SecretStoreError::Unavailable(format!("{} failed, no storage access: {}", op, e))
        }
        other => SecretStoreError::Backend(format!("{} failed: {}", op, other)),
    }
}

impl SecretStore for KeychainSecretStore {
    fn name(&self) -> &str {
        "keychain"
    }

    fn get(&self, service: &str, key: &str) -> SecretStoreResult<Option<String>> {
        log_debug!(self.logger, "keychain get key='{}', service='{}'", key, service);
        let entry = self.entry(service, key)?;
        match entry.get_password() {
            Ok(value) => {
                log_debug!(self.logger, "keychain get hit, value len={}", value.len());
                Ok(Some(value))
            }
            Err(keyring::Error::NoEntry) => {
                log_debug!(self.logger, "keychain get miss");
                Ok(None)
            }
            Err(e) => {
                log_error!(self.logger, "keychain get failed: {}", e);
                Err(map_keyring_error("read", e))
            }
        }
    }

    fn set(&self, service: &str, key: &str, value: &str) -> SecretStoreResult<()> {
        log_debug!(self.logger, "keychain set key='{}', service='{}'", key, service);
        self.entry(service, key)?
            .set_password(value)
            .map_err(|e| map_keyring_error("write", e))?;

        // Read back through a fresh entry so a dropped write doesn't go unnoticed
        match self.entry(service, key)?.get_password() {
            Ok(stored) if stored == value => Ok(()),
            Ok(stored) => {
                log_error!(
                    self.logger,
                    "keychain verification mismatch: expected len={}, got len={}",
                    value.len(),
                    stored.len()
                );
                Err(SecretStoreError::Backend(format!(
                    "verification of '{}' failed: stored value differs",
                    key
                )))
            }
            Err(keyring::Error::NoEntry) => Err(SecretStoreError::Backend(format!(
                "verification of '{}' failed: entry missing after write",
                key
            ))),
            Err(e) => Err(map_keyring_error("verify", e)),
        }
    }

    fn delete(&self, service: &str, key: &str) -> SecretStoreResult<DeleteOutcome> {
        let entry = self.entry(service, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(DeleteOutcome::Deleted),
            Err(keyring::Error::NoEntry) => Ok(DeleteOutcome::NotFound),
            Err(e) => Err(map_keyring_error("delete", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests require a running keychain service
    // They may fail on CI systems without proper keychain setup

    const SERVICE: &str = "piauth-test";

    #[test]
    #[ignore] // Requires system keychain
    fn test_set_get_delete() {
        let store = KeychainSecretStore::new();
        let _ = store.delete(SERVICE, "test:username");

        store.set(SERVICE, "test:username", "alice").unwrap();
        assert_eq!(store.get(SERVICE, "test:username").unwrap(), Some("alice".to_string()));

        store.set(SERVICE, "test:username", "bob").unwrap();
        assert_eq!(store.get(SERVICE, "test:username").unwrap(), Some("bob".to_string()));

        assert_eq!(store.delete(SERVICE, "test:username").unwrap(), DeleteOutcome::Deleted);
        assert_eq!(store.get(SERVICE, "test:username").unwrap(), None);
    }

    #[test]
    #[ignore] // Requires system keychain
    fn test_delete_missing() {
        let store = KeychainSecretStore::new();
        let _ = store.delete(SERVICE, "never-stored");
        assert_eq!(store.delete(SERVICE, "never-stored").unwrap(), DeleteOutcome::NotFound);
    }

    #[test]
    fn test_name() {
        let store = KeychainSecretStore::new();
        assert_eq!(store.name(), "keychain");
    }

    #[test]
    fn test_map_keyring_error() {
        let err = map_keyring_error("read", keyring::Error::Invalid("key".into(), "too long".into()));
        assert!(matches!(err, SecretStoreError::Backend(_)));

        let err = map_keyring_error("read", keyring::Error::NoStorageAccess("locked".into()));
        assert!(matches!(err, SecretStoreError::Unavailable(_)));
    }
}
