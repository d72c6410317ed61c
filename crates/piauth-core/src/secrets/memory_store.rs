//! In-memory secret store

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::traits::{DeleteOutcome, SecretStore, SecretStoreError, SecretStoreResult};

type Secrets = HashMap<(String, String), String>;

/// In-memory secret store for testing and ephemeral use
///
/// This store keeps secrets in memory and is fully read-write.
/// Secrets are lost when the store is dropped.
///
/// # Thread Safety
///
/// The store uses `RwLock` internally and is safe to use from multiple threads.
///
/// # Example
///
/// ```
/// use piauth_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.set("svc", "prod:password", "s3cr3t").unwrap();
/// assert_eq!(store.get("svc", "prod:password").unwrap().as_deref(), Some("s3cr3t"));
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<Secrets>,
}

impl MemorySecretStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store with initial `((service, key), value)` entries
    pub fn with_secrets<I, S, K, V>(initial: I) -> Self
    where
        I: IntoIterator<Item = ((S, K), V)>,
        S: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        let secrets = initial
            .into_iter()
            .map(|((s, k), v)| ((s.into(), k.into()), v.into()))
            .collect();
        Self {
            secrets: RwLock::new(secrets),
        }
    }

    /// Get the number of secrets in the store
    pub fn len(&self) -> usize {
        self.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> SecretStoreResult<RwLockReadGuard<'_, Secrets>> {
        self.secrets
            .read()
            .map_err(|_| SecretStoreError::Backend("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> SecretStoreResult<RwLockWriteGuard<'_, Secrets>> {
        self.secrets
            .write()
            .map_err(|_| SecretStoreError::Backend("memory store lock poisoned".to_string()))
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, service: &str, key: &str) -> SecretStoreResult<Option<String>> {
        let secrets = self.read()?;
        Ok(secrets.get(&(service.to_string(), key.to_string())).cloned())
    }

    fn set(&self, service: &str, key: &str, value: &str) -> SecretStoreResult<()> {
        let mut secrets = self.write()?;
        secrets.insert((service.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    fn delete(&self, service: &str, key: &str) -> SecretStoreResult<DeleteOutcome> {
        let mut secrets = self.write()?;
        match secrets.remove(&(service.to_string(), key.to_string())) {
            Some(_) => Ok(DeleteOutcome::Deleted),
            None => Ok(DeleteOutcome::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_name() {
        let store = MemorySecretStore::new();
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn test_memory_store_crud() {
        let store = MemorySecretStore::new();

        assert!(store.is_empty());
        assert_eq!(store.get("svc", "test").unwrap(), None);

        store.set("svc", "test", "value").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("svc", "test").unwrap(), Some("value".to_string()));

        // Overwrite, not append
        store.set("svc", "test", "new_value").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("svc", "test").unwrap(), Some("new_value".to_string()));

        assert_eq!(store.delete("svc", "test").unwrap(), DeleteOutcome::Deleted);
        assert_eq!(store.get("svc", "test").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_delete_missing() {
        let store = MemorySecretStore::new();
        assert_eq!(store.delete("svc", "missing").unwrap(), DeleteOutcome::NotFound);
    }

    #[test]
    fn test_memory_store_services_are_separate() {
        let store = MemorySecretStore::with_secrets([(("svc-a", "key"), "a")]);

        assert_eq!(store.get("svc-a", "key").unwrap(), Some("a".to_string()));
        assert_eq!(store.get("svc-b", "key").unwrap(), None);
    }

    #[test]
    fn test_memory_store_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemorySecretStore::new());
        let mut handles = vec![];

        for i in 0..10 {
            let store_clone = Arc::clone(&store);
            let handle = thread::spawn(move || {
                let key = format!("key_{}", i);
                let value = format!("value_{}", i);
                store_clone.set("svc", &key, &value).unwrap();
                assert_eq!(store_clone.get("svc", &key).unwrap(), Some(value));
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 10);
    }
}
