//! Secret storage abstractions and implementations
//!
//! This module provides the secure-store side of credential resolution:
//! - `SecretStore` trait keyed by `(service, key)`
//! - `DeleteOutcome` so a missing entry is distinguishable from a failure
//! - Built-in implementations: `KeychainSecretStore`, `MemorySecretStore`

mod traits;
mod memory_store;
mod keychain_store;

pub use traits::{DeleteOutcome, SecretStore, SecretStoreError, SecretStoreResult};
pub use memory_store::MemorySecretStore;
pub use keychain_store::KeychainSecretStore;
