//! PiAuth Core
//!
//! Username/password resolution for the PI Web API, backed by the OS keychain.
//!
//! Resolution order for an account:
//! 1. `PI_USER` / `PI_PASS` environment variables, when both are set
//! 2. The secure store, under `"{account}:username"` / `"{account}:password"`
//! 3. An interactive prompt that persists what it reads (opt-in per call)
//!
//! ```rust,no_run
//! use piauth_core::CredentialResolver;
//!
//! let resolver = CredentialResolver::from_env();
//!
//! // First run on a machine: prompt and persist
//! resolver.store("prod", None, None)?;
//!
//! // Everywhere else: never prompts
//! let (username, password) = resolver.basic_auth("prod")?;
//! # Ok::<(), piauth_core::ResolverError>(())
//! ```

pub mod config;
pub mod environment;
pub mod http;
pub mod logging;
pub mod prompt;
pub mod resolver;
pub mod secrets;

// Re-export commonly used types
pub use config::ResolverConfig;

pub use environment::{Environment, MemoryEnvironment, ProcessEnvironment};

pub use http::AuthenticatedClient;

pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};

pub use prompt::{InputProvider, ScriptedPrompter, SecretInputProvider, TerminalPrompter};

pub use resolver::{
    key_pair, Credential, CredentialResolver, CredentialSource, ResolvedCredential,
    ResolverError, ResolverResult,
};

pub use secrets::{
    DeleteOutcome, KeychainSecretStore, MemorySecretStore, SecretStore, SecretStoreError,
    SecretStoreResult,
};
