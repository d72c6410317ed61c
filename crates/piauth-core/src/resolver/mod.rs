//! Credential resolution
//!
//! A single username/password pair per account, resolved from the
//! environment, the secure store, or an opt-in interactive prompt.

mod credential;
mod credential_resolver;
mod error;

pub use credential::{key_pair, Credential, CredentialSource, ResolvedCredential};
pub use credential_resolver::{CredentialResolver, PASSWORD_PROMPT, USERNAME_PROMPT};
pub use error::{ResolverError, ResolverResult};
