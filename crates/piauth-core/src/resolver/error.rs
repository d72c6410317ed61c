//! Resolver error types

use std::io;

use thiserror::Error;

use crate::secrets::SecretStoreError;

/// Errors returned by [`CredentialResolver`](super::CredentialResolver)
#[derive(Error, Debug)]
pub enum ResolverError {
    /// No source produced a complete username/password pair
    #[error(
        "Missing credentials.\n\
         - Set env vars {user_env_var}/{pass_env_var}, OR\n\
         - Run: CredentialResolver::from_env().store(\"{account}\", None, None)\n\
         (service='{service}', account='{account}')"
    )]
    MissingCredentials {
        service: String,
        account: String,
        user_env_var: String,
        pass_env_var: String,
    },

    /// The secure store failed for a reason other than a missing entry
    #[error(transparent)]
    Store(#[from] SecretStoreError),

    /// Reading from the prompt failed (closed stdin, no terminal, ...)
    #[error("Prompt failed: {0}")]
    Prompt(#[from] io::Error),
}

impl ResolverError {
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self, ResolverError::MissingCredentials { .. })
    }
}

pub type ResolverResult<T> = Result<T, ResolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_message() {
        let err = ResolverError::MissingCredentials {
            service: "pi-weblogger".to_string(),
            account: "prod".to_string(),
            user_env_var: "PI_USER".to_string(),
            pass_env_var: "PI_PASS".to_string(),
        };

        assert!(err.is_missing_credentials());
        assert_eq!(
            err.to_string(),
            "Missing credentials.\n\
             - Set env vars PI_USER/PI_PASS, OR\n\
             - Run: CredentialResolver::from_env().store(\"prod\", None, None)\n\
             (service='pi-weblogger', account='prod')"
        );
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: ResolverError = SecretStoreError::Unavailable("keychain locked".to_string()).into();
        assert!(!err.is_missing_credentials());
        assert_eq!(err.to_string(), "Secret store unavailable: keychain locked");
    }
}
