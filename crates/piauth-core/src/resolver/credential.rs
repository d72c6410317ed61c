//! Credential values and key naming

use std::fmt;

/// A username/password pair
///
/// Both halves are opaque: nothing trims, validates or re-cases them.
/// `Debug` redacts the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn into_pair(self) -> (String, String) {
        (self.username, self.password)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where a resolved credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Username and password environment variables
    Environment,
    /// Secure store, already persisted
    Store,
    /// Secure store, persisted by an interactive prompt during this call
    Bootstrap,
}

impl CredentialSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::Environment => "environment",
            CredentialSource::Store => "store",
            CredentialSource::Bootstrap => "bootstrap",
        }
    }
}

/// Result of resolving a credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    pub credential: Credential,
    pub source: CredentialSource,
}

/// Secure-store keys for an account's username and password
///
/// `"{account}:username"` and `"{account}:password"`. Resolve, store and
/// delete all go through this so they agree on where an account lives.
pub fn key_pair(account: &str) -> (String, String) {
    (format!("{}:username", account), format!("{}:password", account))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNTS: &[&str] = &[
        "prod",
        "test",
        "",
        ":",
        "prod:username",
        "prod:password",
        "prod:",
        "PROD",
        "a:b:c",
        "ünïcode",
    ];

    #[test]
    fn test_key_pair_format() {
        assert_eq!(
            key_pair("prod"),
            ("prod:username".to_string(), "prod:password".to_string())
        );
    }

    #[test]
    fn test_key_pair_halves_distinct() {
        for account in ACCOUNTS {
            let (user_key, pass_key) = key_pair(account);
            assert_ne!(user_key, pass_key, "account {:?}", account);
        }
    }

    #[test]
    fn test_key_pairs_never_collide_across_accounts() {
        for (i, a) in ACCOUNTS.iter().enumerate() {
            for b in &ACCOUNTS[i + 1..] {
                let (au, ap) = key_pair(a);
                let (bu, bp) = key_pair(b);
                for key in [&au, &ap] {
                    assert!(key != &bu && key != &bp, "{:?} and {:?} share {:?}", a, b, key);
                }
            }
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let credential = Credential::new("alice", "s3cr3t");
        let debug = format!("{:?}", credential);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn test_into_pair() {
        let credential = Credential::new("alice", "s3cr3t");
        assert_eq!(
            credential.into_pair(),
            ("alice".to_string(), "s3cr3t".to_string())
        );
    }
}
