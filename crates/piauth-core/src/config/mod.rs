//! Resolver configuration
//!
//! Where credentials live (service name), which account is used when the
//! caller doesn't name one, and which environment variables carry the
//! direct override. Read once, then handed to the resolver.

use serde::{Deserialize, Serialize};

use crate::environment::{Environment, ProcessEnvironment};

/// Service name used when `KEYRING_SERVICE` is not set
pub const DEFAULT_SERVICE_NAME: &str = "pi-weblogger";

/// Account used when `KEYRING_ACCOUNT` is not set
pub const DEFAULT_ACCOUNT: &str = "prod";

/// Environment variable overriding the service name
pub const SERVICE_ENV_VAR: &str = "KEYRING_SERVICE";

/// Environment variable overriding the default account
pub const ACCOUNT_ENV_VAR: &str = "KEYRING_ACCOUNT";

/// Direct username override, only honored together with [`PASS_ENV_VAR`]
pub const USER_ENV_VAR: &str = "PI_USER";

/// Direct password override, only honored together with [`USER_ENV_VAR`]
pub const PASS_ENV_VAR: &str = "PI_PASS";

/// Configuration for [`CredentialResolver`](crate::resolver::CredentialResolver)
///
/// Every field has a default, so a partial table deserializes:
///
/// ```
/// use piauth_core::config::ResolverConfig;
///
/// let config: ResolverConfig = serde_json::from_str(r#"{"default_account": "test"}"#).unwrap();
/// assert_eq!(config.default_account, "test");
/// assert_eq!(config.service_name, "pi-weblogger");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Namespace shared by all accounts in the secure store
    pub service_name: String,
    /// Account resolved by `resolve_default`
    pub default_account: String,
    /// Variable holding the override username
    pub user_env_var: String,
    /// Variable holding the override password
    pub pass_env_var: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            default_account: DEFAULT_ACCOUNT.to_string(),
            user_env_var: USER_ENV_VAR.to_string(),
            pass_env_var: PASS_ENV_VAR.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Defaults with `KEYRING_SERVICE` / `KEYRING_ACCOUNT` applied from `env`
    pub fn from_environment(env: &dyn Environment) -> Self {
        let mut config = Self::default();
        if let Some(service) = env.var(SERVICE_ENV_VAR) {
            config.service_name = service;
        }
        if let Some(account) = env.var(ACCOUNT_ENV_VAR) {
            config.default_account = account;
        }
        config
    }

    /// Same as [`from_environment`](Self::from_environment) against the process environment
    pub fn from_env() -> Self {
        Self::from_environment(&ProcessEnvironment::new())
    }

    pub fn with_service_name(mut self, service: impl Into<String>) -> Self {
        self.service_name = service.into();
        self
    }

    pub fn with_default_account(mut self, account: impl Into<String>) -> Self {
        self.default_account = account.into();
        self
    }
}
