//! Credential resolution from environment, secure store and prompt
//!
//! Checks sources in priority order, first complete pair wins:
//! 1. Environment variables (both username and password must be set)
//! 2. Secure store, under the account's key pair
//! 3. Interactive prompt, persisted to the store and read back (opt-in)
//!
//! # Concurrency
//!
//! Calls are independent and nothing is cached. There is no locking around
//! the two writes of `store`: concurrent writers on the same account race and
//! the last writer wins, possibly mixing a username from one writer with a
//! password from another.
//!
//! Within a single `store`, a failed password write puts the previous
//! username back (or removes the new one) so the account never reads as a
//! new username paired with an old password.

use std::sync::Arc;

use super::credential::{key_pair, Credential, CredentialSource, ResolvedCredential};
use super::error::{ResolverError, ResolverResult};
use crate::config::ResolverConfig;
use crate::environment::{Environment, ProcessEnvironment};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::prompt::{SharedInputProvider, SharedSecretInputProvider, TerminalPrompter};
use crate::secrets::{DeleteOutcome, KeychainSecretStore, SecretStore};
use crate::{log_debug, log_info, log_warn};

/// Prompt shown when bootstrapping a username
pub const USERNAME_PROMPT: &str = "PI Username: ";

/// Prompt shown when bootstrapping a password
pub const PASSWORD_PROMPT: &str = "PI Password: ";

/// Resolves, stores and deletes the username/password pair for an account
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use piauth_core::config::ResolverConfig;
/// use piauth_core::environment::MemoryEnvironment;
/// use piauth_core::prompt::ScriptedPrompter;
/// use piauth_core::resolver::CredentialResolver;
/// use piauth_core::secrets::MemorySecretStore;
///
/// let prompter = Arc::new(ScriptedPrompter::new(["alice"], ["s3cr3t"]));
/// let resolver = CredentialResolver::new(
///     ResolverConfig::default(),
///     Arc::new(MemorySecretStore::new()),
///     Arc::new(MemoryEnvironment::new()),
///     prompter.clone(),
///     prompter,
/// );
///
/// let credential = resolver.resolve("prod", true).unwrap();
/// assert_eq!(credential.username, "alice");
/// ```
pub struct CredentialResolver {
    config: ResolverConfig,
    store: Arc<dyn SecretStore>,
    env: Arc<dyn Environment>,
    input: SharedInputProvider,
    secret_input: SharedSecretInputProvider,
    logger: SharedLogger,
}

impl CredentialResolver {
    /// Create a resolver from explicit collaborators
    pub fn new(
        config: ResolverConfig,
        store: Arc<dyn SecretStore>,
        env: Arc<dyn Environment>,
        input: SharedInputProvider,
        secret_input: SharedSecretInputProvider,
    ) -> Self {
        Self {
            config,
            store,
            env,
            input,
            secret_input,
            logger: NoOpLogger::shared(),
        }
    }

    /// System keychain, process environment and terminal prompts, with
    /// `KEYRING_SERVICE` / `KEYRING_ACCOUNT` applied to the configuration
    pub fn from_env() -> Self {
        let env = ProcessEnvironment::new();
        let prompter = Arc::new(TerminalPrompter::new());
        Self::new(
            ResolverConfig::from_environment(&env),
            Arc::new(KeychainSecretStore::new()),
            Arc::new(env),
            prompter.clone(),
            prompter,
        )
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the credential for `account`
    ///
    /// With `allow_interactive_bootstrap`, a store miss prompts for a new
    /// credential, persists it and returns what the store then holds.
    /// Without it, a miss is `MissingCredentials`; nothing ever blocks on a
    /// prompt unless the caller opted in.
    pub fn resolve(&self, account: &str, allow_interactive_bootstrap: bool) -> ResolverResult<Credential> {
        self.resolve_with_source(account, allow_interactive_bootstrap)
            .map(|resolved| resolved.credential)
    }

    /// Like [`resolve`](Self::resolve), also reporting which source answered
    pub fn resolve_with_source(
        &self,
        account: &str,
        allow_interactive_bootstrap: bool,
    ) -> ResolverResult<ResolvedCredential> {
        log_debug!(
            self.logger,
            "resolve account='{}', service='{}', bootstrap={}",
            account,
            self.config.service_name,
            allow_interactive_bootstrap
        );

        if let Some(credential) = self.env_credential() {
            log_debug!(self.logger, "resolved from ${}/${}", self.config.user_env_var, self.config.pass_env_var);
            return Ok(ResolvedCredential {
                credential,
                source: CredentialSource::Environment,
            });
        }

        if let Some(credential) = self.stored_credential(account)? {
            log_debug!(self.logger, "resolved account '{}' from {} store", account, self.store.name());
            return Ok(ResolvedCredential {
                credential,
                source: CredentialSource::Store,
            });
        }

        if allow_interactive_bootstrap {
            log_info!(self.logger, "no stored credentials for account '{}', prompting", account);
            self.store(account, None, None)?;
            // Trust the store, not the prompt: a silently dropped write must surface here
            if let Some(credential) = self.stored_credential(account)? {
                return Ok(ResolvedCredential {
                    credential,
                    source: CredentialSource::Bootstrap,
                });
            }
            log_warn!(self.logger, "credentials for account '{}' not readable after bootstrap", account);
        }

        Err(self.missing(account))
    }

    /// Resolve the configured default account
    pub fn resolve_default(&self, allow_interactive_bootstrap: bool) -> ResolverResult<Credential> {
        self.resolve(&self.config.default_account, allow_interactive_bootstrap)
    }

    /// Non-interactive resolve, for attaching basic auth to HTTP requests
    pub fn basic_auth(&self, account: &str) -> ResolverResult<(String, String)> {
        self.resolve(account, false).map(Credential::into_pair)
    }

    /// Persist a credential for `account`, prompting for any missing half
    ///
    /// The username prompt echoes and its answer is trimmed; the password
    /// prompt is masked and taken verbatim. Empty arguments count as missing.
    /// Existing values are overwritten. A failed password write restores
    /// the previous username before the error is returned.
    pub fn store(&self, account: &str, username: Option<&str>, password: Option<&str>) -> ResolverResult<()> {
        let username = match username.filter(|u| !u.is_empty()) {
            Some(username) => username.to_string(),
            None => self.input.read_line(USERNAME_PROMPT)?.trim().to_string(),
        };
        let password = match password.filter(|p| !p.is_empty()) {
            Some(password) => password.to_string(),
            None => self.secret_input.read_secret(PASSWORD_PROMPT)?,
        };

        let (user_key, pass_key) = key_pair(account);
        let service = &self.config.service_name;
        let previous_username = self.store.get(service, &user_key)?;
        self.store.set(service, &user_key, &username)?;
        if let Err(e) = self.store.set(service, &pass_key, &password) {
            self.restore(service, &user_key, previous_username.as_deref());
            return Err(e.into());
        }

        log_info!(self.logger, "stored credentials for account '{}' in {} store", account, self.store.name());
        Ok(())
    }

    /// Remove the stored credential for `account`
    ///
    /// Both keys are attempted even if the first fails. An absent key is not
    /// an error; the first real store failure is returned.
    pub fn delete(&self, account: &str) -> ResolverResult<()> {
        let (user_key, pass_key) = key_pair(account);
        let service = &self.config.service_name;

        let mut first_error = None;
        for key in [&user_key, &pass_key] {
            match self.store.delete(service, key) {
                Ok(DeleteOutcome::Deleted) => log_debug!(self.logger, "deleted '{}'", key),
                Ok(DeleteOutcome::NotFound) => log_debug!(self.logger, "'{}' already absent", key),
                Err(e) => {
                    log_warn!(self.logger, "failed to delete '{}': {}", key, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e.into()),
            None => {
                log_info!(self.logger, "deleted credentials for account '{}'", account);
                Ok(())
            }
        }
    }

    /// Best effort: the write error is what the caller sees
    fn restore(&self, service: &str, key: &str, previous: Option<&str>) {
        let result = match previous {
            Some(value) => self.store.set(service, key, value),
            None => self.store.delete(service, key).map(|_| ()),
        };
        if let Err(e) = result {
            log_warn!(self.logger, "could not restore '{}' after failed store: {}", key, e);
        }
    }

    /// Both override variables, or nothing
    fn env_credential(&self) -> Option<Credential> {
        let username = self.env.var(&self.config.user_env_var)?;
        let password = self.env.var(&self.config.pass_env_var)?;
        Some(Credential::new(username, password))
    }

    fn stored_credential(&self, account: &str) -> ResolverResult<Option<Credential>> {
        let (user_key, pass_key) = key_pair(account);
        let service = &self.config.service_name;

        let username = self.store.get(service, &user_key)?.filter(|u| !u.is_empty());
        let password = self.store.get(service, &pass_key)?.filter(|p| !p.is_empty());

        Ok(match (username, password) {
            (Some(username), Some(password)) => Some(Credential::new(username, password)),
            _ => None,
        })
    }

    fn missing(&self, account: &str) -> ResolverError {
        ResolverError::MissingCredentials {
            service: self.config.service_name.clone(),
            account: account.to_string(),
            user_env_var: self.config.user_env_var.clone(),
            pass_env_var: self.config.pass_env_var.clone(),
        }
    }
}
