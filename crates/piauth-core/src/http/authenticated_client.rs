//! Pre-authenticated reqwest client

use std::fmt;

use reqwest::{Client, IntoUrl, Method, RequestBuilder};

use crate::resolver::{Credential, CredentialResolver, ResolverResult};

/// A `reqwest::Client` that presents basic auth on every request
///
/// The credential is fixed at construction; build a new client after the
/// stored credential changes.
///
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use piauth_core::resolver::CredentialResolver;
///
/// let client = CredentialResolver::from_env().authenticated_client("prod")?;
/// let response = client.get("https://pi.example.com/piwebapi").send().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AuthenticatedClient {
    client: Client,
    credential: Credential,
}

impl AuthenticatedClient {
    pub fn new(credential: Credential) -> Self {
        Self::with_client(Client::new(), credential)
    }

    /// Use a preconfigured client (timeouts, proxies, TLS roots, ...)
    pub fn with_client(client: Client, credential: Credential) -> Self {
        Self { client, credential }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The underlying client, without auth applied
    pub fn inner(&self) -> &Client {
        &self.client
    }

    pub fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&self.credential.username, Some(&self.credential.password))
    }

    pub fn get<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    pub fn post<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    pub fn put<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    pub fn delete<U: IntoUrl>(&self, url: U) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }
}

impl fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

impl CredentialResolver {
    /// Resolve `account` without prompting and wrap it in a client
    pub fn authenticated_client(&self, account: &str) -> ResolverResult<AuthenticatedClient> {
        self.resolve(account, false).map(AuthenticatedClient::new)
    }
}
