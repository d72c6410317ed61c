//! HTTP client integration
//!
//! Attaches a resolved credential as basic auth to outgoing requests.

mod authenticated_client;

pub use authenticated_client::AuthenticatedClient;
