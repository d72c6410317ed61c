//! Interactive input acquisition
//!
//! Credential bootstrap asks for a username (echoed) and a password
//! (masked). Both capabilities are traits so resolution can run against a
//! real terminal or against scripted answers.

mod traits;
mod terminal;
mod scripted;

pub use traits::{InputProvider, SecretInputProvider, SharedInputProvider, SharedSecretInputProvider};
pub use terminal::TerminalPrompter;
pub use scripted::ScriptedPrompter;
