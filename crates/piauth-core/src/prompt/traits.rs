//! Input provider traits

use std::io;
use std::sync::Arc;

/// Source of visible (echoed) input, such as a username
pub trait InputProvider: Send + Sync {
    /// Show `prompt` and read one line, without the trailing newline
    fn read_line(&self, prompt: &str) -> io::Result<String>;
}

/// Source of masked input, such as a password
pub trait SecretInputProvider: Send + Sync {
    /// Show `prompt` and read one line without echoing it
    fn read_secret(&self, prompt: &str) -> io::Result<String>;
}

pub type SharedInputProvider = Arc<dyn InputProvider>;

pub type SharedSecretInputProvider = Arc<dyn SecretInputProvider>;
