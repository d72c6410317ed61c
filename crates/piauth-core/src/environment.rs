//! Environment variable access
//!
//! The resolver never touches `std::env` directly; it reads through an
//! `Environment` so resolution can be exercised with injected variables.

use std::collections::HashMap;
use std::env;

/// Read-only view of environment variables
///
/// Empty values are reported as unset. Every caller in this crate treats
/// `FOO=` the same as an absent `FOO`.
pub trait Environment: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// A fixed set of variables, for tests and embedding
///
/// # Example
///
/// ```
/// use piauth_core::environment::{Environment, MemoryEnvironment};
///
/// let env = MemoryEnvironment::new().with_var("PI_USER", "alice");
/// assert_eq!(env.var("PI_USER"), Some("alice".to_string()));
/// assert_eq!(env.var("PI_PASS"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvironment {
    vars: HashMap<String, String>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl Environment for MemoryEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_environment() {
        temp_env::with_vars(
            [("PIAUTH_TEST_SET", Some("value")), ("PIAUTH_TEST_EMPTY", Some(""))],
            || {
                let env = ProcessEnvironment::new();
                assert_eq!(env.var("PIAUTH_TEST_SET"), Some("value".to_string()));
                assert_eq!(env.var("PIAUTH_TEST_EMPTY"), None);
                assert_eq!(env.var("PIAUTH_TEST_NONEXISTENT_XYZ"), None);
            },
        );
    }

    #[test]
    fn test_memory_environment_empty_is_unset() {
        let env = MemoryEnvironment::new()
            .with_var("SET", "value")
            .with_var("EMPTY", "");

        assert_eq!(env.var("SET"), Some("value".to_string()));
        assert_eq!(env.var("EMPTY"), None);
        assert_eq!(env.var("MISSING"), None);
    }
}
