//! Scripted prompts for tests and unattended setup

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use super::traits::{InputProvider, SecretInputProvider};

/// Answers prompts from pre-queued responses
///
/// Visible and masked prompts have separate queues. Reading from an empty
/// queue fails with `UnexpectedEof`, the same error a closed stdin gives.
///
/// # Example
///
/// ```
/// use piauth_core::prompt::{InputProvider, SecretInputProvider, ScriptedPrompter};
///
/// let prompter = ScriptedPrompter::new(["alice"], ["s3cr3t"]);
/// assert_eq!(prompter.read_line("User: ").unwrap(), "alice");
/// assert_eq!(prompter.read_secret("Pass: ").unwrap(), "s3cr3t");
/// assert_eq!(prompter.prompts(), vec!["User: ", "Pass: "]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    lines: Mutex<VecDeque<String>>,
    secrets: Mutex<VecDeque<String>>,
    shown: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<L, S>(lines: L, secrets: S) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
            secrets: Mutex::new(secrets.into_iter().map(Into::into).collect()),
            shown: Mutex::new(Vec::new()),
        }
    }

    /// A prompter with nothing queued; any prompt fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every prompt shown so far, in order
    pub fn prompts(&self) -> Vec<String> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn answer(&self, queue: &Mutex<VecDeque<String>>, prompt: &str) -> io::Result<String> {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(prompt.to_string());
        }
        let mut queue = queue
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "prompt queue lock poisoned"))?;
        queue.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no scripted answer for prompt '{}'", prompt),
            )
        })
    }
}

impl InputProvider for ScriptedPrompter {
    fn read_line(&self, prompt: &str) -> io::Result<String> {
        self.answer(&self.lines, prompt)
    }
}

impl SecretInputProvider for ScriptedPrompter {
    fn read_secret(&self, prompt: &str) -> io::Result<String> {
        self.answer(&self.secrets, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queues_are_independent() {
        let prompter = ScriptedPrompter::new(["first", "second"], ["secret"]);

        assert_eq!(prompter.read_secret("p").unwrap(), "secret");
        assert_eq!(prompter.read_line("u").unwrap(), "first");
        assert_eq!(prompter.read_line("u").unwrap(), "second");
    }

    #[test]
    fn test_exhausted_queue() {
        let prompter = ScriptedPrompter::empty();

        let err = prompter.read_line("PI Username: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(err.to_string().contains("PI Username: "));
        assert_eq!(prompter.prompts(), vec!["PI Username: "]);
    }
}
