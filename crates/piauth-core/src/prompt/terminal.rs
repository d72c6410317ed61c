//! Interactive terminal prompts

use std::io;

use console::Term;

use super::traits::{InputProvider, SecretInputProvider};

/// Prompts on the controlling terminal
///
/// Prompts and echo go to stderr so a host program's stdout stays clean.
/// Both reads block until the user presses enter; there is no timeout.
///
/// Without an attended terminal (cron, CI, stderr redirected) every read
/// fails with `NotConnected`. `console` would otherwise hand back an empty
/// line, which callers would persist as an empty credential.
#[derive(Debug, Clone)]
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn attended(&self, prompt: &str) -> io::Result<()> {
        require_terminal(self.term.is_term(), prompt)
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn require_terminal(is_term: bool, prompt: &str) -> io::Result<()> {
    if is_term {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotConnected,
            format!("cannot prompt for '{}': no terminal attached", prompt.trim()),
        ))
    }
}

impl InputProvider for TerminalPrompter {
    fn read_line(&self, prompt: &str) -> io::Result<String> {
        self.attended(prompt)?;
        self.term.write_str(prompt)?;
        self.term.read_line()
    }
}

impl SecretInputProvider for TerminalPrompter {
    fn read_secret(&self, prompt: &str) -> io::Result<String> {
        self.attended(prompt)?;
        self.term.write_str(prompt)?;
        self.term.read_secure_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_terminal() {
        assert!(require_terminal(true, "PI Username: ").is_ok());

        let err = require_terminal(false, "PI Username: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
        assert_eq!(err.to_string(), "cannot prompt for 'PI Username:': no terminal attached");
    }

    #[test]
    fn test_unattended_reads_fail() {
        let prompter = TerminalPrompter::new();
        if prompter.term.is_term() {
            // Interactive run: reading would block on the real terminal
            return;
        }

        let err = prompter.read_line("PI Username: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
        let err = prompter.read_secret("PI Password: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
    }
}
