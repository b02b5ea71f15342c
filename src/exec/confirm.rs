//! Interactive confirmation.
//!
//! Destructive steps ask before acting. The prompt is modeled as a
//! capability so tests can simulate both accept and decline without a
//! real terminal, and so non-interactive runs never block on stdin.

use std::io::{self, BufRead, Write};

/// Capability to ask the operator a yes/no question.
pub trait Confirmer: Send + Sync {
    /// Returns `Ok(true)` only on an affirmative answer. Anything else
    /// (empty line, "n", garbage) is a decline.
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

/// Production confirmer reading one line from stdin.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        print!("{prompt} [y/N] ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;

        let answer = line.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

/// Confirmer for non-interactive runs: answers yes without rendering a
/// prompt.
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _prompt: &str) -> io::Result<bool> {
        Ok(true)
    }
}
