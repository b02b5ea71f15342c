//! External process execution.
//!
//! Every external tool the pipeline touches (create-dmg, codesign,
//! notarytool, stapler, generate_appcast, security) goes through the
//! [`CommandRunner`] capability so the test suite can substitute fakes
//! that record invocations and return controlled exit results. The
//! pipeline runs exactly one process at a time and blocks until it
//! exits; there is no retry policy anywhere.

mod confirm;
mod keychain;

pub use confirm::{AssumeYes, Confirmer, TerminalConfirmer};
pub use keychain::{CredentialStore, KeychainStore};

use crate::error::{Result, ShipError};
use async_trait::async_trait;

/// Captured result of one external tool invocation.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    /// Process exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// Whether the process exited zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability to run an external tool and observe its exit result.
///
/// Implementations must not interpret exit codes; callers decide whether
/// a non-zero exit is fatal (for pipeline steps it always is, via
/// [`run_checked`]) or meaningful (keychain lookups treat it as absence).
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> Result<ExecOutput>;
}

/// Production runner backed by `tokio::process`.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<ExecOutput> {
        log::debug!("Running {} {}", program, args.join(" "));

        let output = tokio::process::Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| ShipError::ExternalTool {
                program: program.to_string(),
                code: None,
                stderr: format!("failed to launch: {e}"),
            })?;

        Ok(ExecOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs `program` and maps any non-zero exit to [`ShipError::ExternalTool`],
/// carrying the tool's own exit code and stderr.
pub async fn run_checked(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[String],
) -> Result<ExecOutput> {
    let output = runner.run(program, args).await?;
    if !output.success() {
        return Err(ShipError::ExternalTool {
            program: program.to_string(),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(output)
}

/// Convenience for building owned argument vectors from string slices.
pub fn args<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
