//! Error types for pipeline operations.
//!
//! Every error here is fatal to the whole run: there is no retry policy,
//! no partial-success mode, and no rollback of steps that already ran.
//! Side effects of completed steps (deleted files, created images,
//! signed artifacts) stay in place when a later step fails.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ShipError>;

/// Main error type for all pipeline operations
#[derive(Error, Debug)]
pub enum ShipError {
    /// Configuration file missing or unreadable.
    #[error("Configuration file not found: {path}")]
    ConfigMissing { path: PathBuf },

    /// Required configuration key absent or empty.
    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    /// Step identifier with no entry in the alias table.
    #[error("Unknown step '{name}'")]
    UnknownStep { name: String },

    /// The user answered a destructive-step prompt with anything other
    /// than an affirmative.
    #[error("Aborted: confirmation declined during '{step}'")]
    ConfirmationDeclined { step: String },

    /// A secret or identifier required for notarization did not resolve.
    #[error("Missing credential: {what}")]
    CredentialMissing { what: String },

    /// A wrapped external tool exited non-zero (or could not be
    /// launched). Carries the tool's own exit code where available.
    #[error("{program} failed (exit code {code:?}): {stderr}")]
    ExternalTool {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// No generate_appcast installation could be resolved.
    #[error("generate_appcast not found: set sparkle_bin or install the Sparkle tools")]
    FeedGeneratorNotFound,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors from anyhow
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
