//! Credential resolution from the macOS keychain.
//!
//! Secrets are looked up by service name via `security
//! find-generic-password`. An item that is not in the keychain resolves
//! to `None` rather than an error: failure is deferred to the action
//! that actually needs the secret, which can name what is missing.

use crate::error::Result;
use crate::exec::{CommandRunner, args};
use async_trait::async_trait;
use std::sync::Arc;

/// Capability to resolve a named secret from the platform credential
/// store.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up the secret stored under `service`. `Ok(None)` means the
    /// item is absent or empty.
    async fn lookup(&self, service: &str) -> Result<Option<String>>;
}

/// Production store shelling out to security(1).
pub struct KeychainStore {
    runner: Arc<dyn CommandRunner>,
}

impl KeychainStore {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl CredentialStore for KeychainStore {
    async fn lookup(&self, service: &str) -> Result<Option<String>> {
        let output = self
            .runner
            .run(
                "security",
                &args(["find-generic-password", "-s", service, "-w"]),
            )
            .await?;

        // security exits non-zero when the item does not exist
        if !output.success() {
            log::debug!("No keychain item for service '{service}'");
            return Ok(None);
        }

        let secret = output.stdout.trim().to_string();
        Ok(if secret.is_empty() { None } else { Some(secret) })
    }
}
