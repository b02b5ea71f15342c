//! Sparkle appcast generation.
//!
//! Locates the Sparkle `generate_appcast` tool and runs it against the
//! output directory so the freshly notarized image lands in the update
//! feed.

use crate::config::Config;
use crate::error::{Result, ShipError};
use crate::exec::{CommandRunner, run_checked};
use std::path::PathBuf;

/// Conventional Sparkle install locations probed when `sparkle_bin` is
/// not configured and the tool is not on PATH.
const CONVENTIONAL_DIRS: &[&str] = &["/opt/homebrew/bin", "/usr/local/bin"];

const GENERATOR: &str = "generate_appcast";

pub async fn run(config: &Config, runner: &dyn CommandRunner) -> Result<()> {
    let generator = resolve_generator(config)?;

    log::info!("Generating appcast with {}", generator.display());
    run_checked(
        runner,
        &generator.to_string_lossy(),
        &[config.output_dir.display().to_string()],
    )
    .await?;
    log::info!("✓ Appcast updated in {}", config.output_dir.display());

    Ok(())
}

/// Resolves the generator binary: the configured directory wins, then a
/// PATH lookup, then the conventional install locations.
fn resolve_generator(config: &Config) -> Result<PathBuf> {
    if let Some(dir) = &config.sparkle_bin {
        let candidate = dir.join(GENERATOR);
        if candidate.exists() {
            return Ok(candidate);
        }
        log::warn!("{} has no {GENERATOR}", dir.display());
        return Err(ShipError::FeedGeneratorNotFound);
    }

    if let Ok(found) = which::which(GENERATOR) {
        log::debug!("Found {GENERATOR} on PATH at {}", found.display());
        return Ok(found);
    }

    for dir in CONVENTIONAL_DIRS {
        let candidate = PathBuf::from(dir).join(GENERATOR);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let candidate = PathBuf::from(home).join("Library/Sparkle/bin").join(GENERATOR);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(ShipError::FeedGeneratorNotFound)
}
