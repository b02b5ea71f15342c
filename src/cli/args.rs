//! Command line argument parsing.

use crate::config::DEFAULT_CONFIG_NAME;
use clap::Parser;
use std::path::PathBuf;

/// Configurable macOS application packaging pipeline
#[derive(Parser, Debug)]
#[command(
    name = "dmgship",
    version,
    about = "Configurable macOS application packaging pipeline",
    long_about = "Runs the configured packaging steps in order: output cleanup, DMG creation,
code signing + notarization, ticket stapling, and Sparkle appcast generation.

Each step wraps one external tool (create-dmg, codesign, notarytool, stapler,
generate_appcast); the first failing tool aborts the whole run.

Usage:
  dmgship                      # dmgship.conf next to the executable
  dmgship release.conf         # explicit configuration file
  dmgship -y release.conf      # skip all confirmation prompts

Exit code 0 = every configured step completed."
)]
pub struct Args {
    /// Path to the pipeline configuration file
    ///
    /// Defaults to `dmgship.conf` next to the dmgship executable.
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long = "non-interactive")]
    pub non_interactive: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The configuration file this run should load: the positional
    /// argument when given, else the template next to the executable.
    pub fn config_path(&self) -> std::io::Result<PathBuf> {
        if let Some(path) = &self.config {
            return Ok(path.clone());
        }

        let exe = std::env::current_exe()?;
        Ok(match exe.parent() {
            Some(dir) => dir.join(DEFAULT_CONFIG_NAME),
            None => PathBuf::from(DEFAULT_CONFIG_NAME),
        })
    }
}
