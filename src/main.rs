//! dmgship - macOS application packaging pipeline.
//!
//! This binary runs the configured packaging steps (cleanup, DMG
//! creation, notarization, stapling, appcast generation) in order,
//! halting on the first failure.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match dmgship::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
