//! Configurable macOS application packaging pipeline.
//!
//! dmgship sequences the external tools that turn a built application
//! into a shippable, notarized disk image with an up-to-date Sparkle
//! feed:
//!
//! - cleanup of the output directory (preserving the `.app` bundle)
//! - DMG creation via create-dmg
//! - code signing and notarization via codesign + notarytool
//! - ticket stapling and validation via stapler
//! - appcast generation via Sparkle's generate_appcast
//!
//! The steps to run, and their order, come from a flat `key = value`
//! configuration file. It can be used both as a CLI tool and as a
//! library dependency.

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod pipeline;
pub mod util;

// Re-export commonly used types
pub use error::{Result, ShipError};
