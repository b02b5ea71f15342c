//! Pipeline configuration.
//!
//! Configuration is a flat `key = value` text file, loaded once per run
//! and immutable afterwards. The loader applies a fixed defaults table
//! for optional keys and refuses to proceed when any required key is
//! absent or empty.

mod loader;
mod settings;

pub use loader::{DEFAULT_CONFIG_NAME, load, parse};
pub use settings::Config;
