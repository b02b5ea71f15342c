//! Configuration file loader.
//!
//! Parsing rules:
//! - lines are `key = value` pairs, whitespace around both sides trimmed
//! - surrounding single or double quotes on the value are stripped
//! - lines that do not match (comments included) are ignored
//! - the first occurrence of a key wins; later duplicates are ignored

use crate::config::Config;
use crate::error::{Result, ShipError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Config file name resolved next to the executable when no path is
/// given on the command line.
pub const DEFAULT_CONFIG_NAME: &str = "dmgship.conf";

const DEFAULT_WINDOW_SIZE: &str = "600,400";
const DEFAULT_ICON_SIZE: &str = "128";
const DEFAULT_APPLE_ID_SERVICE: &str = "dmgship-apple-id";
const DEFAULT_APP_PASSWORD_SERVICE: &str = "dmgship-app-password";

/// Required keys, in the order missing ones are reported.
const REQUIRED_KEYS: &[&str] = &["project_name", "source_dir", "output_dir", "steps"];

/// Loads and parses the configuration file at `path`.
pub async fn load(path: &Path) -> Result<Config> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|_| ShipError::ConfigMissing {
            path: path.to_path_buf(),
        })?;

    log::debug!("Loaded configuration from {}", path.display());
    parse(&text)
}

/// Parses configuration text into a validated [`Config`].
pub fn parse(text: &str) -> Result<Config> {
    let pairs = parse_pairs(text);

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .filter(|key| pairs.get(**key).is_none_or(|v| v.is_empty()))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ShipError::ConfigInvalid {
            message: format!("missing required key(s): {}", missing.join(", ")),
        });
    }

    // An optional key configured with an empty value behaves like an
    // absent key.
    let get = |key: &str| pairs.get(key).filter(|v| !v.is_empty()).cloned();
    let get_path = |key: &str| pairs.get(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    let project_name = pairs["project_name"].clone();
    let volume_name = get("volume_name").unwrap_or_else(|| project_name.clone());
    let dmg_name = get("dmg_name").unwrap_or_else(|| format!("{project_name}.dmg"));

    Ok(Config {
        source_dir: PathBuf::from(&pairs["source_dir"]),
        output_dir: PathBuf::from(&pairs["output_dir"]),
        steps: split_steps(&pairs["steps"]),
        volume_name,
        dmg_name,
        window_size: get("window_size").unwrap_or_else(|| DEFAULT_WINDOW_SIZE.into()),
        icon_size: get("icon_size").unwrap_or_else(|| DEFAULT_ICON_SIZE.into()),
        background_image: get_path("background_image"),
        signing_identity: get("signing_identity"),
        team_id: get("team_id"),
        apple_id_service: get("apple_id_service").unwrap_or_else(|| DEFAULT_APPLE_ID_SERVICE.into()),
        app_password_service: get("app_password_service")
            .unwrap_or_else(|| DEFAULT_APP_PASSWORD_SERVICE.into()),
        sparkle_bin: get_path("sparkle_bin"),
        project_name,
    })
}

/// Extracts `key = value` pairs, first occurrence winning.
fn parse_pairs(text: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();

    for line in text.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.starts_with('#') || key.contains(char::is_whitespace) {
            continue;
        }
        if pairs.contains_key(key) {
            continue;
        }
        pairs.insert(key.to_string(), strip_quotes(value.trim()).to_string());
    }

    pairs
}

/// Strips one layer of matching surrounding quotes.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Splits the delimited step list, trimming each entry and dropping
/// empties from stray commas. Order preserved, duplicates retained.
fn split_steps(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
