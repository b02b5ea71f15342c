//! Typed pipeline configuration.

use std::path::PathBuf;

/// Immutable configuration for one pipeline run.
///
/// Constructed once by the loader and passed by reference to every
/// action; nothing mutates it afterwards. Optional tool inputs that the
/// actions parse themselves (the DMG window size, the icon size) are
/// kept as the raw configured strings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Product name; also names the `.app` entry inside the image.
    pub project_name: String,

    /// Directory containing the packaged application to ship.
    pub source_dir: PathBuf,

    /// Directory receiving the built image and appcast.
    pub output_dir: PathBuf,

    /// Ordered step identifiers, duplicates retained.
    pub steps: Vec<String>,

    /// Volume name shown when the image mounts.
    ///
    /// Default: `project_name`.
    pub volume_name: String,

    /// Image file name.
    ///
    /// Default: `<project_name>.dmg`.
    pub dmg_name: String,

    /// Raw `width,height` DMG window size; each component falls back
    /// independently when malformed.
    ///
    /// Default: `600,400`.
    pub window_size: String,

    /// Finder icon size inside the image window.
    ///
    /// Default: `128`.
    pub icon_size: String,

    /// Background image for the DMG window; only passed to the image
    /// builder when the path exists on disk.
    pub background_image: Option<PathBuf>,

    /// Code-signing identity, e.g. "Developer ID Application: ... (TEAMID)".
    pub signing_identity: Option<String>,

    /// Apple Developer team identifier for notarization.
    pub team_id: Option<String>,

    /// Keychain service holding the Apple ID.
    ///
    /// Default: `dmgship-apple-id`.
    pub apple_id_service: String,

    /// Keychain service holding the app-specific password.
    ///
    /// Default: `dmgship-app-password`.
    pub app_password_service: String,

    /// Directory containing the Sparkle tools; when unset the generator
    /// is probed from conventional install locations.
    pub sparkle_bin: Option<PathBuf>,
}

impl Config {
    /// Full path of the disk image this run builds and ships.
    pub fn image_path(&self) -> PathBuf {
        self.output_dir.join(&self.dmg_name)
    }
}
