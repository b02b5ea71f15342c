//! Disk image creation via create-dmg.
//!
//! Translates the configured volume name, window geometry, and icon
//! layout into create-dmg's argument contract, deletes any stale image
//! of the same name first, and logs the SHA-256 of the result.

use crate::config::Config;
use crate::error::Result;
use crate::exec::{CommandRunner, run_checked};
use crate::util::{checksum, fs};

/// Window size used when the configured `width,height` value is absent
/// or malformed; each component falls back independently.
pub const DEFAULT_WINDOW_WIDTH: u32 = 600;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 400;

/// Fixed Finder window position for the mounted image.
const WINDOW_POS: (u32, u32) = (200, 120);

/// Fixed item placements: the app icon on the left, the Applications
/// drop link on the right, both on the same row.
const APP_ICON_POS: (u32, u32) = (180, 170);
const DROP_LINK_POS: (u32, u32) = (480, 170);

/// Builds the disk image in the output directory.
pub async fn run(config: &Config, runner: &dyn CommandRunner) -> Result<()> {
    let image_path = config.image_path();

    // create-dmg refuses to overwrite an existing image
    fs::remove_file_if_exists(&image_path).await?;

    let (width, height) = parse_window_size(&config.window_size);
    let app_entry = format!("{}.app", config.project_name);

    let mut args: Vec<String> = vec![
        "--volname".into(),
        config.volume_name.clone(),
        "--window-pos".into(),
        WINDOW_POS.0.to_string(),
        WINDOW_POS.1.to_string(),
        "--window-size".into(),
        width.to_string(),
        height.to_string(),
        "--icon-size".into(),
        config.icon_size.clone(),
        "--icon".into(),
        app_entry.clone(),
        APP_ICON_POS.0.to_string(),
        APP_ICON_POS.1.to_string(),
        "--hide-extension".into(),
        app_entry,
        "--app-drop-link".into(),
        DROP_LINK_POS.0.to_string(),
        DROP_LINK_POS.1.to_string(),
    ];

    if let Some(background) = &config.background_image {
        if background.exists() {
            args.push("--background".into());
            args.push(background.display().to_string());
        } else {
            log::warn!(
                "Background image {} not found, building without it",
                background.display()
            );
        }
    }

    args.push(image_path.display().to_string());
    args.push(config.source_dir.display().to_string());

    log::info!("Creating {} from {}", config.dmg_name, config.source_dir.display());
    run_checked(runner, "create-dmg", &args).await?;

    if image_path.is_file() {
        match checksum::sha256_file(&image_path).await {
            Ok(digest) => log::info!("✓ Created {} (sha256: {digest})", image_path.display()),
            Err(e) => log::warn!("Created {} but could not checksum it: {e}", image_path.display()),
        }
    } else {
        log::info!("✓ create-dmg finished");
    }

    Ok(())
}

/// Parses a `width,height` value, each component independently falling
/// back to its default when missing or malformed.
pub fn parse_window_size(raw: &str) -> (u32, u32) {
    let mut parts = raw.splitn(2, ',');
    let width = parts
        .next()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_WINDOW_WIDTH);
    let height = parts
        .next()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_WINDOW_HEIGHT);
    (width, height)
}
