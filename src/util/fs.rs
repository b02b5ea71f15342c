//! File system helpers for pipeline steps.
//!
//! All operations here are idempotent: creating a directory that exists
//! and removing a path that is already gone both succeed.

use crate::error::Result;
use std::io;
use std::path::Path;
use tokio::fs;

/// Creates the directory and any missing parents.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    Ok(fs::create_dir_all(path).await?)
}

/// Removes a regular file if it exists.
pub async fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Removes a path of any kind: files and symlinks are unlinked,
/// directories are deleted recursively.
pub async fn remove_path(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        Ok(fs::remove_dir_all(path).await?)
    } else {
        Ok(fs::remove_file(path).await?)
    }
}
