//! Basic file operations for skill installation
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir)
//! - Byte-for-byte file copy with shell-script permission restoration
//! - Pre-counting files for progress display

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{CouncilError, Result};

pub(crate) fn file_read_error(path: &Path, e: std::io::Error) -> CouncilError {
    CouncilError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub(crate) fn file_write_error(path: &Path, e: std::io::Error) -> CouncilError {
    CouncilError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub(crate) fn dir_create_error(path: &Path, e: std::io::Error) -> CouncilError {
    CouncilError::DirCreateFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| dir_create_error(parent, e))?;
    }
    Ok(())
}

/// Copy a single file byte-for-byte, overwriting any existing target.
///
/// Shell scripts (`.sh`) are marked `rwxr-xr-x` after the copy, regardless of
/// the source file's mode.
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target).map_err(|e| file_write_error(target, e))?;

    if source.extension().is_some_and(|ext| ext == "sh") {
        mark_executable(target)?;
    }

    Ok(())
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| file_write_error(path, e))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Count regular files under a path
pub fn count_files(root: &Path) -> u64 {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count() as u64
}
