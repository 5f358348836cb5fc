//! Skill installation logic
//!
//! This module handles:
//! - Recreating the bundled skill tree at a destination (copy_tree)
//! - Placing the default config without clobbering user edits (install_config)
//! - Layout selection between flat and nested destinations
//!
//! All operations are synchronous and run to completion or abort on the
//! first I/O failure; there is no rollback of partially-copied entries.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::progress::ProgressDisplay;

pub mod file_ops;
pub mod layout;

pub use layout::InstallLayout;

use file_ops::{copy_file, dir_create_error, file_read_error, file_write_error};

/// Outcome of a config installation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigInstall {
    /// Default config was copied to the destination
    Installed,
    /// Destination config already exists and was left untouched
    AlreadyPresent,
    /// No default config is shipped with the resources
    NoDefault,
}

/// File installer for a target project
pub struct Installer<'a> {
    /// Whether to perform a dry run (skip actual file operations)
    dry_run: bool,

    /// Optional per-file progress display
    progress: Option<&'a ProgressDisplay>,
}

impl<'a> Installer<'a> {
    /// Create a new installer
    pub fn new(dry_run: bool, progress: Option<&'a ProgressDisplay>) -> Self {
        Self { dry_run, progress }
    }

    /// Recreate `source` at `destination`.
    ///
    /// Directories are created as needed (pre-existing ones are not an
    /// error), file contents are copied byte-for-byte with existing targets
    /// overwritten, and `.sh` files are marked executable. Children are
    /// visited in filesystem enumeration order. Returns the number of files
    /// copied.
    pub fn copy_tree(&self, source: &Path, destination: &Path) -> Result<u64> {
        let metadata = fs::metadata(source).map_err(|e| file_read_error(source, e))?;

        if metadata.is_dir() {
            if !self.dry_run {
                fs::create_dir_all(destination).map_err(|e| dir_create_error(destination, e))?;
            }

            let mut copied = 0;
            let entries = fs::read_dir(source).map_err(|e| file_read_error(source, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| file_read_error(source, e))?;
                copied += self.copy_tree(&entry.path(), &destination.join(entry.file_name()))?;
            }
            Ok(copied)
        } else {
            if !self.dry_run {
                copy_file(source, destination)?;
            }
            if let Some(progress) = self.progress {
                progress.update_file(&destination.display().to_string());
            }
            Ok(1)
        }
    }

    /// Place the default config at `destination` unless one already exists.
    ///
    /// A missing source is not an error, and an existing destination is
    /// never overwritten.
    pub fn install_config(&self, source: &Path, destination: &Path) -> Result<ConfigInstall> {
        if !source.exists() {
            return Ok(ConfigInstall::NoDefault);
        }
        if destination.exists() {
            return Ok(ConfigInstall::AlreadyPresent);
        }

        if !self.dry_run {
            file_ops::ensure_parent_dir(destination)?;
            fs::copy(source, destination).map_err(|e| file_write_error(destination, e))?;
        }

        Ok(ConfigInstall::Installed)
    }
}
