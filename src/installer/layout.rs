//! Installation layout selection
//!
//! The installer supports two destination layouts: `Flat` places the skill
//! tree and config directly under the target project root; `Nested` places
//! them under a tool-specific directory (`.claude` for the shipped binary)
//! and keeps the config next to the installed skills instead of at the root.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::resources::{CONFIG_FILE, SKILLS_DIR};

/// Where the installed files land relative to the target project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallLayout {
    /// Install directly under the target root
    Flat,
    /// Install under `<target>/<dir>/`
    Nested { dir: String },
}

impl InstallLayout {
    /// Nested layout under the given directory name
    pub fn nested(dir: impl Into<String>) -> Self {
        InstallLayout::Nested { dir: dir.into() }
    }

    /// Destination root for this layout
    pub fn root(&self, target: &Path) -> PathBuf {
        match self {
            InstallLayout::Flat => target.to_path_buf(),
            InstallLayout::Nested { dir } => target.join(dir),
        }
    }

    /// Where the default config is placed, given the resolved destination root.
    ///
    /// Flat installs keep the config at the project root; nested installs
    /// keep it inside the installed skills directory.
    pub fn config_destination(&self, root: &Path) -> PathBuf {
        match self {
            InstallLayout::Flat => root.join(CONFIG_FILE),
            InstallLayout::Nested { .. } => root.join(SKILLS_DIR).join(CONFIG_FILE),
        }
    }
}

impl fmt::Display for InstallLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallLayout::Flat => write!(f, "flat"),
            InstallLayout::Nested { dir } => write!(f, "nested ({})", dir),
        }
    }
}
