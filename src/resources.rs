//! Locating the bundled resource tree
//!
//! The shipped skills and default config live next to the installed `council`
//! executable, not in the caller's working directory. The search walks a few
//! ancestors of the executable so both `target/debug/council` during
//! development and a packaged `bin/council` layout resolve to the same root.

use std::path::{Path, PathBuf};

use crate::error::{CouncilError, Result};

/// Directory name of the bundled skill tree
pub const SKILLS_DIR: &str = "skills";

/// File name of the bundled default configuration
pub const CONFIG_FILE: &str = "council.config.yaml";

/// Directory name used by the nested installation layout
pub const CLAUDE_DIR: &str = ".claude";

/// How many ancestors of the executable's directory are searched
const SEARCH_DEPTH: usize = 4;

/// Resolve the bundled resource root.
///
/// An explicit override (from `--resource-root` or `COUNCIL_RESOURCE_ROOT`)
/// must exist; otherwise the executable's ancestors are searched for a
/// directory shipping the payload.
pub fn locate(override_root: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = override_root {
        if root.is_dir() {
            return Ok(root.to_path_buf());
        }
        return Err(CouncilError::ResourcesNotFound {
            path: root.display().to_string(),
        });
    }

    let exe = std::env::current_exe().map_err(|e| CouncilError::IoError {
        message: format!("Failed to locate running executable: {}", e),
    })?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();

    locate_from(&exe_dir).ok_or_else(|| CouncilError::ResourcesNotFound {
        path: exe_dir.display().to_string(),
    })
}

/// Search `start` and its ancestors for a directory shipping the payload.
fn locate_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(SEARCH_DEPTH + 1)
        .find(|dir| dir.join(SKILLS_DIR).is_dir() || dir.join(CONFIG_FILE).is_file())
        .map(Path::to_path_buf)
}
