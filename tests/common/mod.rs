//! Common test utilities for Council integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A target project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty project directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// A bundled-resource directory for integration tests, standing in for the
/// payload shipped next to the installed binary
#[allow(dead_code)]
pub struct ResourceFixture {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the resource root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl ResourceFixture {
    /// Create an empty resource root (no skills, no config)
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a resource root with a small realistic skill tree and config
    pub fn with_default_payload() -> Self {
        let fixture = Self::empty();
        fixture.write_skill_file("agent-council/SKILL.md", "# Agent Council\n");
        fixture.write_skill_file(
            "agent-council/scripts/council.sh",
            "#!/bin/sh\necho council\n",
        );
        fixture.write_config("custom: false\n");
        fixture
    }

    /// Write a file under the skills tree
    pub fn write_skill_file(&self, path: &str, content: &str) {
        let file_path = self.path.join("skills").join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write skill file");
    }

    /// Write the default config at the resource root
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.path.join("council.config.yaml"), content)
            .expect("Failed to write config");
    }
}
