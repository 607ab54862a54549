//! Shared testing utilities for cmcron CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated config directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty config directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let config_dir = root.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create test config directory");

        Self { root, config_dir }
    }

    /// Path to the config directory the CLI is pointed at.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Write a config file into the config directory.
    pub fn write_config_file(&self, name: &str, content: &str) {
        fs::write(self.config_dir.join(name), content).expect("Failed to write config file");
    }

    /// Write raw bytes into the config directory.
    pub fn write_config_bytes(&self, name: &str, content: &[u8]) {
        fs::write(self.config_dir.join(name), content).expect("Failed to write config file");
    }

    /// Build a command invoking the compiled `cmcron` binary.
    pub fn cli(&self) -> Command {
        Command::cargo_bin("cmcron").expect("Failed to locate cmcron binary")
    }

    /// Run `cmcron generate` against the config directory with a mount path.
    pub fn generate(&self, mount_path: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args([
            "generate",
            "--dir",
            &self.config_dir.display().to_string(),
            "--mount-path",
            mount_path,
        ]);
        cmd
    }

    /// Parse a generated manifest from the config directory.
    pub fn read_manifest(&self, file_name: &str) -> serde_yaml::Value {
        let content = fs::read_to_string(self.config_dir.join(file_name))
            .expect("Failed to read generated manifest");
        serde_yaml::from_str(&content).expect("Generated manifest is not valid YAML")
    }

    /// Whether a generated manifest exists in the config directory.
    pub fn manifest_exists(&self, file_name: &str) -> bool {
        self.config_dir.join(file_name).exists()
    }
}
