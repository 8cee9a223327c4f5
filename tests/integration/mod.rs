// Integration test utilities and common code
// WHY: Centralized noun-config fixtures avoid duplication across integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding noun config files
pub struct ConfigFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl ConfigFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a config file with the given JSON body
    pub fn create_config<P: AsRef<Path>>(&self, relative_path: P, json: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, json).expect("Failed to write config file");
        file_path
    }
}
