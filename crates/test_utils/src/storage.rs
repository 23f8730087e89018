//! Storage Test Utilities
//!
//! Each test gets its own temporary directory, removed on drop. The data file
//! path points into a nested `data/` directory that does not exist yet, so
//! first-use initialization is exercised too.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A throwaway directory holding one claim data file
pub struct TempDataDir {
    dir: TempDir,
}

impl TempDataDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Path of the claim file (not created)
    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("data").join("dutydrawback_claims.json")
    }

    /// Writes raw content to the data file, creating its directory
    pub fn write_raw(&self, content: &str) -> PathBuf {
        let path = self.data_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create data dir");
        }
        fs::write(&path, content).expect("failed to write data file");
        path
    }

    /// Reads the data file back as text
    pub fn read_raw(&self) -> String {
        fs::read_to_string(self.data_file()).expect("failed to read data file")
    }
}

impl Default for TempDataDir {
    fn default() -> Self {
        Self::new()
    }
}
