//! Shared fixtures for crosswalk service tests

use crate::config::{DataPaths, StateFips};
use crate::crosswalks::CrosswalkService;
use std::fs;
use std::path::Path;
use tempfile::TempDir;


/// Create a service rooted at a temp directory with the standard FIPS table
pub fn test_service(temp_dir: &TempDir) -> CrosswalkService {
    CrosswalkService::new(DataPaths::new(temp_dir.path()), StateFips::default())
}

/// Write a crosswalk fixture file under `<temp>/data/crosswalks`
pub fn write_crosswalk(temp_dir: &TempDir, file_name: &str, contents: &str) -> std::path::PathBuf {
    let dir = temp_dir.path().join("data").join("crosswalks");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(file_name);
    fs::write(&path, contents).unwrap();
    path
}

/// Assert a fixture path sits under the expected crosswalks directory
pub fn assert_under_crosswalks(path: &Path, temp_dir: &TempDir) {
    assert!(path.starts_with(temp_dir.path().join("data").join("crosswalks")));
}
