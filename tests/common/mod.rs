//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a task.yaml file at its root
pub fn create_test_document(content: &str) -> (TempDir, PathBuf) {
    create_nested_document(content, "task.yaml")
}

/// Create a document at `relative` (e.g. `proj/pkg/task.yaml`) inside a temporary directory
pub fn create_nested_document(content: &str, relative: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let document_path = temp_dir.path().join(relative);
    if let Some(parent) = document_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&document_path, content).unwrap();
    (temp_dir, document_path)
}
