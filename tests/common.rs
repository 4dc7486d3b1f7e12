//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out markdown sources in temporary directories
//! and reading generated pages back.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates temporary directory for a documentation tree.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_docs_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes file under root, creating parent directories as needed.
///
/// # Returns
///
/// Full path of the written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<PathBuf> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Extracts `<title>` element text from generated page.
pub fn page_title(html: &str) -> Option<&str> {
    let start = html.find("<title>")? + "<title>".len();
    let end = html[start..].find("</title>")? + start;
    Some(&html[start..end])
}

/// Extracts the fragment between `<body>` and `</body>`.
pub fn page_body(html: &str) -> Option<&str> {
    let start = html.find("<body>")? + "<body>".len();
    let end = html.rfind("</body>")?;
    html.get(start..end)
}
