//! Shared fixtures for the changelog integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_CHANGELOG: &str = r"Change Log
==========

## Version 0.2.0

_2023-06-01_

### Kotlin

- Worker cancellation

### Swift

- Rendering fix
";

/// Writes `content` as `CHANGELOG.md` inside `dir`
pub fn write_changelog(dir: &Path, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(changelog::CHANGELOG_FILE);
    fs::write(&path, content)?;
    Ok(path)
}

/// Temporary directory holding a changelog with `content`
pub fn changelog_fixture(content: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = write_changelog(dir.path(), content)?;
    Ok((dir, path))
}

pub fn lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}
