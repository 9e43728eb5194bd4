//! Discovers runnable test executables in the test directory.
//!
//! A candidate is an entry directly inside the test directory whose name
//! starts with `test_`, that resolves to a regular file, and that carries
//! an execute permission bit. Entries failing these checks are dropped
//! silently; they never reach the skipped report.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::diagnostics::RunnerError;

/// File name prefix shared by every test executable.
pub const TEST_PREFIX: &str = "test_";

/// Lists the candidates directly inside `dir`.
///
/// The returned list preserves the order of the underlying directory
/// listing; it is not sorted. A missing or unlistable directory is a
/// fatal error.
pub fn discover_candidates(dir: &Path) -> Result<Vec<PathBuf>, RunnerError> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| RunnerError::discovery(dir, e))?;
        if !entry.file_name().to_string_lossy().starts_with(TEST_PREFIX) {
            continue;
        }

        let path = entry.path();
        // fs::metadata follows symlinks; a dangling link is not a candidate.
        let Ok(meta) = fs::metadata(path) else {
            continue;
        };
        if !meta.is_file() || !is_executable(&meta) {
            continue;
        }

        candidates.push(path.to_path_buf());
    }

    Ok(candidates)
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn add_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, b"#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_candidates(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn empty_directory_yields_no_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = discover_candidates(dir.path()).unwrap();
        assert!(candidates.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn finds_executable_test_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = add_executable(dir.path(), "test_parser");
        assert_eq!(discover_candidates(dir.path()).unwrap(), vec![path]);
    }

    #[cfg(unix)]
    #[test]
    fn ignores_entries_without_the_test_prefix() {
        let dir = tempfile::tempdir().unwrap();
        add_executable(dir.path(), "bench_parser");
        assert!(discover_candidates(dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn ignores_non_executable_files() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_data");
        fs::write(&path, b"fixture bytes").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(discover_candidates(dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("test_fixtures")).unwrap();
        assert!(discover_candidates(dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks_to_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = add_executable(dir.path(), "helper_bin");
        let link = dir.path().join("test_linked");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert_eq!(discover_candidates(dir.path()).unwrap(), vec![link]);
    }

    #[cfg(unix)]
    #[test]
    fn ignores_dangling_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("test_gone");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();
        assert!(discover_candidates(dir.path()).unwrap().is_empty());
    }
}
