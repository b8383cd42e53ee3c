//! Content file discovery inside an extracted archive.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pchtxt_sort_core::is_content_file;

/// Folder names that are never descended into.
const SKIPPED_DIRS: &[&str] = &[".git", "__pycache__"];

/// Substring marking output folders left behind by an earlier run.
const FORMATTED_MARKER: &str = "formatted";

/// Returns true if a directory with this name should not be scanned.
pub fn is_skipped_dir(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains(FORMATTED_MARKER) || SKIPPED_DIRS.contains(&lower.as_str())
}

/// Recursively find every `.pchtxt` file under `root`, sorted by path.
///
/// Only an unreadable `root` is an error. Unreadable subdirectories are
/// logged and skipped so one bad folder does not hide the rest.
pub fn find_content_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(root)?;
    collect(entries, &mut files);
    files.sort();
    Ok(files)
}

fn collect(entries: fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if path.is_dir() {
            if is_skipped_dir(&name) {
                log::debug!("Skipping {}", path.display());
                continue;
            }
            match fs::read_dir(&path) {
                Ok(sub) => collect(sub, files),
                Err(e) => log::warn!("Cannot read {}: {e}", path.display()),
            }
        } else if is_content_file(&name) {
            files.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"@nsobid-0000").unwrap();
    }

    #[test]
    fn finds_nested_content_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("B Game/Mod/1.0.0.pchtxt"));
        touch(&root.join("A Game/USA [1.0.0]/60 FPS/1.0.0.PCHTXT"));
        touch(&root.join("A Game/readme.md"));

        let files = find_content_files(root).unwrap();
        assert_eq!(
            files,
            vec![
                root.join("A Game/USA [1.0.0]/60 FPS/1.0.0.PCHTXT"),
                root.join("B Game/Mod/1.0.0.pchtxt"),
            ]
        );
    }

    #[test]
    fn skips_output_and_tooling_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("Game/Mod/1.0.0.pchtxt"));
        touch(&root.join("formatted/Game - Mod/1.0.0.pchtxt"));
        touch(&root.join("pchtxt_formatted/Game - Mod/1.0.0.pchtxt"));
        touch(&root.join(".git/objects/1.0.0.pchtxt"));
        touch(&root.join("__pycache__/1.0.0.pchtxt"));

        let files = find_content_files(root).unwrap();
        assert_eq!(files, vec![root.join("Game/Mod/1.0.0.pchtxt")]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_content_files(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn skip_rules() {
        assert!(is_skipped_dir("Formatted"));
        assert!(is_skipped_dir("contents_formatted"));
        assert!(is_skipped_dir(".GIT"));
        assert!(!is_skipped_dir("Game"));
        assert!(!is_skipped_dir(".github"));
    }
}
