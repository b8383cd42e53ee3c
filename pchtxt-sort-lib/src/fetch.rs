//! Archive download and extraction.
//!
//! Each source gets its own folder under the work directory:
//!
//! ```text
//! <work>/<short_name>/<short_name>.zip    downloaded snapshot
//! <work>/<short_name>/extracted/          unpacked tree
//! ```
//!
//! Both are reused on the next run, so an interrupted sync does not download
//! again.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use pchtxt_sort_core::interpret::strip_bracketed;
use pchtxt_sort_core::{Source, clean_title};
use zip::ZipArchive;

use crate::error::SortError;

const EXTRACTED_DIR: &str = "extracted";

/// Archive formats that show up inside the mod repositories but are not
/// unpacked.
const UNSUPPORTED_ARCHIVES: &[&str] = &["rar", "7z"];

/// Folder holding everything fetched for `source`.
pub fn source_work_dir(source: Source, work_dir: &Path) -> PathBuf {
    work_dir.join(source.short_name())
}

/// Download `url` to `dest` with a blocking GET.
///
/// The body lands in a `.part` file first, so `dest` only ever holds a
/// complete download.
pub fn download_archive(url: &str, dest: &Path) -> Result<(), SortError> {
    log::debug!("GET {url}");
    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        return Err(SortError::download(format!(
            "HTTP {} for {url}",
            response.status()
        )));
    }
    let bytes = response.bytes()?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    let part = dest.with_extension("part");
    fs::write(&part, &bytes)?;
    fs::rename(&part, dest)?;
    log::debug!("Saved {} bytes to {}", bytes.len(), dest.display());
    Ok(())
}

/// Extract `archive` into `dest`.
///
/// Returns the archive's single top-level directory when it has one (GitHub
/// snapshots wrap everything in `<repo>-<branch>/`), otherwise `dest`.
pub fn extract_zip(archive: &Path, dest: &Path) -> Result<PathBuf, SortError> {
    let mut zip = ZipArchive::new(File::open(archive)?)?;
    let top = single_top_level_dir(&zip);

    fs::create_dir_all(dest)?;
    zip.extract(dest)?;

    Ok(match top {
        Some(dir) => dest.join(dir),
        None => dest.to_path_buf(),
    })
}

/// The one directory every entry lives under, if there is exactly one.
fn single_top_level_dir(zip: &ZipArchive<File>) -> Option<String> {
    let mut top: Option<&str> = None;
    for name in zip.file_names() {
        // An entry without a separator is a top-level file.
        let (head, _) = name.split_once('/')?;
        match top {
            None => top = Some(head),
            Some(existing) if existing == head => {}
            Some(_) => return None,
        }
    }
    top.map(str::to_string)
}

/// Unpack each top-level `*.zip` under `root` into a folder named after the
/// cleaned game title, then delete the zip.
///
/// Failures are logged per archive. Returns how many archives were unpacked.
pub fn unpack_nested_zips(root: &Path) -> Result<usize, SortError> {
    let mut zips: Vec<PathBuf> = fs::read_dir(root)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_extension(p, "zip"))
        .collect();
    zips.sort();

    let mut unpacked = 0;
    for zip_path in zips {
        let stem = zip_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let folder = nested_folder_name(&stem);
        let dest = root.join(&folder);

        match extract_zip(&zip_path, &dest) {
            Ok(_) => {
                log::debug!("Unpacked {} into {folder}", zip_path.display());
                if let Err(e) = fs::remove_file(&zip_path) {
                    log::warn!("Could not remove {}: {e}", zip_path.display());
                }
                unpacked += 1;
            }
            Err(e) => log::warn!("Failed to unpack {}: {e}", zip_path.display()),
        }
    }
    Ok(unpacked)
}

/// Folder name for a per-game zip: tags removed, title cleaned.
pub fn nested_folder_name(stem: &str) -> String {
    let cleaned = clean_title(&strip_bracketed(stem));
    if cleaned.is_empty() {
        stem.to_string()
    } else {
        cleaned
    }
}

/// Warn about archives under `root` that will not be unpacked.
///
/// Returns the paths found so callers can report them.
pub fn find_unsupported_archives(root: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|e| e.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if UNSUPPORTED_ARCHIVES
                .iter()
                .any(|ext| has_extension(&path, ext))
            {
                log::warn!("Skipping unsupported archive {}", path.display());
                found.push(path);
            }
        }
    }
    found.sort();
    found
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Make `source`'s archive available locally and return its content root.
///
/// Reuses an extracted tree, else a downloaded zip, else downloads `url`.
pub fn prepare_source(source: Source, work_dir: &Path, url: &str) -> Result<PathBuf, SortError> {
    let dir = source_work_dir(source, work_dir);
    let archive = dir.join(format!("{}.zip", source.short_name()));
    let extracted = dir.join(EXTRACTED_DIR);

    let root = if extracted.is_dir() {
        log::info!("Reusing extracted {source} archive at {}", extracted.display());
        content_root(&extracted)?
    } else {
        if archive.is_file() {
            log::info!("Reusing downloaded {source} archive");
        } else {
            log::info!("Downloading {source} from {url}");
            download_archive(url, &archive)?;
        }

        // Staged so a partial tree is never mistaken for a finished one.
        let staging = dir.join(format!("{EXTRACTED_DIR}.part"));
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        let staged_root = extract_zip(&archive, &staging)?;
        fs::rename(&staging, &extracted)?;
        match staged_root.strip_prefix(&staging) {
            Ok(inner) => extracted.join(inner),
            Err(_) => extracted.clone(),
        }
    };

    if source.unpacks_nested_zips() {
        let count = unpack_nested_zips(&root)?;
        if count > 0 {
            log::info!("Unpacked {count} per-game archives");
        }
    }
    find_unsupported_archives(&root);
    Ok(root)
}

/// The lone subdirectory of `dir` when it holds nothing else, else `dir`.
pub fn content_root(dir: &Path) -> std::io::Result<PathBuf> {
    let entries: Vec<PathBuf> = fs::read_dir(dir)?.flatten().map(|e| e.path()).collect();
    match entries.as_slice() {
        [only] if only.is_dir() => Ok(only.clone()),
        _ => Ok(dir.to_path_buf()),
    }
}

/// Delete everything fetched for `source`.
pub fn remove_source_work_dir(source: Source, work_dir: &Path) -> std::io::Result<()> {
    let dir = source_work_dir(source, work_dir);
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    Ok(())
}
