//! User settings (`~/.config/pchtxt-sort/settings.toml`).
//!
//! Every value can be overridden from the command line. Resolution order is
//! always: CLI flag, then settings file, then built-in default.
//!
//! ```toml
//! output_dir = "/games/switch/pchtxts"
//! work_dir = "/tmp/pchtxt-work"
//! keep_work_dir = false
//!
//! [sources.stevensnd]
//! url = "https://example.com/mirror/switch-port-mods.zip"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pchtxt_sort_core::Source;
use serde::{Deserialize, Serialize};

use crate::error::SortError;

/// Output root used when neither the CLI nor the settings file names one.
pub const DEFAULT_OUTPUT_DIR: &str = "pchtxts";

const APP_DIR: &str = "pchtxt-sort";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root of the organized output; each source gets its own subfolder.
    pub output_dir: Option<PathBuf>,
    /// Where archives are downloaded and extracted.
    pub work_dir: Option<PathBuf>,
    /// Keep downloaded archives and extracted trees after a sync.
    pub keep_work_dir: bool,
    /// Per-source overrides, keyed by short name.
    pub sources: BTreeMap<String, SourceSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Replacement download URL for the archive snapshot.
    pub url: Option<String>,
}

impl Settings {
    /// Output folder for one source: `<output root>/<Source>`.
    pub fn output_dir_for(&self, source: Source, cli_override: Option<&Path>) -> PathBuf {
        let root = cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        root.join(source.display_name())
    }

    /// Directory for downloads and extraction.
    pub fn work_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_override {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.work_dir {
            return dir.clone();
        }
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
    }

    /// Whether the work tree survives a sync.
    pub fn keep_work_dir(&self, cli_flag: bool) -> bool {
        cli_flag || self.keep_work_dir
    }

    /// Download URL for `source`, honoring a `[sources.<name>]` override.
    pub fn source_url(&self, source: Source) -> String {
        self.sources
            .get(source.short_name())
            .and_then(|s| s.url.clone())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| source.archive_url())
    }
}

/// Canonical path to the settings file: `~/.config/pchtxt-sort/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join(APP_DIR).join("settings.toml")
}

/// Parse settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<Settings, SortError> {
    Ok(toml::from_str(contents)?)
}

/// Load settings from the canonical path, falling back to defaults.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing or broken file yields defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}", path.display());
            return Settings::default();
        }
        Err(e) => {
            log::warn!("Could not read {}: {e}", path.display());
            return Settings::default();
        }
    };
    match parse_settings(&contents) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring {}: {e}", path.display());
            Settings::default()
        }
    }
}

/// Save settings to the canonical path.
pub fn save_settings(settings: &Settings) -> Result<(), SortError> {
    save_settings_to(&settings_path(), settings)
}

/// Write settings to `path` atomically.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SortError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized =
        toml::to_string_pretty(settings).map_err(|e| SortError::settings(e.to_string()))?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
