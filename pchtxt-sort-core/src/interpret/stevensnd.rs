use std::sync::LazyLock;

use regex::Regex;

use super::{
    PathInterpreter, PathSegments, RawLabels, base_game_label, find_region, strip_bracketed,
    with_region,
};
use crate::source::Source;

/// A leading numeric version token and whatever follows it.
static LEADING_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)*)\s*(.*)$").expect("static pattern"));

/// Bare version numbers anywhere in a label: `1.0`, `v2.3.4`.
static EMBEDDED_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(v?\d+(?:\.\d+){1,2})\b").expect("static pattern"));

static TRAILING_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.*)\s+v[0-9.]+$").expect("static pattern"));

/// Folder name that only groups patch files.
const PCHTXT_FOLDER: &str = "pchtxt";

/// StevensND's `switch-port-mods`.
///
/// Every folder below the game contributes to the mod name, after the
/// version noise and region repeats that these folders carry are removed.
pub struct StevensNdInterpreter;

impl PathInterpreter for StevensNdInterpreter {
    fn source(&self) -> Source {
        Source::StevensNd
    }

    fn raw_labels(&self, segments: &PathSegments) -> RawLabels {
        let region = find_region(segments);
        let game = with_region(base_game_label(segments), segments);

        let mod_name = if segments.mentions_aspect_ratio() {
            Some(format!(
                "Aspect Ratio {}",
                segments.last().unwrap_or_default()
            ))
        } else {
            mod_from_folders(segments.below_game(), region.as_deref())
        };

        RawLabels { game, mod_name }
    }
}

/// Join the folders below the game into a mod label.
fn mod_from_folders(folders: &[String], region: Option<&str>) -> Option<String> {
    let mut folders: Vec<String> = folders
        .iter()
        .map(|f| strip_bracketed(f))
        .filter(|f| !f.eq_ignore_ascii_case(PCHTXT_FOLDER))
        .collect();

    strip_leading_version(&mut folders);
    if let (Some(region), Some(first)) = (region, folders.first_mut()) {
        *first = strip_region_prefix(first, region);
    }

    if folders.is_empty() {
        return None;
    }

    let joined = folders.join(" ");
    let without_versions = strip_versions(joined.trim());
    let label = match TRAILING_VERSION.captures(&without_versions) {
        Some(caps) => caps[1].trim().to_string(),
        None => without_versions,
    };
    Some(label)
}

/// `"1.0.1 60 FPS"` becomes `"60 FPS"`; a folder that is only a version is dropped.
fn strip_leading_version(folders: &mut Vec<String>) {
    let Some(first) = folders.first() else {
        return;
    };
    let Some(caps) = LEADING_VERSION.captures(first) else {
        return;
    };
    let trailing = caps[2].trim().to_string();
    if trailing.is_empty() {
        folders.remove(0);
    } else {
        folders[0] = trailing;
    }
}

/// Drop a repeat of the region from the front of a folder name.
fn strip_region_prefix(folder: &str, region: &str) -> String {
    if folder.to_lowercase().starts_with(&region.to_lowercase()) {
        folder
            .chars()
            .skip(region.chars().count())
            .collect::<String>()
            .trim_start()
            .to_string()
    } else {
        folder.to_string()
    }
}

/// Remove bare version numbers anywhere in `text`.
fn strip_versions(text: &str) -> String {
    EMBEDDED_VERSION.replace_all(text, "").trim().to_string()
}
