use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pchtxt_sort_core::{PathSegments, Source, version_from_file_name};

pub(crate) fn run_name(source: Source, path: &str) {
    let (dir, version) = split_content_path(path);
    let names = source
        .interpreter()
        .derive_from_segments(&PathSegments::from_relative(dir));

    log::info!("  Game:   {}", names.game.if_supports_color(Stdout, |t| t.cyan()));
    log::info!(
        "  Mod:    {}",
        names.mod_name.if_supports_color(Stdout, |t| t.cyan())
    );
    match version {
        Some(version) => log::info!(
            "  Target: {}/{}.pchtxt",
            names.dir_name().if_supports_color(Stdout, |t| t.bold()),
            version
        ),
        None => log::info!(
            "  Folder: {}",
            names.dir_name().if_supports_color(Stdout, |t| t.bold())
        ),
    }
}

/// Split a trailing content file name off `path`.
///
/// Returns the folder part and, when a content file was given, its version.
fn split_content_path(path: &str) -> (&str, Option<String>) {
    let trimmed = path.trim_end_matches(['/', '\\']);
    let (dir, file) = match trimmed.rsplit_once(['/', '\\']) {
        Some((dir, file)) => (dir, file),
        None => ("", trimmed),
    };
    match version_from_file_name(file) {
        Some(version) => (dir, Some(version)),
        None => (trimmed, None),
    }
}
