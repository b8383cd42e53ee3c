use std::sync::LazyLock;

use regex::Regex;

use super::{PathInterpreter, PathSegments, RawLabels, strip_bracketed};
use crate::source::Source;

static FIRST_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("static pattern"));

static TAG_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" v[0-9.]+$").expect("static pattern"));

/// Fl4sh9174's `Switch-Ultrawide-Mods`.
///
/// Each game arrives as its own zip; the mod name lives inside a bracketed
/// tag such as `[Ultrawide 21-9 v1.2]` somewhere below the game folder.
pub struct Fl4sh9174Interpreter;

impl PathInterpreter for Fl4sh9174Interpreter {
    fn source(&self) -> Source {
        Source::Fl4sh9174
    }

    fn raw_labels(&self, segments: &PathSegments) -> RawLabels {
        let game = strip_bracketed(segments.first().unwrap_or_default());
        let game = strip_zip_extension(&game).to_string();

        let mod_name = segments
            .below_game()
            .iter()
            .find_map(|segment| FIRST_TAG.captures(segment))
            .map(|caps| TAG_VERSION.replace(&caps[1], "").trim().to_string());

        RawLabels { game, mod_name }
    }
}

fn strip_zip_extension(name: &str) -> &str {
    let trimmed = name.trim_end();
    // ASCII lowercasing keeps byte offsets, so the stem length maps back.
    match trimmed.to_ascii_lowercase().strip_suffix(".zip") {
        Some(stem) => trimmed[..stem.len()].trim_end(),
        None => trimmed,
    }
}
