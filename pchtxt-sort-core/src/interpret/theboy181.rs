use super::{
    PathInterpreter, PathSegments, RawLabels, base_game_label, has_version_marker, with_region,
};
use crate::source::Source;

/// theboy181's `switch-ptchtxt-mods`.
///
/// Folder names here often carry colons and apostrophes that would be
/// illegal or ambiguous in output directory names, so both labels are
/// scrubbed of them before cleaning.
pub struct Theboy181Interpreter;

impl PathInterpreter for Theboy181Interpreter {
    fn source(&self) -> Source {
        Source::Theboy181
    }

    fn raw_labels(&self, segments: &PathSegments) -> RawLabels {
        let game = with_region(base_game_label(segments).replace(':', ""), segments);

        let mod_name = if segments.mentions_aspect_ratio() {
            segments
                .last()
                .map(|ratio| format!("Aspect Ratio {ratio}"))
        } else {
            match (segments.second_to_last(), segments.last()) {
                (parent, Some(last)) if has_version_marker(last) => {
                    // A shallow path has only the game folder above `last`.
                    let parent = parent.filter(|_| segments.len() > 2).unwrap_or_default();
                    Some(format!("{parent} {last}"))
                }
                (parent, _) => parent.map(str::to_string),
            }
        };

        RawLabels {
            game,
            mod_name: mod_name.map(|m| scrub_mod_label(&m)),
        }
    }
}

/// Rewrite ratios like `21'9` and `21-9` as `21.9`, drop colons, and map
/// the `Trailblazers` folder to the resolution it actually patches.
fn scrub_mod_label(raw: &str) -> String {
    let label = raw
        .trim()
        .replace(['\'', '`'], ".")
        .replace("21-9", "21.9")
        .replace(':', "");
    if label == "Trailblazers" {
        "4K".to_string()
    } else {
        label
    }
}
