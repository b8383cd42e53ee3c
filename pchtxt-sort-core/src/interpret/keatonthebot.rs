use super::{
    PathInterpreter, PathSegments, RawLabels, base_game_label, has_version_marker, with_region,
};
use crate::source::Source;

/// KeatonTheBot's `switch-pchtxt-mods`.
///
/// Layout: `<Game>/<Region [version]>/.../<Mod>/<file>`. Aspect-ratio sets
/// nest as `Aspect Ratio/<21'9>/<version>/<file>`, so the ratio is read from
/// the folder above the deepest one.
pub struct KeatonTheBotInterpreter;

impl PathInterpreter for KeatonTheBotInterpreter {
    fn source(&self) -> Source {
        Source::KeatonTheBot
    }

    fn raw_labels(&self, segments: &PathSegments) -> RawLabels {
        let game = with_region(base_game_label(segments), segments);

        let mod_name = if segments.mentions_aspect_ratio() {
            let ratio = segments
                .second_to_last()
                .or(segments.last())
                .unwrap_or_default()
                .replace('\'', ".");
            Some(format!("Aspect Ratio {ratio}"))
        } else {
            match (segments.second_to_last(), segments.last()) {
                (Some(parent), Some(last)) if has_version_marker(last) => {
                    Some(format!("{parent} {last}"))
                }
                (parent, _) => parent.map(str::to_string),
            }
        };

        RawLabels { game, mod_name }
    }
}
