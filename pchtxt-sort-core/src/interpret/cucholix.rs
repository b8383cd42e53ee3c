use super::{PathInterpreter, PathSegments, RawLabels};
use crate::sanitize::sanitize;
use crate::source::Source;
use crate::title_case::title_case;

const GRAPHICS_SUFFIX: &str = "Graphics";

/// cucholix's `NX-IPS-romfs-compilation`, pchtxt half.
///
/// Patch files sit in a folder named after the game, usually suffixed with
/// `Graphics`. There is no per-mod folder, so every file lands under the
/// fixed `Graphics Mods` label.
pub struct CucholixInterpreter;

impl PathInterpreter for CucholixInterpreter {
    fn source(&self) -> Source {
        Source::Cucholix
    }

    fn raw_labels(&self, segments: &PathSegments) -> RawLabels {
        RawLabels {
            game: segments.last().unwrap_or_default().to_string(),
            mod_name: None,
        }
    }

    /// The suffix is matched after sanitizing, so it must be stripped
    /// between the two cleaning stages.
    fn clean_game_label(&self, raw: &str) -> String {
        let sanitized = sanitize(raw);
        let game = sanitized
            .strip_suffix(GRAPHICS_SUFFIX)
            .unwrap_or(sanitized.as_str())
            .trim();
        title_case(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(path: &str) -> (String, String) {
        let pair = CucholixInterpreter.derive_from_segments(&PathSegments::from_relative(path));
        (pair.game, pair.mod_name)
    }

    #[test]
    fn deepest_folder_is_the_game() {
        assert_eq!(
            names("pchtxt/Zelda Tears of the Kingdom Graphics"),
            ("Zelda Tears of the Kingdom".into(), "Graphics Mods".into())
        );
    }

    #[test]
    fn accents_are_removed_before_suffix_check() {
        assert_eq!(names("Pokémon Violet Graphics").0, "Pokemon Violet");
    }

    #[test]
    fn bare_suffix_leaves_unknown_game() {
        assert_eq!(names("Graphics").0, "Unknown Game");
        assert_eq!(names("").0, "Unknown Game");
    }
}
