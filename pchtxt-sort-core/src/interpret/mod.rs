//! Path interpreters: decode a game name and a mod name from where a content
//! file sits inside an extracted archive.
//!
//! Every archive nests its patches differently:
//!
//! ```text
//! KeatonTheBot:  <Game, The [0100...]>/<USA [1.0.0]>/<Disable Fog v2>/1.0.0.pchtxt
//! StevensND:     <Game>/<1.0.1 60 FPS>/pchtxt/1.0.1.pchtxt
//! Fl4sh9174:     <Game>/<[Ultrawide 21-9 v1.2]>/1.0.0.pchtxt
//! ```
//!
//! Each [`Source`] has one [`PathInterpreter`] that turns the path segments
//! into raw labels. The shared provided methods then push both labels
//! through [`clean_title`] and apply the fallbacks, so a [`NamePair`] never
//! carries an empty field.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::clean_title;
use crate::source::Source;

mod cucholix;
mod fl4sh9174;
mod keatonthebot;
mod stevensnd;
mod theboy181;

pub use cucholix::CucholixInterpreter;
pub use fl4sh9174::Fl4sh9174Interpreter;
pub use keatonthebot::KeatonTheBotInterpreter;
pub use stevensnd::StevensNdInterpreter;
pub use theboy181::Theboy181Interpreter;

/// Game name used when a content file sits directly in the root.
pub const UNKNOWN_GAME: &str = "Unknown Game";

/// Folder text that marks an aspect-ratio patch set.
const ASPECT_RATIO_MARKER: &str = "Aspect Ratio";

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("static pattern"));

static VERSION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" v\d+").expect("static pattern"));

/// The ordered folder names between a root and a content file's directory.
///
/// Segment 0 is the game folder. Only normal components are kept, so `.`,
/// `..` and prefixes never show up as segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSegments {
    segments: Vec<String>,
}

impl PathSegments {
    /// Segments of `content_dir` relative to `root`.
    pub fn new(content_dir: &Path, root: &Path) -> Self {
        let relative =
            pathdiff::diff_paths(content_dir, root).unwrap_or_else(|| content_dir.to_path_buf());
        let segments = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Self { segments }
    }

    /// Segments of an already-relative path written with `/` or `\`.
    pub fn from_relative(path: &str) -> Self {
        let segments = path
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The game folder.
    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// The deepest folder, i.e. the one holding the content file.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The parent of the deepest folder.
    pub fn second_to_last(&self) -> Option<&str> {
        let n = self.segments.len();
        if n >= 2 {
            Some(self.segments[n - 2].as_str())
        } else {
            None
        }
    }

    /// Every segment after the game folder.
    pub fn below_game(&self) -> &[String] {
        self.segments.get(1..).unwrap_or_default()
    }

    /// Whether any segment is part of an aspect-ratio patch set.
    pub fn mentions_aspect_ratio(&self) -> bool {
        self.segments.iter().any(|s| s.contains(ASPECT_RATIO_MARKER))
    }
}

/// The derived display names for one content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub game: String,
    pub mod_name: String,
}

impl NamePair {
    /// Output folder name: `"{game} - {mod}"`.
    pub fn dir_name(&self) -> String {
        format!("{} - {}", self.game, self.mod_name)
            .trim_end()
            .to_string()
    }
}

impl std::fmt::Display for NamePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Labels assembled from path segments, before sanitizing and title-casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLabels {
    pub game: String,
    /// `None` when the path has nothing to offer; the source fallback applies.
    pub mod_name: Option<String>,
}

/// Decodes one archive's folder conventions.
///
/// Implementors only build raw labels; the provided methods clean them and
/// guarantee non-empty output. Implementations must be pure: they look at
/// the path strings and never touch the filesystem.
pub trait PathInterpreter: Send + Sync {
    /// The archive this interpreter understands.
    fn source(&self) -> Source;

    /// Build raw game and mod labels from the path segments.
    fn raw_labels(&self, segments: &PathSegments) -> RawLabels;

    /// Turn the raw game label into its display form.
    fn clean_game_label(&self, raw: &str) -> String {
        clean_title(raw)
    }

    /// Derive display names from pre-split segments.
    fn derive_from_segments(&self, segments: &PathSegments) -> NamePair {
        let raw = self.raw_labels(segments);

        let game = Some(self.clean_game_label(&raw.game))
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| UNKNOWN_GAME.to_string());
        let mod_name = raw
            .mod_name
            .map(|m| clean_title(&m))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.source().default_mod_name().to_string());

        NamePair { game, mod_name }
    }

    /// Derive display names for the content files in `content_dir`.
    fn derive_names(&self, content_dir: &Path, root: &Path) -> NamePair {
        self.derive_from_segments(&PathSegments::new(content_dir, root))
    }
}

impl Source {
    /// The interpreter for this archive's folder conventions.
    pub fn interpreter(&self) -> &'static dyn PathInterpreter {
        match self {
            Self::Fl4sh9174 => &Fl4sh9174Interpreter,
            Self::KeatonTheBot => &KeatonTheBotInterpreter,
            Self::StevensNd => &StevensNdInterpreter,
            Self::Theboy181 => &Theboy181Interpreter,
            Self::Cucholix => &CucholixInterpreter,
        }
    }
}

/// Derive display names for a content directory using `source`'s conventions.
pub fn derive_names(source: Source, content_dir: &Path, root: &Path) -> NamePair {
    source.interpreter().derive_names(content_dir, root)
}

// ── Shared label helpers ────────────────────────────────────────────────────

/// Remove every `[...]` tag and trim.
pub fn strip_bracketed(s: &str) -> String {
    BRACKETED.replace_all(s, "").trim().to_string()
}

/// Whether `s` holds at least one `[...]` tag.
pub fn has_bracketed(s: &str) -> bool {
    BRACKETED.is_match(s)
}

/// Rewrite `"Legend of Zelda, The"` as `"The Legend of Zelda"`.
pub fn move_leading_article(s: &str) -> String {
    let mut parts = s.split(", The");
    match (parts.next(), parts.next()) {
        (Some(head), Some(tail)) => format!("The {head}{tail}"),
        _ => s.to_string(),
    }
}

/// The region named by the first tagged folder below the game folder.
///
/// The first segment holding a `[...]` tag ends the search. Its untagged
/// remainder is the region; an empty remainder means no region. Nothing
/// checks that the remainder really is a region code.
pub fn find_region(segments: &PathSegments) -> Option<String> {
    segments
        .below_game()
        .iter()
        .find(|s| has_bracketed(s))
        .map(|s| strip_bracketed(s))
        .filter(|region| !region.is_empty())
}

/// Whether `s` carries a ` v<digits>` version marker.
pub fn has_version_marker(s: &str) -> bool {
    VERSION_MARKER.is_match(s)
}

/// Game label shared by the region-aware archives: tags stripped, article
/// moved to the front, spaced hyphens removed.
fn base_game_label(segments: &PathSegments) -> String {
    let game = strip_bracketed(segments.first().unwrap_or_default());
    move_leading_article(&game).replace(" - ", " ")
}

/// Append `" (Region)"` when the path names one.
fn with_region(game: String, segments: &PathSegments) -> String {
    match find_region(segments) {
        Some(region) => format!("{game} ({region})"),
        None => game,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn segments_relative_to_root() {
        let root = PathBuf::from("/tmp/repo");
        let dir = root.join("Game").join("USA [1.0.0]").join("60 FPS");
        let segments = PathSegments::new(&dir, &root);
        assert_eq!(segments.as_slice(), ["Game", "USA [1.0.0]", "60 FPS"]);
        assert_eq!(segments.first(), Some("Game"));
        assert_eq!(segments.last(), Some("60 FPS"));
        assert_eq!(segments.second_to_last(), Some("USA [1.0.0]"));
    }

    #[test]
    fn root_itself_has_no_segments() {
        let root = PathBuf::from("/tmp/repo");
        let segments = PathSegments::new(&root, &root);
        assert!(segments.is_empty());
        assert_eq!(segments.second_to_last(), None);
        assert!(segments.below_game().is_empty());
    }

    #[test]
    fn from_relative_accepts_either_separator() {
        let segments = PathSegments::from_relative("./Game\\Mods/60 FPS/");
        assert_eq!(segments.as_slice(), ["Game", "Mods", "60 FPS"]);
    }

    #[test]
    fn strip_bracketed_removes_every_tag() {
        assert_eq!(strip_bracketed("Game [0100ABC] [v1.0]"), "Game");
        assert_eq!(strip_bracketed("[USA]"), "");
        assert_eq!(strip_bracketed("No Tags"), "No Tags");
    }

    #[test]
    fn article_moves_to_front() {
        assert_eq!(
            move_leading_article("Legend of Zelda, The"),
            "The Legend of Zelda"
        );
        assert_eq!(
            move_leading_article("Witcher 3, The Wild Hunt"),
            "The Witcher 3 Wild Hunt"
        );
        assert_eq!(move_leading_article("Theatrhythm"), "Theatrhythm");
    }

    #[test]
    fn region_comes_from_first_tagged_folder() {
        let segments = PathSegments::from_relative("Game/Europe [1.0.2]/Mod");
        assert_eq!(find_region(&segments), Some("Europe".to_string()));

        // The game folder's own tags never count.
        let segments = PathSegments::from_relative("Game [0100]/Mod");
        assert_eq!(find_region(&segments), None);

        // A folder that is nothing but a tag ends the search without a region.
        let segments = PathSegments::from_relative("Game/[1.0.0]/USA [1.0.1]");
        assert_eq!(find_region(&segments), None);
    }

    #[test]
    fn version_marker_needs_space_v_digit() {
        assert!(has_version_marker("Disable Fog v2"));
        assert!(has_version_marker("Mod v1.3 beta"));
        assert!(!has_version_marker("Disable Fogv2"));
        assert!(!has_version_marker("Mod version"));
    }

    #[test]
    fn dir_name_joins_game_and_mod() {
        let pair = NamePair {
            game: "Super Mario Odyssey".to_string(),
            mod_name: "60 FPS".to_string(),
        };
        assert_eq!(pair.dir_name(), "Super Mario Odyssey - 60 FPS");
        assert_eq!(pair.to_string(), pair.dir_name());
    }

    #[test]
    fn every_source_has_an_interpreter() {
        for &source in Source::all() {
            assert_eq!(source.interpreter().source(), source);
        }
    }
}
