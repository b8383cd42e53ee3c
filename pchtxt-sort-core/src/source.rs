/// Identifiers for every supported mod archive.
///
/// Each archive is maintained by a different author with its own folder
/// conventions. The tag selects which [`PathInterpreter`] decodes those
/// conventions and which fallback mod name applies.
///
/// [`PathInterpreter`]: crate::interpret::PathInterpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Ultrawide patches shipped as one zip per game.
    Fl4sh9174,
    /// General pchtxt mods with region and aspect-ratio folders.
    KeatonTheBot,
    /// Port mods with versioned and region-prefixed folders.
    StevensNd,
    /// pchtxt mods with colon-heavy names and aspect-ratio folders.
    Theboy181,
    /// Graphics pchtxt patches, one folder per game.
    Cucholix,
}

/// All source variants in registration order.
const ALL_SOURCES: &[Source] = &[
    Source::Fl4sh9174,
    Source::KeatonTheBot,
    Source::StevensNd,
    Source::Theboy181,
    Source::Cucholix,
];

impl Source {
    /// Canonical short name used for CLI arguments, settings keys and output folders.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Fl4sh9174 => "fl4sh9174",
            Self::KeatonTheBot => "keatonthebot",
            Self::StevensNd => "stevensnd",
            Self::Theboy181 => "theboy181",
            Self::Cucholix => "cucholix",
        }
    }

    /// Author name as it appears on the archive.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fl4sh9174 => "Fl4sh9174",
            Self::KeatonTheBot => "KeatonTheBot",
            Self::StevensNd => "StevensND",
            Self::Theboy181 => "theboy181",
            Self::Cucholix => "cucholix",
        }
    }

    /// GitHub `owner/repo` path of the archive.
    pub fn repository(&self) -> &'static str {
        match self {
            Self::Fl4sh9174 => "Fl4sh9174/Switch-Ultrawide-Mods",
            Self::KeatonTheBot => "KeatonTheBot/switch-pchtxt-mods",
            Self::StevensNd => "StevensND/switch-port-mods",
            Self::Theboy181 => "theboy181/switch-ptchtxt-mods",
            Self::Cucholix => "cucholix/NX-IPS-romfs-compilation",
        }
    }

    /// Branch whose snapshot is downloaded.
    pub fn branch(&self) -> &'static str {
        "main"
    }

    /// Default download URL for a zip snapshot of the archive.
    pub fn archive_url(&self) -> String {
        format!(
            "https://github.com/{}/archive/refs/heads/{}.zip",
            self.repository(),
            self.branch()
        )
    }

    /// Mod name used when a path carries no usable mod folder.
    pub fn default_mod_name(&self) -> &'static str {
        match self {
            Self::Fl4sh9174 => "Ultrawide Mods",
            Self::KeatonTheBot | Self::Theboy181 => "Mods",
            Self::StevensNd => "Port Mods",
            Self::Cucholix => "Graphics Mods",
        }
    }

    /// Whether the archive ships each game as its own zip at the top level.
    pub fn unpacks_nested_zips(&self) -> bool {
        matches!(self, Self::Fl4sh9174)
    }

    /// All accepted names for this source (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Fl4sh9174 => &["fl4sh9174", "fl4sh", "ultrawide"],
            Self::KeatonTheBot => &["keatonthebot", "keaton"],
            Self::StevensNd => &["stevensnd", "stevens", "port-mods"],
            Self::Theboy181 => &["theboy181", "boy181"],
            Self::Cucholix => &["cucholix", "graphics"],
        }
    }

    /// All source variants.
    pub fn all() -> &'static [Source] {
        ALL_SOURCES
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Source`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown source: '{0}'")]
pub struct SourceParseError(pub String);

impl std::str::FromStr for Source {
    type Err = SourceParseError;

    /// Parse a source from its short name or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_SOURCES
            .iter()
            .copied()
            .find(|source| source.aliases().contains(&lower.as_str()))
            .ok_or_else(|| SourceParseError(s.to_string()))
    }
}
