//! Title ID tags and content file naming.

use std::sync::LazyLock;

use regex::Regex;

/// Extension of a content (patch text) file, without the dot.
pub const CONTENT_EXTENSION: &str = "pchtxt";

static TITLE_ID_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([0-9A-Fa-f]{16})\]").expect("static pattern"));

/// A 16-digit hexadecimal title identifier, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleId(String);

impl TitleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the zero-byte marker file that tags `{version}.pchtxt`.
    ///
    /// ```
    /// use pchtxt_sort_core::find_title_id;
    ///
    /// let id = find_title_id("@nsobid-ABC\n[0100F2C0115B6000]").unwrap();
    /// assert_eq!(id.marker_file_name("1.0.0"), "1.0.0.pchtxt-0100F2C0115B6000");
    /// ```
    pub fn marker_file_name(&self, version: &str) -> String {
        format!("{version}.{CONTENT_EXTENSION}-{}", self.0)
    }
}

impl std::fmt::Display for TitleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The first bracketed 16-digit hex token in `text`, if any.
pub fn find_title_id(text: &str) -> Option<TitleId> {
    TITLE_ID_TAG
        .captures(text)
        .map(|caps| TitleId(caps[1].to_string()))
}

/// Whether `file_name` ends in `.pchtxt` (any case).
pub fn is_content_file(file_name: &str) -> bool {
    version_from_file_name(file_name).is_some()
}

/// The version a content file encodes in its name: `"1.0.0.pchtxt"` → `"1.0.0"`.
pub fn version_from_file_name(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    ext.eq_ignore_ascii_case(CONTENT_EXTENSION)
        .then(|| stem.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_bracketed_id() {
        let text = "@nsobid-0123\n# [0100A3D008C5C000]\n[0100000000010000]";
        assert_eq!(find_title_id(text).unwrap().as_str(), "0100A3D008C5C000");
    }

    #[test]
    fn match_is_case_insensitive_and_case_preserving() {
        let id = find_title_id("[0100a3d008c5c000]").unwrap();
        assert_eq!(id.to_string(), "0100a3d008c5c000");
    }

    #[test]
    fn only_exactly_sixteen_digits_match() {
        assert_eq!(find_title_id("[0100A3D008C5C00]"), None);
        assert_eq!(find_title_id("[0100A3D008C5C0000]"), None);
        assert_eq!(find_title_id("0100A3D008C5C000"), None);
        assert_eq!(find_title_id("[0100G3D008C5C000]"), None);
    }

    #[test]
    fn version_strips_extension_in_any_case() {
        assert_eq!(version_from_file_name("1.0.0.pchtxt"), Some("1.0.0".into()));
        assert_eq!(version_from_file_name("2.1.PCHTXT"), Some("2.1".into()));
        assert_eq!(version_from_file_name("notes.txt"), None);
        assert_eq!(version_from_file_name("pchtxt"), None);
    }

    #[test]
    fn content_file_detection() {
        assert!(is_content_file("1.2.0.pchtxt"));
        assert!(is_content_file("Main.PchTxt"));
        assert!(!is_content_file("1.2.0.pchtxt-0100A3D008C5C000"));
    }
}
