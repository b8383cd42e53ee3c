//! Label sanitizing.
//!
//! Folder names scraped from the mod archives mix accented letters, curly
//! quotes, stray dashes and doubled spaces. [`sanitize`] flattens all of that
//! into plain ASCII so the same game spelled two ways ends up in one folder.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::title_case::title_case;

/// Apostrophe, backtick and quote characters. Deleted, never replaced.
const QUOTE_CHARS: &[char] = &['\'', '\u{2018}', '\u{2019}', '`', '"'];

static BROS_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bBros\.\s").expect("static pattern"));

/// Normalize a raw label into plain, single-spaced ASCII.
///
/// # Examples
///
/// ```
/// use pchtxt_sort_core::sanitize;
///
/// assert_eq!(sanitize("Pokémon: Let's Go!"), "Pokemon: Lets Go!");
/// assert_eq!(sanitize("Mario Bros.  Deluxe"), "Mario Bros Deluxe");
/// assert_eq!(sanitize("Zelda - Link's Awakening"), "Zelda Links Awakening");
/// ```
pub fn sanitize(raw: &str) -> String {
    let ascii: String = raw
        .nfkd()
        .filter(|c| c.is_ascii() && !QUOTE_CHARS.contains(c))
        .collect();
    let merged = ascii.replace(" - ", " ");
    let merged = BROS_ABBREVIATION.replace_all(&merged, "Bros ");
    merged.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitize then title-case. Every path interpreter finishes with this.
pub fn clean_title(raw: &str) -> String {
    title_case(&sanitize(raw))
}
