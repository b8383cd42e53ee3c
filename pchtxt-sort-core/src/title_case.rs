//! English title-casing for game and mod labels.
//!
//! Rules, in the order they are applied to each word:
//!
//! - Subtitle separators (`:`, `~`, `-`, en dash, em dash) split a word into
//!   pieces and force the following piece to be capitalized.
//! - Short function words (`of`, `the`, `and`, ...) stay lowercase unless they
//!   are forced, or are the first or last word of the label.
//! - Capitalized pieces keep known acronyms (`HD`, `4K`, `DOF`) and Roman
//!   numerals (`IX`, `I&II`) fully uppercase; anything else gets an initial
//!   capital per hyphen segment.
//!
//! The first and last words get a final pass through [`cap_special`] so they
//! are never left lowercase.

use std::sync::LazyLock;

use regex::Regex;

/// Tokens that are always written fully uppercase.
const ACRONYMS: &[&str] = &[
    "HD", "2D", "3D", "4K", "VR", "AI", "API", "USB", "CPU", "GPU", "DVD", "CD", "RPG", "FPS",
    "MMO", "MMORPG", "LAN", "GUI", "NPC", "FFVII", "FFVIII", "FFIX", "FFX", "FFXII", "FX", "2K",
    "5K", "8K", "V1", "V2", "V3", "V4", "DOF",
];

/// Words kept lowercase in the middle of a title.
const LOWERCASE_EXCEPTIONS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "in", "nor", "of", "on", "or", "so",
    "the", "to", "with", "yet",
];

/// Characters that separate a title from its subtitle.
const SUBTITLE_SEPARATORS: &[char] = &[':', '~', '-', '\u{2013}', '\u{2014}'];

/// Joiners allowed between Roman numerals in a compound token (`I&II`, `IV+V`).
const NUMERAL_JOINERS: &[char] = &['&', '+', '|'];

static ROMAN_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("static pattern")
});

/// Returns true if `word` is a non-empty Roman numeral (case-insensitive).
pub fn is_roman_numeral(word: &str) -> bool {
    !word.is_empty() && ROMAN_NUMERAL.is_match(word)
}

/// Returns true if the uppercase form of `word` is a known acronym.
pub fn is_acronym(word: &str) -> bool {
    let upper = word.to_uppercase();
    ACRONYMS.contains(&upper.as_str())
}

/// Returns true for the short function words that stay lowercase mid-title.
pub fn is_lowercase_exception(word: &str) -> bool {
    LOWERCASE_EXCEPTIONS.contains(&word.to_lowercase().as_str())
}

fn is_subtitle_separator(c: char) -> bool {
    SUBTITLE_SEPARATORS.contains(&c)
}

/// Capitalize each hyphen-separated segment: first char upper, rest lower.
///
/// ```
/// use pchtxt_sort_core::title_case::capitalize_hyphenated;
///
/// assert_eq!(capitalize_hyphenated("yooka-laylee"), "Yooka-Laylee");
/// assert_eq!(capitalize_hyphenated("x-MEN"), "X-Men");
/// ```
pub fn capitalize_hyphenated(word: &str) -> String {
    word.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}

/// Capitalized form of a word that has won capitalization.
///
/// Acronyms and Roman numerals come back fully uppercase, as do compounds of
/// Roman numerals joined by `&`, `+` or `|`. Everything else falls through to
/// [`capitalize_hyphenated`].
pub fn cap_special(word: &str) -> String {
    if is_acronym(word) || is_roman_numeral(word) {
        return word.to_uppercase();
    }
    for &joiner in NUMERAL_JOINERS {
        // Joiners are unaffected by case, so uppercasing the whole token
        // uppercases each numeral in place.
        if word.contains(joiner) && word.split(joiner).all(is_roman_numeral) {
            return word.to_uppercase();
        }
    }
    capitalize_hyphenated(word)
}

/// A piece of a word after splitting on subtitle separators.
#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Separator(char),
    Text(&'a str),
}

/// Split a word on subtitle separators, keeping the separators as pieces.
/// Empty text between adjacent separators is dropped.
fn split_pieces(word: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (i, c) in word.char_indices() {
        if is_subtitle_separator(c) {
            if start < i {
                pieces.push(Piece::Text(&word[start..i]));
            }
            pieces.push(Piece::Separator(c));
            start = i + c.len_utf8();
        }
    }
    if start < word.len() {
        pieces.push(Piece::Text(&word[start..]));
    }
    pieces
}

/// Re-capitalize each hyphen part of an edge word.
fn recapitalize_edge(word: &str) -> String {
    word.split('-').map(cap_special).collect::<Vec<_>>().join("-")
}

/// Title-case a sanitized label.
///
/// # Examples
///
/// ```
/// use pchtxt_sort_core::title_case;
///
/// assert_eq!(title_case("lord of the rings"), "Lord of the Rings");
/// assert_eq!(title_case("final fantasy ix remastered"), "Final Fantasy IX Remastered");
/// assert_eq!(title_case("game: a new hope"), "Game: A New Hope");
/// ```
pub fn title_case(label: &str) -> String {
    let words: Vec<&str> = label.split_whitespace().collect();
    let last_index = words.len().saturating_sub(1);
    let mut result: Vec<String> = Vec::with_capacity(words.len());
    let mut force_capitalize_next = false;

    for (idx, word) in words.iter().enumerate() {
        let has_separator = word.contains(is_subtitle_separator);
        let at_edge = idx == 0 || idx == last_index;
        let mut rebuilt = String::with_capacity(word.len());

        for piece in split_pieces(word) {
            match piece {
                Piece::Separator(c) => {
                    rebuilt.push(c);
                    force_capitalize_next = true;
                }
                Piece::Text(text) => {
                    if force_capitalize_next || at_edge || !is_lowercase_exception(text) {
                        rebuilt.push_str(&cap_special(text));
                    } else {
                        rebuilt.push_str(&text.to_lowercase());
                    }
                }
            }
        }

        result.push(rebuilt);

        // Forcing only carries over from a word that itself held a separator.
        if !has_separator {
            force_capitalize_next = false;
        }
    }

    if let Some(first) = result.first_mut() {
        *first = recapitalize_edge(first);
    }
    if let Some(last) = result.last_mut() {
        *last = recapitalize_edge(last);
    }

    result.join(" ")
}

#[cfg(test)]
#[path = "tests/title_case_tests.rs"]
mod tests;
