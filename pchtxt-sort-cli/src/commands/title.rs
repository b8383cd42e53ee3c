use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pchtxt_sort_core::{clean_title, sanitize};

pub(crate) fn run_title(words: &[String]) {
    let raw = words.join(" ");
    log::debug!("Sanitized: {}", sanitize(&raw));
    log::info!("{}", clean_title(&raw).if_supports_color(Stdout, |t| t.bold()));
}
