use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pchtxt_sort_lib::{Settings, Source};

pub(crate) fn run_list(settings: &Settings) {
    log::info!("Supported archives:");
    log::info!("");

    for &source in Source::all() {
        log::info!(
            "  {} [{}]{}",
            source.short_name().if_supports_color(Stdout, |t| t.bold()),
            source.display_name().if_supports_color(Stdout, |t| t.cyan()),
            if source.unpacks_nested_zips() {
                format!(
                    " {}",
                    "(nested zips)".if_supports_color(Stdout, |t| t.dimmed())
                )
            } else {
                String::new()
            },
        );
        log::info!("    Repository: {}", source.repository());
        log::info!("    Archive: {}", settings.source_url(source));
        log::info!("    Fallback mod name: {}", source.default_mod_name());
        log::info!("    Aliases: {}", source.aliases().join(", "));
    }
}
