use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pchtxt_sort_lib::settings::{
    DEFAULT_OUTPUT_DIR, parse_settings, save_settings, settings_path,
};
use pchtxt_sort_lib::{Settings, Source};

use crate::error::CliError;

/// Show resolved settings. Unlike normal startup, a broken file is an error here.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = if path.exists() {
        let contents = std::fs::read_to_string(&path)?;
        parse_settings(&contents)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))?
    } else {
        Settings::default()
    };

    log::info!(
        "{}",
        "pchtxt-sort Configuration".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("");
    log::info!(
        "  Settings file: {}{}",
        path.display(),
        if path.exists() {
            String::new()
        } else {
            format!(" {}", "(not found)".if_supports_color(Stdout, |t| t.dimmed()))
        },
    );
    let output_root = match &settings.output_dir {
        Some(dir) => dir.display().to_string(),
        None => format!("{DEFAULT_OUTPUT_DIR} (default)"),
    };
    log::info!("  Output root:   {output_root}");
    log::info!("  Work dir:      {}", settings.work_dir(None).display());
    log::info!("  Keep work dir: {}", settings.keep_work_dir);
    log::info!("");
    log::info!("  Archives:");
    for &source in Source::all() {
        let url = settings.source_url(source);
        let marker = if url == source.archive_url() {
            String::new()
        } else {
            format!(" {}", "(override)".if_supports_color(Stdout, |t| t.yellow()))
        };
        log::info!(
            "    {:<14} {}{}",
            source.short_name().if_supports_color(Stdout, |t| t.cyan()),
            url,
            marker
        );
    }
    Ok(())
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Write the current resolved settings so they can be edited by hand.
pub(crate) fn run_config_init(settings: &Settings, force: bool) -> Result<(), CliError> {
    let path = settings_path();
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let mut seeded = settings.clone();
    if seeded.output_dir.is_none() {
        seeded.output_dir = Some(DEFAULT_OUTPUT_DIR.into());
    }
    if seeded.work_dir.is_none() {
        seeded.work_dir = Some(settings.work_dir(None));
    }
    save_settings(&seeded)?;
    log::info!(
        "{} Wrote {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display()
    );
    Ok(())
}
