use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pchtxt_sort_lib::fetch::{prepare_source, remove_source_work_dir};
use pchtxt_sort_lib::{OrganizeOptions, OrganizeSummary, Settings, Source};

use crate::cli_types::RunArgs;
use crate::error::CliError;

/// Options for the sync command, resolved from flags.
pub(crate) struct SyncOptions<'a> {
    pub output: Option<&'a Path>,
    pub work_dir: Option<&'a Path>,
    pub keep_work_dir: bool,
    pub run: &'a RunArgs,
    pub quiet: bool,
}

/// Download and organize each requested source in turn.
///
/// A failing source is reported and the remaining sources still run.
pub(crate) fn run_sync(
    settings: &Settings,
    names: &[String],
    opts: &SyncOptions,
) -> Result<(), CliError> {
    let sources = resolve_sources(names)?;
    let work_dir = settings.work_dir(opts.work_dir);
    let keep = settings.keep_work_dir(opts.keep_work_dir);
    log::debug!("Work directory: {}", work_dir.display());

    let mut failed: Vec<Source> = Vec::new();
    let mut copied = 0;

    for &source in &sources {
        log::info!(
            "{}",
            source.display_name().if_supports_color(Stdout, |t| t.bold())
        );
        match sync_source(settings, source, &work_dir, opts) {
            Ok(summary) => {
                copied += summary.copied;
                if !summary.errors.is_empty() {
                    failed.push(source);
                }
            }
            Err(e) => {
                log::error!(
                    "  {} {source}: {e}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red())
                );
                failed.push(source);
            }
        }

        if keep {
            log::debug!("Keeping work files for {source}");
        } else if let Err(e) = remove_source_work_dir(source, &work_dir) {
            log::warn!("  Could not clean up work files for {source}: {e}");
        }
        log::info!("");
    }

    if !opts.run.dry_run {
        log::info!(
            "{} {} files copied from {} sources",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            copied,
            sources.len() - failed.len(),
        );
    }
    if failed.is_empty() {
        Ok(())
    } else {
        let names: Vec<&str> = failed.iter().map(|s| s.display_name()).collect();
        Err(CliError::other(format!(
            "{} of {} sources had problems: {}",
            failed.len(),
            sources.len(),
            names.join(", ")
        )))
    }
}

fn sync_source(
    settings: &Settings,
    source: Source,
    work_dir: &Path,
    opts: &SyncOptions,
) -> Result<OrganizeSummary, CliError> {
    let url = settings.source_url(source);
    let root = prepare_source(source, work_dir, &url)?;
    let options = OrganizeOptions {
        source,
        output_dir: settings.output_dir_for(source, opts.output),
        dry_run: opts.run.dry_run,
        limit: opts.run.limit,
    };
    super::organize_tree(&root, &options, opts.quiet)
}

/// Resolve source names; empty or `all` selects every source.
///
/// Duplicates are dropped while keeping first-seen order.
pub(crate) fn resolve_sources(names: &[String]) -> Result<Vec<Source>, CliError> {
    if names.is_empty() || names.iter().any(|n| n.trim().eq_ignore_ascii_case("all")) {
        return Ok(Source::all().to_vec());
    }
    let mut sources = Vec::with_capacity(names.len());
    for name in names {
        let source: Source = name
            .parse()
            .map_err(|_| CliError::unknown_source(name.clone()))?;
        if !sources.contains(&source) {
            sources.push(source);
        }
    }
    Ok(sources)
}
