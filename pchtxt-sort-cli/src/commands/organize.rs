use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pchtxt_sort_lib::{OrganizeOptions, Settings, Source};

use crate::cli_types::RunArgs;
use crate::error::CliError;

/// Organize an archive the user already extracted.
pub(crate) fn run_organize(
    settings: &Settings,
    source: Source,
    dir: &Path,
    output: Option<&Path>,
    run: &RunArgs,
    quiet: bool,
) -> Result<(), CliError> {
    if !dir.is_dir() {
        return Err(CliError::other(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    log::info!(
        "Organizing {} as {}",
        dir.display(),
        source.display_name().if_supports_color(Stdout, |t| t.bold()),
    );
    let options = OrganizeOptions {
        source,
        output_dir: settings.output_dir_for(source, output),
        dry_run: run.dry_run,
        limit: run.limit,
    };
    let summary = super::organize_tree(dir, &options, quiet)?;
    if !summary.errors.is_empty() {
        return Err(CliError::other(format!(
            "{} files could not be organized",
            summary.errors.len()
        )));
    }
    Ok(())
}
