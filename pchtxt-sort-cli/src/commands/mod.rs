pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod name;
pub(crate) mod organize;
pub(crate) mod sync;
pub(crate) mod title;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pchtxt_sort_lib::{
    OrganizeOptions, OrganizePlan, OrganizeProgress, OrganizeSummary, execute_organize,
    plan_organize,
};

use crate::error::CliError;
use crate::spinner::{new_spinner, show_progress};

/// Plan and execute one organize pass over `root`, reporting as it goes.
pub(crate) fn organize_tree(
    root: &Path,
    options: &OrganizeOptions,
    quiet: bool,
) -> Result<OrganizeSummary, CliError> {
    let pb = new_spinner(quiet);
    let on_progress = |p: OrganizeProgress| show_progress(&pb, p);
    let plan = plan_organize(root, options, &on_progress);
    pb.finish_and_clear();
    let plan = plan?;

    print_plan(&plan, &options.output_dir);

    let pb = new_spinner(quiet);
    let on_progress = |p: OrganizeProgress| show_progress(&pb, p);
    let summary = execute_organize(&plan, &on_progress);
    pb.finish_and_clear();

    print_summary(&summary, plan.dry_run);
    Ok(summary)
}

fn print_plan(plan: &OrganizePlan, output_dir: &Path) {
    log::info!(
        "  {} content files -> {}",
        plan.actions.len(),
        output_dir.display().if_supports_color(Stdout, |t| t.dimmed()),
    );
    if plan.dry_run {
        for action in &plan.actions {
            log::info!(
                "    {}/{}.pchtxt",
                action
                    .names
                    .dir_name()
                    .if_supports_color(Stdout, |t| t.cyan()),
                action.version,
            );
            log::debug!("      from {}", action.source_file.display());
        }
    }
}

fn print_summary(summary: &OrganizeSummary, dry_run: bool) {
    if dry_run {
        log::info!(
            "  {} {} files would be copied (dry run)",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            summary.previewed,
        );
    } else {
        log::info!(
            "  {} {} files copied ({} with title IDs, {} without)",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.copied,
            summary.tagged,
            summary.untagged,
        );
    }
    for conflict in &summary.conflicts {
        log::warn!("  \u{26A0} Skipped: {conflict}");
    }
    // Individual failures were already logged as they happened.
    if !summary.errors.is_empty() {
        log::warn!(
            "  \u{2718} {} errors ({} while tagging title IDs)",
            summary.errors.len(),
            summary.title_id_errors,
        );
    }
}
