//! Single-line spinner for long-running organize phases.

use indicatif::{ProgressBar, ProgressStyle};

use pchtxt_sort_lib::OrganizeProgress;

/// Create a spinner, hidden when `quiet` is set.
pub(crate) fn new_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb
}

/// Reflect an organize progress event on `pb`.
pub(crate) fn show_progress(pb: &ProgressBar, progress: OrganizeProgress) {
    match progress {
        OrganizeProgress::Scanning { root } => {
            pb.set_message(format!("Scanning {}", root.display()));
            pb.tick();
        }
        OrganizeProgress::Planning { index, total, file } => {
            pb.set_message(format!("[{}/{}] Naming {}", index + 1, total, file));
            pb.tick();
        }
        OrganizeProgress::Copying { index, total, file } => {
            pb.set_message(format!("[{}/{}] Copying {}", index + 1, total, file));
            pb.tick();
        }
        OrganizeProgress::Done => pb.finish_and_clear(),
    }
}
