//! Plan and execute the copy of an extracted archive into the organized
//! `"<Game> - <Mod>/<version>.pchtxt"` layout.
//!
//! Planning is read-only: it scans the tree and derives every target path,
//! so a dry run can show exactly what would happen. Execution copies file by
//! file and never lets one failure stop the batch.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use pchtxt_sort_core::{NamePair, Source, TitleId, find_title_id, version_from_file_name};

use crate::error::SortError;
use crate::scanner::find_content_files;

/// Options controlling an organize run.
#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    /// Which archive's folder conventions to apply.
    pub source: Source,
    /// Folder receiving the `"<Game> - <Mod>"` directories.
    pub output_dir: PathBuf,
    /// Plan only; execution reports what would be copied.
    pub dry_run: bool,
    /// Maximum number of content files to process
    pub limit: Option<usize>,
}

impl OrganizeOptions {
    pub fn new(source: Source, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output_dir: output_dir.into(),
            dry_run: false,
            limit: None,
        }
    }
}

/// One planned copy.
#[derive(Debug, Clone)]
pub struct OrganizeAction {
    pub source_file: PathBuf,
    /// `<output>/<Game> - <Mod>`
    pub target_dir: PathBuf,
    /// `<target_dir>/<version>.pchtxt`
    pub target_file: PathBuf,
    pub names: NamePair,
    pub version: String,
}

/// Everything an organize run will do.
#[derive(Debug)]
pub struct OrganizePlan {
    pub source: Source,
    pub root: PathBuf,
    pub dry_run: bool,
    pub actions: Vec<OrganizeAction>,
    /// Files skipped because an earlier file already claimed their target.
    pub conflicts: Vec<(PathBuf, String)>,
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum OrganizeProgress {
    /// Walking the extracted tree
    Scanning { root: PathBuf },
    /// Deriving names for a content file
    Planning {
        index: usize,
        total: usize,
        file: String,
    },
    /// Copying (or, in a dry run, previewing) a content file
    Copying {
        index: usize,
        total: usize,
        file: String,
    },
    Done,
}

/// What happened when tagging a copied file with its title ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleIdOutcome {
    /// A marker file was created.
    Found(TitleId),
    /// The file carries no title ID.
    Missing,
    /// The source could not be read or the marker could not be written.
    Error(String),
}

/// Summary of an organize run.
#[derive(Debug, Clone, Default)]
pub struct OrganizeSummary {
    pub copied: usize,
    pub tagged: usize,
    pub untagged: usize,
    pub title_id_errors: usize,
    /// Actions that would have run in a dry run.
    pub previewed: usize,
    pub errors: Vec<String>,
    pub conflicts: Vec<String>,
}

/// Scan `root` and derive the target of every content file.
pub fn plan_organize(
    root: &Path,
    options: &OrganizeOptions,
    progress: &dyn Fn(OrganizeProgress),
) -> Result<OrganizePlan, SortError> {
    progress(OrganizeProgress::Scanning {
        root: root.to_path_buf(),
    });
    let mut files = find_content_files(root)?;
    if let Some(limit) = options.limit {
        files.truncate(limit);
    }

    let interpreter = options.source.interpreter();
    let total = files.len();
    let mut plan = OrganizePlan {
        source: options.source,
        root: root.to_path_buf(),
        dry_run: options.dry_run,
        actions: Vec::with_capacity(total),
        conflicts: Vec::new(),
    };
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    for (index, file) in files.into_iter().enumerate() {
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress(OrganizeProgress::Planning {
            index,
            total,
            file: file_name.clone(),
        });

        let Some(version) = version_from_file_name(&file_name) else {
            continue;
        };
        let content_dir = file.parent().unwrap_or(root);
        let names = interpreter.derive_names(content_dir, root);
        let target_dir = options.output_dir.join(names.dir_name());
        let target_file = target_dir.join(&file_name_for(&version));
        log::debug!("{} -> {}", file.display(), target_file.display());

        if let Some(first) = claimed.get(&target_file) {
            plan.conflicts.push((
                file.clone(),
                format!(
                    "{} and {} both map to {}",
                    first.display(),
                    file.display(),
                    target_file.display()
                ),
            ));
            continue;
        }
        claimed.insert(target_file.clone(), file.clone());

        plan.actions.push(OrganizeAction {
            source_file: file,
            target_dir,
            target_file,
            names,
            version,
        });
    }

    Ok(plan)
}

/// Run a plan. Each file is isolated: failures are collected in the summary.
pub fn execute_organize(
    plan: &OrganizePlan,
    progress: &dyn Fn(OrganizeProgress),
) -> OrganizeSummary {
    let mut summary = OrganizeSummary {
        conflicts: plan.conflicts.iter().map(|(_, msg)| msg.clone()).collect(),
        ..Default::default()
    };
    let total = plan.actions.len();

    for (index, action) in plan.actions.iter().enumerate() {
        progress(OrganizeProgress::Copying {
            index,
            total,
            file: action.names.dir_name(),
        });

        if plan.dry_run {
            summary.previewed += 1;
            continue;
        }

        if let Err(e) = copy_action(action) {
            let msg = format!(
                "Failed to copy {} -> {}: {e}",
                action.source_file.display(),
                action.target_file.display()
            );
            log::warn!("{msg}");
            summary.errors.push(msg);
            continue;
        }
        summary.copied += 1;

        match tag_title_id(action) {
            TitleIdOutcome::Found(id) => {
                log::debug!("Tagged {} with {id}", action.target_file.display());
                summary.tagged += 1;
            }
            TitleIdOutcome::Missing => {
                log::debug!("No title ID in {}", action.source_file.display());
                summary.untagged += 1;
            }
            TitleIdOutcome::Error(msg) => {
                log::warn!("{msg}");
                summary.title_id_errors += 1;
                summary.errors.push(msg);
            }
        }
    }

    progress(OrganizeProgress::Done);
    summary
}

fn file_name_for(version: &str) -> String {
    format!("{version}.{}", pchtxt_sort_core::CONTENT_EXTENSION)
}

fn copy_action(action: &OrganizeAction) -> std::io::Result<()> {
    fs::create_dir_all(&action.target_dir)?;
    fs::copy(&action.source_file, &action.target_file)?;
    Ok(())
}

/// Read the source as lossy UTF-8 and drop a marker file next to the copy.
pub fn tag_title_id(action: &OrganizeAction) -> TitleIdOutcome {
    let bytes = match fs::read(&action.source_file) {
        Ok(b) => b,
        Err(e) => {
            return TitleIdOutcome::Error(format!(
                "Cannot read title ID from {}: {e}",
                action.source_file.display()
            ));
        }
    };
    let Some(id) = find_title_id(&String::from_utf8_lossy(&bytes)) else {
        return TitleIdOutcome::Missing;
    };
    let marker = action.target_dir.join(id.marker_file_name(&action.version));
    match fs::File::create(&marker) {
        Ok(_) => TitleIdOutcome::Found(id),
        Err(e) => TitleIdOutcome::Error(format!(
            "Cannot create marker {}: {e}",
            marker.display()
        )),
    }
}
