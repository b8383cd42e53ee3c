//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pchtxt_sort_lib::Source;

#[derive(Parser)]
#[command(name = "pchtxt-sort")]
#[command(
    about = "Fetch Switch pchtxt mod archives and sort them into \"<Game> - <Mod>\" folders",
    long_about = None
)]
pub(crate) struct Cli {
    /// Output root; each source gets its own subfolder (defaults to settings, then ./pchtxts)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments for commands that copy content files.
#[derive(Args, Clone)]
pub(crate) struct RunArgs {
    /// Show planned copies without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Maximum number of content files to process per source
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List supported mod archives
    List,

    /// Download, extract and organize mod archives
    Sync {
        /// Sources to sync, by name or alias (e.g., keaton,stevens). Defaults to all
        #[arg(value_delimiter = ',')]
        sources: Vec<String>,

        /// Directory for downloads and extracted archives
        #[arg(long)]
        work_dir: Option<PathBuf>,

        /// Keep downloaded archives and extracted trees afterwards
        #[arg(long)]
        keep_work_dir: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Organize an archive that is already extracted
    Organize {
        /// Folder conventions to apply
        #[arg(short, long)]
        source: Source,

        /// Root of the extracted archive
        dir: PathBuf,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Show the game and mod names derived for a path inside an archive
    Name {
        /// Folder conventions to apply
        #[arg(short, long)]
        source: Source,

        /// Path relative to the archive root (a trailing .pchtxt file is allowed)
        path: String,
    },

    /// Clean up and title-case a label
    Title {
        /// Words of the label
        #[arg(required = true)]
        label: Vec<String>,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value comes from
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the current resolved values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
