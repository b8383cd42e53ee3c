//! pchtxt-sort CLI
//!
//! Fetches Switch pchtxt mod archives and sorts their content files into
//! `"<Game> - <Mod>/<version>.pchtxt"` folders.

mod cli_types;
mod commands;
mod error;
mod logger;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_init, run_config_path, run_config_show};
use commands::list::run_list;
use commands::name::run_name;
use commands::organize::run_organize;
use commands::sync::{SyncOptions, run_sync};
use commands::title::run_title;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = pchtxt_sort_lib::settings::load_settings();
    let output = cli.output.as_deref();

    match cli.command {
        Commands::List => run_list(&settings),
        Commands::Sync {
            sources,
            work_dir,
            keep_work_dir,
            run,
        } => {
            let opts = SyncOptions {
                output,
                work_dir: work_dir.as_deref(),
                keep_work_dir,
                run: &run,
                quiet: cli.quiet,
            };
            run_sync(&settings, &sources, &opts)?;
        }
        Commands::Organize { source, dir, run } => {
            run_organize(&settings, source, &dir, output, &run, cli.quiet)?;
        }
        Commands::Name { source, path } => run_name(source, &path),
        Commands::Title { label } => run_title(&label),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show()?,
            ConfigAction::Path => run_config_path(),
            ConfigAction::Init { force } => run_config_init(&settings, force)?,
        },
    }
    Ok(())
}
