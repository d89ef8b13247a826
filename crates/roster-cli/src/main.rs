mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{employees, export, filters, stats, view, Context};
use crate::error::{exit_code_for, report_error};
use roster_config as config;
use roster_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "roster CLI")]
struct Cli {
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register an employee
    Add(employees::AddArgs),
    /// Show registered employees, optionally filtered
    List(employees::ListArgs),
    /// Show the values available to the filters
    Options(filters::OptionsArgs),
    /// Count employees per neighborhood and per bus line
    Stats(stats::StatsArgs),
    /// Write the filtered employees as CSV
    Export(export::ExportArgs),
    /// Show filters, employees and counts together
    View(view::ViewArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let data_path = paths::resolve_data_path(data_path, app_config.data_path.clone())
        .with_context(|| "resolve data path")?;
    debug!(path = %data_path.display(), "data path resolved");

    let mut store = Store::open(&data_path)
        .with_context(|| format!("open data file {}", data_path.display()))?;
    if let Some(warning) = store.load_warning() {
        debug!(reason = ?warning.reason, "data file unreadable");
    }
    debug!(rows = store.table().len(), "table loaded");

    // The page view reports load problems itself.
    if !matches!(command, Command::View(_)) {
        commands::print_notices(&store.notices());
    }

    let mut ctx = Context {
        store: &mut store,
        json,
        config: &app_config,
    };

    match command {
        Command::Add(args) => employees::add_employee(&mut ctx, args),
        Command::List(args) => employees::list_employees(&ctx, args),
        Command::Options(args) => filters::list_options(&ctx, args),
        Command::Stats(args) => stats::show_stats(&ctx, args),
        Command::Export(args) => export::export_csv(&ctx, args),
        Command::View(args) => view::show_view(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
