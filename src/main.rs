use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::paths::{ExpensePaths, DATA_FILE_ENV};
use expense_tracker::models::ExpenseStore;
use expense_tracker::storage::{ExpenseRepository, LoadOutcome};

/// Environment variable holding the log filter (e.g. `debug`)
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track your expenses",
    long_about = "Record, edit, list, summarize, and export personal expenses. \
                  Data is kept in expenses.json in the current directory unless \
                  --data-file says otherwise."
)]
struct Cli {
    /// Path to the expense data file
    #[arg(long, global = true, env = DATA_FILE_ENV, value_name = "PATH")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: ExpenseCommands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let paths = ExpensePaths::resolve(cli.data_file)?;
    let repo = ExpenseRepository::new(&paths);

    let mutating = cli.command.is_mutating();
    let mut store = load_store(&repo, mutating)?;

    debug!(path = %repo.path().display(), mutating, "running command");

    let mut out = io::stdout().lock();
    handle_expense_command(&mut store, &repo, cli.command, &mut out)?;

    Ok(())
}

/// Load the store, warning the user when the data file could not be parsed
///
/// An unparsable file is copied aside before anything can replace it. If the
/// copy fails, read-only commands still run against an empty list, but a
/// mutating command is refused so the original file is never overwritten.
fn load_store(repo: &ExpenseRepository, mutating: bool) -> Result<ExpenseStore> {
    let outcome = repo
        .load()
        .with_context(|| format!("Failed to load expenses from {}", repo.path().display()))?;

    let store = match outcome {
        LoadOutcome::Loaded(store) => store,
        LoadOutcome::Absent => {
            debug!(path = %repo.path().display(), "no data file yet, starting empty");
            ExpenseStore::new()
        }
        LoadOutcome::Malformed(reason) => {
            eprintln!("Error loading data: {}", reason);
            match repo.backup_malformed() {
                Ok(Some(backup)) => {
                    eprintln!("A copy of the unreadable file was saved to {}", backup.display());
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "could not back up unreadable data file");
                    eprintln!("Warning: no backup of the unreadable file could be made: {}", e);
                    if mutating {
                        bail!(
                            "Refusing to overwrite {} without a backup",
                            repo.path().display()
                        );
                    }
                }
            }
            eprintln!("Continuing with an empty expense list.");
            ExpenseStore::new()
        }
    };

    Ok(store)
}
