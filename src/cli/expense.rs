//! Expense CLI commands
//!
//! Implements the six expense subcommands. Each invocation runs exactly one
//! command against the loaded store; mutating commands save it before
//! reporting success.

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::display::expense::{format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_to_path;
use crate::models::{ExpenseId, ExpensePatch, ExpenseStore, MonthFilter};
use crate::storage::ExpenseRepository;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        description: String,
        /// Amount spent (e.g. 3.50)
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,
        /// Category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Update an existing expense
    Update {
        /// Expense ID
        #[arg(long)]
        id: u64,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
        /// New category (pass "" to clear it)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(long)]
        id: u64,
    },
    /// List all expenses
    List,
    /// View expense summary
    Summary {
        /// Only count expenses from this month (1-12, any year)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Export expenses to CSV
    Export {
        /// Output file path
        #[arg(short, long)]
        file: PathBuf,
    },
}

impl ExpenseCommands {
    /// Whether the command changes the store
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::Update { .. } | Self::Delete { .. }
        )
    }
}

fn report(out: &mut impl Write, message: impl std::fmt::Display) -> ExpenseResult<()> {
    writeln!(out, "{}", message)
        .map_err(|e| ExpenseError::Io(format!("Failed to write output: {}", e)))
}

/// Handle an expense command, writing user-facing output to `out`
pub fn handle_expense_command<W: Write>(
    store: &mut ExpenseStore,
    repo: &ExpenseRepository,
    cmd: ExpenseCommands,
    out: &mut W,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let id = store
                .add(description, amount, category.unwrap_or_default())?
                .id;
            repo.save(store)?;

            report(out, format!("Expense added successfully (ID: {})", id))?;
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
            category,
        } => {
            let id = ExpenseId::new(id);
            let patch = ExpensePatch {
                description,
                amount,
                category,
            };

            store.update(id, patch)?;
            repo.save(store)?;

            report(out, format!("Expense updated successfully (ID: {})", id))?;
        }

        ExpenseCommands::Delete { id } => {
            let id = ExpenseId::new(id);

            store.delete(id)?;
            repo.save(store)?;

            report(out, format!("Expense deleted successfully (ID: {})", id))?;
        }

        ExpenseCommands::List => {
            write!(out, "{}", format_expense_table(store.list()))
                .map_err(|e| ExpenseError::Io(format!("Failed to write output: {}", e)))?;
        }

        ExpenseCommands::Summary { month } => {
            let filter = MonthFilter::from_flag(month)?;
            let total = store.summarize(filter);

            report(out, format_summary(total, filter))?;
        }

        ExpenseCommands::Export { file } => {
            export_to_path(store.list(), &file)?;

            report(out, format!("Expenses exported to {}", file.display()))?;
        }
    }

    Ok(())
}
