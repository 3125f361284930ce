//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense store.

pub mod expense;

pub use expense::{handle_expense_command, ExpenseCommands};
