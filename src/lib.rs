//! expense-tracker - personal expense tracking from the command line
//!
//! This library provides the core functionality for the `expense-tracker`
//! binary: a single-user list of expenses kept in a JSON file, with commands
//! to add, update, delete, list, summarize, and export them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file path resolution
//! - `error`: Custom error types
//! - `models`: Expenses, IDs, month filters, and the expense store
//! - `storage`: JSON file storage layer
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Subcommand definitions and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::models::MonthFilter;
//! use expense_tracker::storage::ExpenseRepository;
//!
//! # fn main() -> Result<(), expense_tracker::ExpenseError> {
//! let paths = ExpensePaths::resolve(None)?;
//! let repo = ExpenseRepository::new(&paths);
//! let mut store = repo.load_or_default()?;
//!
//! store.add("Coffee", 3.50, "Food")?;
//! repo.save(&store)?;
//!
//! println!("{}", store.summarize(MonthFilter::All));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
