//! Export module for the expense tracker
//!
//! Provides CSV export of the expense list.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_to_path, CSV_HEADER};
