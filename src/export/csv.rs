//! CSV Export functionality
//!
//! Writes expenses as comma-separated rows. Fields containing a comma, quote,
//! or line break are quoted; everything else is written as is.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Header row of the exported file
pub const CSV_HEADER: [&str; 5] = ["ID", "Date", "Description", "Amount", "Category"];

/// Export expenses to CSV, one row per expense in the given order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.day().format("%Y-%m-%d").to_string(),
            expense.description.clone(),
            format!("{:.2}", expense.amount),
            expense.category.clone(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Export expenses to a CSV file at `path`, replacing any existing file
pub fn export_to_path(expenses: &[Expense], path: &Path) -> ExpenseResult<()> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    export_expenses_csv(expenses, BufWriter::new(file))
}
