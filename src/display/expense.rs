//! Expense display formatting
//!
//! Formats expenses for terminal output as a table and as summary lines.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Expense, MonthFilter};

/// Currency symbol used for all amounts
pub const CURRENCY_SYMBOL: &str = "$";

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.value(),
            date: expense.day().format("%Y-%m-%d").to_string(),
            description: expense.description.clone(),
            amount: format_amount(expense.amount),
            category: expense.category.clone(),
        }
    }
}

/// Format an amount with the currency symbol and two decimals
///
/// Negative amounts put the sign before the symbol: `-$3.50`.
pub fn format_amount(amount: f64) -> String {
    let digits = format!("{:.2}", amount.abs());
    if amount < 0.0 && digits != "0.00" {
        format!("-{}{}", CURRENCY_SYMBOL, digits)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, digits)
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format the summary line for a total
pub fn format_summary(total: f64, filter: MonthFilter) -> String {
    match filter {
        MonthFilter::All => format!("Total expenses: {}", format_amount(total)),
        MonthFilter::Month(m) => {
            format!("Total expenses for month {}: {}", m, format_amount(total))
        }
    }
}
