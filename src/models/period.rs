//! Month filter for expense summaries

use std::fmt;

use crate::error::ExpenseError;

/// Which expenses a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    /// Every expense regardless of date
    #[default]
    All,
    /// Expenses recorded in this calendar month (1-12) of any year
    Month(u32),
}

impl MonthFilter {
    /// Build a filter from the `--month` flag
    ///
    /// No value and `0` both mean "all months". Values above 12 are rejected.
    pub fn from_flag(month: Option<u32>) -> Result<Self, ExpenseError> {
        match month {
            None | Some(0) => Ok(Self::All),
            Some(m @ 1..=12) => Ok(Self::Month(m)),
            Some(m) => Err(ExpenseError::Validation(format!(
                "Invalid month: {}. Use a value between 1 and 12",
                m
            ))),
        }
    }

    /// Check whether an expense recorded in `month` is covered
    pub fn matches(&self, month: u32) -> bool {
        match self {
            Self::All => true,
            Self::Month(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all months"),
            Self::Month(m) => write!(f, "month {}", m),
        }
    }
}
