//! Expense model
//!
//! An expense is one recorded outflow: a description, a signed amount, an
//! optional free-text category, and the moment it was recorded.

use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// When the expense was recorded
    pub date: DateTime<Local>,

    /// What the money was spent on
    pub description: String,

    /// Amount spent; the sign is not checked
    pub amount: f64,

    /// Free-text category, empty when not given
    #[serde(default)]
    pub category: String,
}

impl Expense {
    /// Create a new expense recorded at `date`
    pub fn new(
        id: ExpenseId,
        date: DateTime<Local>,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    /// The calendar date the expense was recorded on
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// The calendar month (1-12) the expense was recorded in
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Apply a partial update, leaving absent fields untouched
    pub fn apply(&mut self, patch: ExpensePatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

/// Fields to overwrite on an existing expense
///
/// `None` means "leave as is"; `Some(String::new())` clears the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
}

impl ExpensePatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a new amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set a new category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Expense {
        let date = Local.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        Expense::new(ExpenseId::new(1), date, "Coffee", 3.5, "Food")
    }

    #[test]
    fn test_day_and_month() {
        let expense = sample();
        assert_eq!(expense.day(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(expense.month(), 3);
    }

    #[test]
    fn test_apply_partial_patch() {
        let mut expense = sample();
        expense.apply(ExpensePatch::new().amount(4.25));

        assert_eq!(expense.amount, 4.25);
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.category, "Food");
    }

    #[test]
    fn test_apply_empty_string_clears_field() {
        let mut expense = sample();
        expense.apply(ExpensePatch::new().category(""));

        assert_eq!(expense.category, "");
        assert_eq!(expense.description, "Coffee");
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut expense = sample();
        let before = expense.clone();
        let patch = ExpensePatch::new();

        assert!(patch.is_empty());
        expense.apply(patch);
        assert_eq!(expense, before);
    }

    #[test]
    fn test_missing_category_defaults_to_empty() {
        let json = r#"{
            "id": 3,
            "date": "2024-01-02T15:04:05.123456789+01:00",
            "description": "Bus",
            "amount": 2
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.id, ExpenseId::new(3));
        assert_eq!(expense.category, "");
        assert_eq!(expense.amount, 2.0);
    }
}
