//! The expense store
//!
//! Holds every expense in insertion order together with the counter used to
//! hand out IDs. The store is a plain value: callers load it, mutate it, and
//! hand it back to the repository to persist.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

use super::expense::{Expense, ExpensePatch};
use super::ids::ExpenseId;
use super::period::MonthFilter;
use crate::error::{ExpenseError, ExpenseResult};

/// In-memory collection of expenses plus the next ID to assign
///
/// Invariant: `next_id` is greater than every ID this store has ever handed
/// out, so IDs are never reused after a delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseStore {
    #[serde(default, deserialize_with = "null_as_empty")]
    expenses: Vec<Expense>,

    #[serde(default)]
    next_id: ExpenseId,
}

// Older data files store an empty list as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Expense>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Expense>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store whose first ID will be 1
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: ExpenseId::FIRST,
        }
    }

    /// The ID the next added expense will receive
    pub fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    /// Record a new expense dated now
    ///
    /// Fails only when the ID counter cannot advance any further.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> ExpenseResult<&Expense> {
        self.add_at(description, amount, category, Local::now())
    }

    /// Record a new expense with an explicit timestamp
    pub fn add_at(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: DateTime<Local>,
    ) -> ExpenseResult<&Expense> {
        let following = self
            .next_id
            .checked_next()
            .ok_or_else(|| ExpenseError::ids_exhausted(self.next_id.to_string()))?;

        let expense = Expense::new(self.next_id, date, description, amount, category);
        self.next_id = following;

        let index = self.expenses.len();
        self.expenses.push(expense);
        Ok(&self.expenses[index])
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Overwrite the fields present in `patch` on the expense with `id`
    ///
    /// The ID and date are never changed. On failure the store is untouched.
    pub fn update(&mut self, id: ExpenseId, patch: ExpensePatch) -> ExpenseResult<&Expense> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        expense.apply(patch);
        Ok(expense)
    }

    /// Remove the expense with `id`, keeping the order of the rest
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        Ok(self.expenses.remove(index))
    }

    /// All expenses in the order they were added
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Total amount over the expenses covered by `filter`
    pub fn summarize(&self, filter: MonthFilter) -> f64 {
        self.expenses
            .iter()
            .filter(|e| filter.matches(e.month()))
            .map(|e| e.amount)
            .sum()
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the store holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Raise `next_id` above the largest stored ID if it has fallen behind
    ///
    /// Returns the repaired value when a change was made. Fails when the
    /// largest stored ID leaves no room for a counter above it.
    pub fn normalize(&mut self) -> ExpenseResult<Option<ExpenseId>> {
        let floor = match self.expenses.iter().map(|e| e.id).max() {
            Some(max) => max
                .checked_next()
                .ok_or_else(|| ExpenseError::ids_exhausted(max.to_string()))?,
            None => ExpenseId::FIRST,
        };

        if self.next_id < floor {
            self.next_id = floor;
            Ok(Some(floor))
        } else {
            Ok(None)
        }
    }
}
