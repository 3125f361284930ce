//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: individual expenses, their IDs, partial updates, month filters,
//! and the store that owns them.

pub mod expense;
pub mod ids;
pub mod period;
pub mod store;

pub use expense::{Expense, ExpensePatch};
pub use ids::ExpenseId;
pub use period::MonthFilter;
pub use store::ExpenseStore;
