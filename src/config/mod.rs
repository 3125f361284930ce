//! Configuration module for the expense tracker
//!
//! Resolves where the expense data file lives.

pub mod paths;

pub use paths::ExpensePaths;
