//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and a tagged load result
//! that tells a missing data file apart from a damaged one.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic, LoadOutcome};
