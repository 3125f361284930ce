//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path (the `--data-file` flag or `EXPENSE_TRACKER_DATA_FILE`)
//! 2. `expenses.json` in the current working directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// File name used when no explicit data file is given
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Environment variable that overrides the data file location
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_DATA_FILE";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    data_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths, preferring `explicit` over the working-directory default
    ///
    /// # Errors
    ///
    /// Returns an error if the current working directory cannot be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let data_file = match explicit {
            Some(path) => path,
            None => std::env::current_dir()
                .map_err(|e| {
                    ExpenseError::Config(format!("Could not determine working directory: {}", e))
                })?
                .join(DEFAULT_DATA_FILE),
        };

        Ok(Self { data_file })
    }

    /// Create ExpensePaths pointing at a specific file (useful for testing)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the expense data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Where a copy of an unparsable data file is kept
    pub fn backup_file(&self) -> PathBuf {
        let mut name = self.data_file.as_os_str().to_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("mine.json");

        let paths = ExpensePaths::resolve(Some(file.clone())).unwrap();
        assert_eq!(paths.data_file(), file.as_path());
    }

    #[test]
    fn test_default_is_in_working_directory() {
        let paths = ExpensePaths::resolve(None).unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert_eq!(paths.data_file(), cwd.join(DEFAULT_DATA_FILE).as_path());
    }

    #[test]
    fn test_backup_file() {
        let paths = ExpensePaths::with_data_file("/tmp/data/expenses.json");
        assert_eq!(
            paths.backup_file(),
            PathBuf::from("/tmp/data/expenses.json.bak")
        );
    }
}
