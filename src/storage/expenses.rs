//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense store to its data file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::ExpenseStore;

use super::file_io::{read_json, write_json_atomic, LoadOutcome};

/// Repository for expense store persistence
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
    backup_path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository for the configured data file
    pub fn new(paths: &ExpensePaths) -> Self {
        Self {
            path: paths.data_file().to_path_buf(),
            backup_path: paths.backup_file(),
        }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store from disk
    ///
    /// A loaded store is normalized so its ID counter is ahead of every
    /// stored ID. A store whose IDs leave no room for the counter is reported
    /// as malformed.
    pub fn load(&self) -> Result<LoadOutcome<ExpenseStore>, ExpenseError> {
        let mut store = match read_json::<ExpenseStore, _>(&self.path)? {
            LoadOutcome::Loaded(store) => store,
            LoadOutcome::Absent => return Ok(LoadOutcome::Absent),
            LoadOutcome::Malformed(reason) => return Ok(LoadOutcome::Malformed(reason)),
        };

        match store.normalize() {
            Ok(Some(next_id)) => warn!(
                path = %self.path.display(),
                next_id = %next_id,
                "ID counter was behind stored expenses; repaired"
            ),
            Ok(None) => {}
            Err(e) => return Ok(LoadOutcome::Malformed(e.to_string())),
        }

        debug!(
            path = %self.path.display(),
            count = store.len(),
            "loaded expenses"
        );
        Ok(LoadOutcome::Loaded(store))
    }

    /// Load the store, starting empty when the file is missing or unparsable
    pub fn load_or_default(&self) -> Result<ExpenseStore, ExpenseError> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Save the store to disk, replacing the previous contents
    pub fn save(&self, store: &ExpenseStore) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, store)?;
        debug!(
            path = %self.path.display(),
            count = store.len(),
            "saved expenses"
        );
        Ok(())
    }

    /// Copy the current data file aside before it gets overwritten
    ///
    /// Returns the backup location, or `None` if there was no file to copy.
    pub fn backup_malformed(&self) -> Result<Option<PathBuf>, ExpenseError> {
        if !self.path.exists() {
            return Ok(None);
        }

        fs::copy(&self.path, &self.backup_path).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to back up {} to {}: {}",
                self.path.display(),
                self.backup_path.display(),
                e
            ))
        })?;

        Ok(Some(self.backup_path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpensePatch, MonthFilter};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_data_file(temp_dir.path().join("expenses.json"));
        let repo = ExpenseRepository::new(&paths);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();

        assert_eq!(repo.load().unwrap(), LoadOutcome::Absent);

        let store = repo.load_or_default().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), ExpenseId::FIRST);
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();

        let mut store = ExpenseStore::new();
        store.add("Coffee", 3.5, "Food").unwrap();
        store.add("Bus", 2.0, "Transport").unwrap();
        store
            .update(ExpenseId::new(1), ExpensePatch::new().category("Drinks"))
            .unwrap();
        repo.save(&store).unwrap();

        let reloaded = repo.load_or_default().unwrap();
        assert_eq!(reloaded, store);
        assert_eq!(reloaded.list()[0].category, "Drinks");
        assert_eq!(reloaded.summarize(MonthFilter::All), 5.5);
    }

    #[test]
    fn test_ids_keep_increasing_across_reloads() {
        let (_temp_dir, repo) = create_test_repo();

        let mut store = repo.load_or_default().unwrap();
        store.add("A", 1.0, "").unwrap();
        store.add("B", 1.0, "").unwrap();
        store.delete(ExpenseId::new(2)).unwrap();
        repo.save(&store).unwrap();

        let mut store = repo.load_or_default().unwrap();
        let id = store.add("C", 1.0, "").unwrap().id;
        assert_eq!(id, ExpenseId::new(3));
    }

    #[test]
    fn test_persisted_layout() {
        let (_temp_dir, repo) = create_test_repo();

        let mut store = ExpenseStore::new();
        store.add("Coffee", 3.5, "Food").unwrap();
        repo.save(&store).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(value["next_id"], 2);
        assert_eq!(value["expenses"][0]["id"], 1);
        assert_eq!(value["expenses"][0]["description"], "Coffee");
        assert_eq!(value["expenses"][0]["amount"], 3.5);
        assert_eq!(value["expenses"][0]["category"], "Food");
        assert!(value["expenses"][0]["date"].is_string());
    }

    #[test]
    fn test_malformed_file() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "{ this is not json").unwrap();

        assert!(matches!(repo.load().unwrap(), LoadOutcome::Malformed(_)));
        assert!(repo.load_or_default().unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_id_loads_as_malformed() {
        let (_temp_dir, repo) = create_test_repo();
        let json = format!(
            r#"{{"expenses": [{{"id": {}, "date": "2025-01-01T10:00:00+00:00", "description": "A", "amount": 1.0, "category": ""}}], "next_id": 1}}"#,
            u64::MAX
        );
        fs::write(repo.path(), json).unwrap();

        match repo.load().unwrap() {
            LoadOutcome::Malformed(reason) => assert!(reason.contains("No expense IDs left")),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_backup_malformed_copies_file() {
        let (temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "garbage").unwrap();

        let backup = repo.backup_malformed().unwrap().unwrap();
        assert_eq!(backup, temp_dir.path().join("expenses.json.bak"));
        assert_eq!(fs::read_to_string(backup).unwrap(), "garbage");
    }

    #[test]
    fn test_backup_without_file() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.backup_malformed().unwrap(), None);
    }

    #[test]
    fn test_reads_files_with_null_expenses() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "{\n  \"expenses\": null,\n  \"next_id\": 4\n}").unwrap();

        let store = repo.load_or_default().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.next_id(), ExpenseId::new(4));
    }
}
