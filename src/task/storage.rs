//! Task storage - JSON file persistence

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{Result, TaskError};
use super::Task;

#[derive(Debug)]
pub struct Storage {
    path: PathBuf,
    backup: bool,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: true,
        }
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection. A missing, empty, or whitespace-only file
    /// is an empty collection; anything else must parse as a task array.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!("No task file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| TaskError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Rewrite the whole collection.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if self.backup && self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, content)?;
        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskPriority;
    use tempfile::tempdir;

    #[test]
    fn test_storage_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path().join("tasks.json"));

        let mut tasks = vec![Task::new(1, "first"), Task::new(2, "second")];
        tasks[1].priority = TaskPriority::Low;
        tasks[1].description = "details".to_string();

        storage.save(&tasks)?;
        let loaded = storage.load()?;

        assert_eq!(loaded, tasks);
        Ok(())
    }

    #[test]
    fn test_storage_load_nonexistent_file() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path().join("missing.json"));

        let loaded = storage.load()?;
        assert!(loaded.is_empty());
        Ok(())
    }

    #[test]
    fn test_storage_load_empty_file() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        fs::write(&path, "")?;

        let storage = Storage::new(&path);
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_storage_load_whitespace_only_file() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        fs::write(&path, "   \n  \t  ")?;

        let storage = Storage::new(&path);
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_storage_load_invalid_json_is_corrupt() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{ invalid json }")?;

        let storage = Storage::new(&path);
        let err = storage.load().unwrap_err();
        assert!(matches!(err, TaskError::CorruptStore { .. }));
        Ok(())
    }

    #[test]
    fn test_storage_load_wrong_shape_is_corrupt() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        // Valid JSON, but not a task array
        fs::write(&path, r#"{"tasks": []}"#)?;

        let storage = Storage::new(&path);
        assert!(matches!(
            storage.load().unwrap_err(),
            TaskError::CorruptStore { .. }
        ));
        Ok(())
    }

    #[test]
    fn test_storage_save_creates_parent_dir() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("deep").join("nested").join("tasks.json");

        let storage = Storage::new(&path);
        storage.save(&[Task::new(1, "test")])?;

        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_storage_save_creates_backup() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        let storage = Storage::new(&path);

        storage.save(&[Task::new(1, "first save")])?;
        storage.save(&[Task::new(2, "second save")])?;

        let backup_path = path.with_extension("json.bak");
        assert!(backup_path.exists());

        let backup_content = fs::read_to_string(&backup_path)?;
        assert!(backup_content.contains("first save"));
        Ok(())
    }

    #[test]
    fn test_storage_backup_disabled() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        let storage = Storage::new(&path).with_backup(false);

        storage.save(&[Task::new(1, "first")])?;
        storage.save(&[Task::new(2, "second")])?;

        assert!(!path.with_extension("json.bak").exists());
        Ok(())
    }

    #[test]
    fn test_storage_save_empty_array() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.json");
        let storage = Storage::new(&path);
        storage.save(&[])?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content.trim(), "[]");
        Ok(())
    }

    #[test]
    fn test_storage_preserves_order_and_fields() -> Result<()> {
        let temp = tempdir()?;
        let storage = Storage::new(temp.path().join("tasks.json"));

        let mut high = Task::new(7, "Urgent thing");
        high.priority = TaskPriority::High;
        high.complete();
        let tasks = vec![Task::new(9, "Later thing"), high, Task::new(12, "Another")];

        storage.save(&tasks)?;
        let loaded = storage.load()?;

        let ids: Vec<u64> = loaded.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![9, 7, 12]);
        assert_eq!(loaded[1].title, "Urgent thing");
        assert_eq!(loaded[1].priority, TaskPriority::High);
        Ok(())
    }
}
