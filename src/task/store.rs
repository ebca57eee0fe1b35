//! Task store - owns the collection and mirrors every mutation to disk

use tracing::debug;

use super::error::{Result, TaskError};
use super::storage::Storage;
use super::{Task, TaskPriority, TaskStatus};

/// Fields to change in an `update` call. `None` leaves the field as is.
#[derive(Debug, Default, Clone)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
}

#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
    /// Next id to assign. Seeded from the highest persisted id and only ever
    /// incremented, so deletes never free an id for reuse.
    next_id: u64,
}

impl TaskStore {
    /// Load the collection from the backing file. Fails if the file exists
    /// but cannot be parsed.
    pub fn open(storage: Storage) -> Result<Self> {
        let tasks = storage.load()?;
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Ok(Self {
            storage,
            tasks,
            next_id,
        })
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn add(
        &mut self,
        title: &str,
        description: Option<&str>,
        priority: Option<TaskPriority>,
    ) -> Result<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let mut task = Task::new(self.next_id, title);
        self.next_id += 1;
        if let Some(description) = description {
            task.description = description.to_string();
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }

        debug!("Adding task {} '{}'", task.id, task.title);
        self.tasks.push(task);
        self.persist()?;
        Ok(self.tasks.last().expect("just pushed"))
    }

    pub fn update(&mut self, id: u64, update: TaskUpdate) -> Result<&Task> {
        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(TaskError::EmptyTitle);
            }
        }

        let idx = self.index_of(id)?;
        let task = &mut self.tasks[idx];
        if let Some(title) = update.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }

        self.persist()?;
        Ok(&self.tasks[idx])
    }

    pub fn complete(&mut self, id: u64) -> Result<&Task> {
        let idx = self.index_of(id)?;
        self.tasks[idx].complete();
        self.persist()?;
        Ok(&self.tasks[idx])
    }

    pub fn remove(&mut self, id: u64) -> Result<()> {
        let idx = self.index_of(id)?;
        let task = self.tasks.remove(idx);
        debug!("Removed task {} '{}'", task.id, task.title);
        self.persist()
    }

    /// Remove every complete task, returning how many were dropped.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let initial = self.tasks.len();
        self.tasks.retain(|t| t.status != TaskStatus::Complete);
        let removed = initial - self.tasks.len();
        self.persist()?;
        Ok(removed)
    }

    fn index_of(&self, id: u64) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&self.tasks)
    }
}
