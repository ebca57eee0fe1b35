//! CLI command implementations

pub mod add;
pub mod clear;
pub mod definition;
pub mod done;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::Path;

use crate::task::{
    self, Storage, Task, TaskError, TaskPriority, TaskStatus, TaskStore,
};

/// Open the task store, resolving the file location in order of
/// precedence: `--file` flag, config override, default path.
pub fn open_store(file: Option<&Path>) -> Result<TaskStore> {
    let config = task::load_config()?;
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => match config.storage.file.clone() {
            Some(path) => path,
            None => task::default_tasks_path()?,
        },
    };

    let storage = Storage::new(path).with_backup(config.storage.backup);
    Ok(TaskStore::open(storage)?)
}

/// Parse a user-supplied priority flag. Absent means the default; an
/// unrecognized value is a validation error, not a silent fallback.
pub fn parse_priority(arg: Option<&str>) -> Result<Option<TaskPriority>, TaskError> {
    match arg {
        None => Ok(None),
        Some(s) => TaskPriority::parse(s)
            .map(Some)
            .ok_or_else(|| TaskError::InvalidPriority(s.to_string())),
    }
}

pub fn parse_status(s: &str) -> Result<TaskStatus, TaskError> {
    TaskStatus::parse(s).ok_or_else(|| TaskError::InvalidStatus(s.to_string()))
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

const TABLE_COL_ID: usize = 4;
const TABLE_COL_TITLE: usize = 28;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_DESC: usize = 36;

pub(crate) fn print_table_header() {
    println!(
        "{:<width_id$}     {:<width_title$} {:<width_prio$} DESCRIPTION",
        "ID",
        "TITLE",
        "PRIORITY",
        width_id = TABLE_COL_ID,
        width_title = TABLE_COL_TITLE,
        width_prio = TABLE_COL_PRIORITY
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_TITLE + TABLE_COL_PRIORITY + TABLE_COL_DESC + 7)
    );
}

pub(crate) fn print_table_row(task: &Task) {
    let title = truncate(&task.title, TABLE_COL_TITLE);
    let description = truncate(&task.description, TABLE_COL_DESC);
    println!(
        "{:<width_id$} [{}] {:<width_title$} {:<width_prio$} {}",
        task.id,
        task.status.marker(),
        title,
        task.priority.label(),
        description,
        width_id = TABLE_COL_ID,
        width_title = TABLE_COL_TITLE,
        width_prio = TABLE_COL_PRIORITY
    );
}

pub(crate) fn print_task_table(tasks: &[&Task]) {
    print_table_header();
    for task in tasks {
        print_table_row(task);
    }
}
