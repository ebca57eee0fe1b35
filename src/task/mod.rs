//! Task management module
//!
//! The store owns the in-memory collection and mirrors it to a JSON file on
//! every mutation; queries are pure functions over a snapshot of that
//! collection.

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;

pub use config::{load_config, save_config, Config};
pub use error::{Result, TaskError};
pub use model::{Task, TaskPriority, TaskStatus};
pub use storage::Storage;
pub use store::{TaskStore, TaskUpdate};

use std::path::PathBuf;

const APP_DIR: &str = ".taskdeck";
const TASKS_FILE: &str = "tasks.json";

pub fn get_app_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    Ok(home.join(APP_DIR))
}

/// Where tasks live unless the config or `--file` says otherwise.
pub fn default_tasks_path() -> anyhow::Result<PathBuf> {
    Ok(get_app_dir()?.join(TASKS_FILE))
}
