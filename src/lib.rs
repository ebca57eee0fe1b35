//! Taskdeck library - file-backed task list management

pub mod cli;
pub mod task;
