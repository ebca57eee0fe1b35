//! CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::{add, clear, done, list, remove, search, update};

#[derive(Parser)]
#[command(
    name = "td",
    version,
    about = "File-backed task list manager for the terminal"
)]
pub struct Cli {
    /// Tasks file to use (overrides the config file)
    #[arg(short = 'f', long = "file", global = true, env = "TASKDECK_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(add::AddArgs),

    /// List tasks, optionally filtered and sorted
    List(list::ListArgs),

    /// Edit an existing task
    Update(update::UpdateArgs),

    /// Mark a task as complete
    Done(done::DoneArgs),

    /// Delete a task
    Remove(remove::RemoveArgs),

    /// Search tasks by keyword
    Search(search::SearchArgs),

    /// Remove all completed tasks
    Clear(clear::ClearArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
