//! `td list` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::path::Path;

use crate::task::{query, Task};

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status (pending, complete)
    #[arg(short = 's', long)]
    status: Option<String>,

    /// Filter by priority (high, medium, low)
    #[arg(short = 'p', long)]
    priority: Option<String>,

    /// Sort by "priority" or "status" instead of creation order
    #[arg(long)]
    sort: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(file: Option<&Path>, args: ListArgs) -> Result<()> {
    let status = args.status.as_deref().map(super::parse_status).transpose()?;
    let priority = super::parse_priority(args.priority.as_deref())?;

    let store = super::open_store(file)?;
    let snapshot = store.list();

    // Primary selection through the query layer, then narrow
    let mut tasks: Vec<&Task> = if let Some(status) = status {
        query::filter_by_status(snapshot, status)
    } else if let Some(priority) = priority {
        query::filter_by_priority(snapshot, priority)
    } else {
        snapshot.iter().collect()
    };
    if status.is_some() {
        if let Some(priority) = priority {
            tasks.retain(|t| t.priority == priority);
        }
    }

    match args.sort.as_deref() {
        Some("priority") => tasks.sort_by_key(|t| t.priority.rank()),
        Some("status") => tasks.sort_by_key(|t| t.status.rank()),
        Some(other) => bail!("Unrecognized sort key '{}' (expected priority or status)", other),
        None => {}
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    super::print_task_table(&tasks);
    println!("\nTotal: {} tasks", tasks.len());

    Ok(())
}
