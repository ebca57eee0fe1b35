//! `td update` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::TaskUpdate;

#[derive(Args)]
pub struct UpdateArgs {
    /// Task id
    id: u64,

    /// New title
    #[arg(short = 't', long)]
    title: Option<String>,

    /// New description
    #[arg(short = 'd', long)]
    description: Option<String>,

    /// New priority (high, medium, low)
    #[arg(short = 'p', long)]
    priority: Option<String>,
}

pub fn run(file: Option<&Path>, args: UpdateArgs) -> Result<()> {
    let priority = super::parse_priority(args.priority.as_deref())?;

    let mut store = super::open_store(file)?;
    let task = store.update(
        args.id,
        TaskUpdate {
            title: args.title,
            description: args.description,
            priority,
        },
    )?;

    println!("✓ Updated task {}: {}", task.id, task.title);
    Ok(())
}
