//! `td add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Longer description
    #[arg(short = 'd', long)]
    description: Option<String>,

    /// Priority: high, medium, or low (defaults to medium)
    #[arg(short = 'p', long)]
    priority: Option<String>,
}

pub fn run(file: Option<&Path>, args: AddArgs) -> Result<()> {
    let priority = super::parse_priority(args.priority.as_deref())?;

    let mut store = super::open_store(file)?;
    let task = store.add(&args.title, args.description.as_deref(), priority)?;

    println!("✓ Added task: {}", task.title);
    println!("  ID:       {}", task.id);
    println!("  Priority: {}", task.priority);
    if !task.description.is_empty() {
        println!("  Notes:    {}", task.description);
    }

    Ok(())
}
