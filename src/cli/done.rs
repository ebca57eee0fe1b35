//! `td done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct DoneArgs {
    /// Task id
    id: u64,
}

pub fn run(file: Option<&Path>, args: DoneArgs) -> Result<()> {
    let mut store = super::open_store(file)?;
    let task = store.complete(args.id)?;
    println!("✓ Completed task {}: {}", task.id, task.title);
    Ok(())
}
