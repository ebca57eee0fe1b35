//! `td remove` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task id
    id: u64,
}

pub fn run(file: Option<&Path>, args: RemoveArgs) -> Result<()> {
    let mut store = super::open_store(file)?;
    store.remove(args.id)?;
    println!("✓ Removed task {}", args.id);
    Ok(())
}
