//! `td clear` command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::Path;

use crate::task::TaskStatus;

#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub fn run(file: Option<&Path>, args: ClearArgs) -> Result<()> {
    let mut store = super::open_store(file)?;

    let completed = store
        .list()
        .iter()
        .filter(|t| t.status == TaskStatus::Complete)
        .count();
    if completed == 0 {
        println!("No completed tasks to clear.");
        return Ok(());
    }

    if !args.yes {
        print!("Remove {} completed tasks? (y/N): ", completed);
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        let response = response.trim().to_lowercase();

        if response != "y" && response != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let removed = store.clear_completed()?;
    println!("✓ Removed {} completed tasks", removed);
    Ok(())
}
