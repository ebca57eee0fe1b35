//! `td search` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::query;

#[derive(Args)]
pub struct SearchArgs {
    /// Keyword to look for in titles and descriptions
    keyword: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(file: Option<&Path>, args: SearchArgs) -> Result<()> {
    let store = super::open_store(file)?;
    let matches = query::search(store.list(), &args.keyword);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No tasks matching '{}'", args.keyword);
        return Ok(());
    }

    println!("Tasks matching '{}':\n", args.keyword);
    super::print_task_table(&matches);

    Ok(())
}
