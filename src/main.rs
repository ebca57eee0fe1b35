//! Taskdeck - file-backed task list manager for the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdeck::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion needs no store access and works in read-only environments.
    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "td", &mut std::io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let file = cli.file;
    match cli.command {
        Commands::Add(args) => cli::add::run(file.as_deref(), args),
        Commands::List(args) => cli::list::run(file.as_deref(), args),
        Commands::Update(args) => cli::update::run(file.as_deref(), args),
        Commands::Done(args) => cli::done::run(file.as_deref(), args),
        Commands::Remove(args) => cli::remove::run(file.as_deref(), args),
        Commands::Search(args) => cli::search::run(file.as_deref(), args),
        Commands::Clear(args) => cli::clear::run(file.as_deref(), args),
        Commands::Completion { .. } => unreachable!(),
    }
}
