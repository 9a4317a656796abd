//! winrepo CLI
//!
//! The command-line interface for managing Windows package repositories on
//! a repository server.

mod args;
mod cli;
mod console;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use winrepo_client::HttpRepositoryApi;
use winrepo_core::{
    CommandContext, CreateRepositoryCommand, ListOptions, ListRepositoriesCommand,
    UpdateRepositoryCommand, WIN,
};
use winrepo_meta::AdminConfig;

use cli::{Cli, Commands, RepoAction};
use console::ConsolePrompt;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }

    match cli.command {
        Some(Commands::Repo { action }) => {
            let config = load_config(cli.config.as_deref(), cli.server)?;
            execute_repo(&config, action)
        }
        None => {
            println!("{} Windows repository administration", "winrepo".green().bold());
            println!();
            println!("Run {} for available commands.", "winrepo --help".cyan());
            Ok(())
        }
    }
}

/// Admin configuration with the `--server` override applied
fn load_config(path: Option<&std::path::Path>, server: Option<String>) -> Result<AdminConfig> {
    let mut config = AdminConfig::load_or_default(path)?;
    if let Some(url) = server {
        config.server.url = url;
    }
    tracing::debug!(server = %config.server.url, "Using server");
    Ok(config)
}

fn execute_repo(config: &AdminConfig, action: RepoAction) -> Result<()> {
    let server = HttpRepositoryApi::new(&config.server)?;
    let mut prompt = ConsolePrompt::new();
    let mut ctx = CommandContext::new(&server, &mut prompt);

    match action {
        RepoAction::Create { repo, publish } => {
            let raw = args::raw_arguments(&repo, &publish)?;
            CreateRepositoryCommand::new(WIN).run(&mut ctx, raw)?;
        }
        RepoAction::Update { repo, publish } => {
            let raw = args::raw_arguments(&repo, &publish)?;
            UpdateRepositoryCommand::new(WIN).run(&mut ctx, raw)?;
        }
        RepoAction::List {
            summary,
            details,
            all,
        } => {
            let options = ListOptions {
                summary,
                details,
                all,
            };
            ListRepositoriesCommand::new(WIN).run(&mut ctx, options)?;
        }
    }
    Ok(())
}
