//! hookconf CLI
//!
//! Command-line access to the typed configuration domains used by the git
//! hooks.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::get::GetRequest;
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
        eprintln!("{}: failed to initialise logging: {e}", "warning".yellow());
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => {
            let output = execute_command(cmd, cli.root.as_deref())?;
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        None => {
            println!("{} typed configuration for git hooks", "hookconf".green().bold());
            println!();
            println!("Run {} for available commands.", "hookconf --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, root: Option<&std::path::Path>) -> Result<String> {
    match cmd {
        Commands::Get {
            name,
            section,
            key,
            kind,
            default,
            optional,
        } => {
            let registry = context::registry(&context::resolve_root(root)?)?;
            commands::run_get(
                &registry,
                GetRequest {
                    name: &name,
                    section: &section,
                    key: &key,
                    kind,
                    default: default.as_deref(),
                    optional,
                },
            )
        }
        Commands::Sections { name, json } => {
            let registry = context::registry(&context::resolve_root(root)?)?;
            commands::run_sections(&registry, &name, json)
        }
        Commands::Readme { domain } => commands::run_readme(domain.as_deref()),
        Commands::Whoami => {
            // No file is read, so any root will do
            let registry = context::registry(&context::resolve_root(root)?)?;
            commands::run_whoami(&registry)
        }
        Commands::Secret {
            name,
            section,
            key,
            prompt,
        } => {
            let registry = context::registry(&context::resolve_root(root)?)?;
            commands::run_secret(&registry, &name, &section, &key, prompt.as_deref())
        }
    }
}
