//! buildplan CLI
//!
//! Detects the build plan of a PHP project from its composer.json.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} PHP build plan detection", "buildplan".green().bold());
            println!();
            println!("Run {} for available commands.", "buildplan --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Plan { project, json } => {
            commands::run_plan(&project.path, project.server.as_deref(), json)
        }
        Commands::Meta { project } => commands::run_meta(&project.path, project.server.as_deref()),
    }
}
