//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// buildplan - Infer build metadata for PHP projects
#[derive(Parser, Debug)]
#[command(name = "buildplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every detection command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProjectArgs {
    /// Project directory containing composer.json
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Application server in use (e.g. "swoole"); overrides buildplan.toml
    #[arg(short, long, env = "BUILDPLAN_PHP_SERVER")]
    pub server: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Detect and print the build plan for a PHP project
    ///
    /// Examples:
    ///   buildplan plan                 # Current directory
    ///   buildplan plan ./shop --json   # Machine readable
    ///   buildplan plan -s swoole       # Embedded server, no nginx
    Plan {
        #[command(flatten)]
        project: ProjectArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the flattened plan metadata as key=value lines
    Meta {
        #[command(flatten)]
        project: ProjectArgs,
    },
}
