//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// git-hooks - Keep .git/hooks in sync with your project configuration
#[derive(Parser, Debug)]
#[command(name = "git-hooks")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a hook configuration file (overrides discovery)
    #[arg(value_name = "CONFIG")]
    pub config: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Set up hooks after dependency installation
    ///
    /// Run from inside node_modules; recovers the consuming project's
    /// root and installs its configured hooks.
    Install,

    /// Remove every managed hook from the repository
    Uninstall,
}
