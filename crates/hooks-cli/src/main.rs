//! git-hooks CLI
//!
//! Three entry points: a default invocation that syncs hooks from the
//! current directory (with an optional config-path argument), `install`
//! for post-dependency-install runs, and `uninstall`.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    // Best-effort policy: failures become a single red line and the
    // process still exits 0 so a dependency-install pipeline keeps going.
    if let Err(e) = run(&cli) {
        let message = match cli.command {
            Some(Commands::Uninstall) => {
                format!("[ERROR] Was not able to remove git hooks. Reason: {e}")
            }
            _ => format!("[ERROR] Was not able to set git hooks. Reason: {e}"),
        };
        println!("{}", message.red());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match &cli.command {
        Some(Commands::Install) => commands::run_install(&cwd),
        Some(Commands::Uninstall) => commands::run_uninstall(&cwd),
        None => commands::run_sync(&cwd, cli.config.as_deref()),
    }
}
