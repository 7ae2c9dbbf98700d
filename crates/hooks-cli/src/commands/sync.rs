//! Default entry point: resolve the config and synchronize hooks

use std::path::Path;

use colored::Colorize;

use hooks_core::{SyncAction, SyncOutcome};

use crate::error::Result;

/// Resolve the hook configuration for `cwd` and reconcile `.git/hooks/`
/// with it. `custom_config` overrides source discovery.
pub fn run_sync(cwd: &Path, custom_config: Option<&str>) -> Result<()> {
    let config = hooks_core::resolve_config(cwd, custom_config)?;
    let outcomes = hooks_core::set_hooks_from_config(cwd, &config)?;
    report(&outcomes);
    Ok(())
}

/// Print one colored status line per user-visible outcome.
pub(crate) fn report(outcomes: &[SyncOutcome]) {
    for outcome in outcomes {
        match &outcome.action {
            SyncAction::Installed { command } => {
                println!(
                    "{}",
                    format!(
                        "[INFO] Successfully set the {} with command: {}",
                        outcome.hook, command
                    )
                    .green()
                );
            }
            SyncAction::SkippedNoRepository => {
                println!(
                    "{}",
                    format!(
                        "[INFO] No `.git` root folder found, skipping {}",
                        outcome.hook
                    )
                    .green()
                );
            }
            SyncAction::SkippedNotACommand => {
                println!(
                    "{}",
                    format!(
                        "[WARN] Value for {} is not a command string, skipping",
                        outcome.hook
                    )
                    .yellow()
                );
            }
            // Deletions and preserved hooks are silent
            SyncAction::Removed | SyncAction::Preserved => {}
        }
    }
}
