//! Hook synchronization
//!
//! Reconciles the scripts in `.git/hooks/` with a validated configuration.
//! Per hook the outcome is: declared -> write (regardless of prior file
//! state), undeclared and preserved -> untouched, undeclared otherwise ->
//! delete when present. Operations run sequentially; a mid-run failure
//! leaves earlier hooks in their new state.

use std::path::Path;

use hooks_fs::{NormalizedPath, io};

use crate::config::HookConfig;
use crate::error::Result;
use crate::git;
use crate::names::VALID_HOOKS;

/// First line of every installed hook script.
pub const SHEBANG: &str = "#!/bin/sh\n";

/// What the synchronizer did for one hook name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Hook script written with the configured command
    Installed { command: String },
    /// Undeclared hook file deleted
    Removed,
    /// Left on disk by the preserve-unused policy
    Preserved,
    /// Declared, but no repository metadata directory was found
    SkippedNoRepository,
    /// Declared, but the configured value is not a command string
    SkippedNotACommand,
}

/// Per-hook synchronization record, in hook enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub hook: &'static str,
    pub action: SyncAction,
}

/// Reconcile the on-disk hooks with `config`.
///
/// An absent repository root downgrades each declared hook to an
/// informational skip instead of failing the run. Returns one outcome per
/// hook that was written, deleted, preserved, or skipped; untouched
/// absent hooks produce no record.
pub fn set_hooks_from_config(
    project_root: &Path,
    config: &HookConfig,
) -> Result<Vec<SyncOutcome>> {
    let git_root = git::resolve_git_root(project_root);
    let preserve = config.preserve_set();
    let mut outcomes = Vec::new();

    for hook in VALID_HOOKS {
        if let Some(value) = config.get(hook) {
            let action = match (&git_root, value.as_command()) {
                (None, _) => SyncAction::SkippedNoRepository,
                (Some(_), None) => {
                    tracing::warn!(hook, "declared value is not a command string");
                    SyncAction::SkippedNotACommand
                }
                (Some(root), Some(command)) => {
                    install_hook(root, hook, command)?;
                    SyncAction::Installed {
                        command: command.to_string(),
                    }
                }
            };
            outcomes.push(SyncOutcome { hook, action });
        } else if !preserve.contains(&hook) {
            if let Some(root) = &git_root
                && io::remove_file_if_exists(&root.join("hooks").join(hook))?
            {
                outcomes.push(SyncOutcome {
                    hook,
                    action: SyncAction::Removed,
                });
            }
        } else {
            outcomes.push(SyncOutcome {
                hook,
                action: SyncAction::Preserved,
            });
        }
    }

    Ok(outcomes)
}

/// Delete every managed hook unconditionally. Idempotent.
pub fn remove_hooks(project_root: &Path) -> Result<Vec<SyncOutcome>> {
    let Some(git_root) = git::resolve_git_root(project_root) else {
        tracing::debug!("no repository found, nothing to remove");
        return Ok(Vec::new());
    };

    let hooks_dir = git_root.join("hooks");
    let mut outcomes = Vec::new();
    for hook in VALID_HOOKS {
        if io::remove_file_if_exists(&hooks_dir.join(hook))? {
            outcomes.push(SyncOutcome {
                hook,
                action: SyncAction::Removed,
            });
        }
    }
    Ok(outcomes)
}

fn install_hook(git_root: &NormalizedPath, hook: &str, command: &str) -> Result<()> {
    let hooks_dir = git_root.join("hooks");
    if !hooks_dir.exists() {
        io::create_dir(&hooks_dir)?;
    }

    let hook_path = hooks_dir.join(hook);
    io::write_text(&hook_path, &format!("{SHEBANG}{command}"))?;
    io::set_executable(&hook_path)?;
    tracing::debug!(hook, command, "installed hook");
    Ok(())
}
