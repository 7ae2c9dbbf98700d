//! Uninstall entry point

use std::path::Path;

use colored::Colorize;

use crate::error::Result;

/// Remove every managed hook from the repository enclosing `cwd`.
///
/// An absent repository is not an error; there is simply nothing to
/// remove.
pub fn run_uninstall(cwd: &Path) -> Result<()> {
    println!("{}", "[INFO] Removing git hooks from .git/hooks".green());
    hooks_core::remove_hooks(cwd)?;
    println!("{}", "[INFO] Successfully removed all git hooks".green());
    Ok(())
}
