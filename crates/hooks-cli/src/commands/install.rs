//! Post-install entry point
//!
//! Invoked by the package manager from inside the project's dependency
//! directory. Recovers the consuming project's root, confirms the project
//! actually depends on git-hooks, then runs a normal sync.

use std::path::{Path, PathBuf};

use colored::Colorize;

use hooks_core::{DependencyStatus, PackageManifest, project_root_from_dependency_path};

use crate::error::Result;

/// Install hooks for the project enclosing `cwd`.
///
/// When `cwd` is not a recognizable dependency-install path, it is
/// assumed to already be the project root. Does nothing when the
/// enclosing project does not depend on git-hooks (we are inside some
/// unrelated package's tree).
pub fn run_install(cwd: &Path) -> Result<()> {
    let project_root = project_root_from_dependency_path(&cwd.to_string_lossy())
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd.to_path_buf());

    let manifest = PackageManifest::read(&project_root)?;
    match manifest.depends_on_git_hooks() {
        DependencyStatus::Regular => {
            println!(
                "{}",
                "[WARN] You should move git-hooks to the devDependencies!".yellow()
            );
        }
        DependencyStatus::Dev => {}
        DependencyStatus::Absent => {
            tracing::debug!(
                root = %project_root.display(),
                "git-hooks not among project dependencies, nothing to do"
            );
            return Ok(());
        }
    }

    super::sync::run_sync(&project_root, None)
}
