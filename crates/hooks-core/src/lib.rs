//! Hook configuration resolution and synchronization
//!
//! Locates a repository's metadata directory, resolves a hook
//! configuration from an ordered list of sources, validates it against the
//! closed set of recognized hook and option names, and reconciles the
//! scripts in `.git/hooks/` with it.

pub mod config;
pub mod error;
pub mod git;
pub mod manifest;
pub mod names;
pub mod sync;

pub use config::{ConfigValue, HookConfig, is_valid, resolve_config};
pub use error::{Error, Result};
pub use git::{project_root_from_dependency_path, resolve_git_root};
pub use manifest::{DependencyStatus, PackageManifest};
pub use names::{DEFAULT_CONFIG_BASE, TOOL_NAME, VALID_HOOKS, VALID_OPTIONS};
pub use sync::{SHEBANG, SyncAction, SyncOutcome, remove_hooks, set_hooks_from_config};
