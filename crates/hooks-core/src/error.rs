//! Error types for hooks-core

use std::path::PathBuf;

/// Result type for hooks-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hooks-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No configuration source yielded a result
    #[error(
        "Config was not found! Add a `git-hooks.toml` (or .json/.yaml) file \
         or a `git-hooks` entry in package.json"
    )]
    ConfigNotFound,

    /// A source yielded a configuration with unrecognized keys
    #[error("Config was not in correct format: {message}")]
    ConfigInvalid { message: String },

    /// The caller-supplied project root is not a usable path
    #[error("Check project root path! Expected a non-empty path")]
    InvalidProjectRoot,

    /// package.json missing or unparsable
    #[error("Failed to read package manifest at {path}: {message}")]
    ManifestUnreadable { path: PathBuf, message: String },

    /// Filesystem error from hooks-fs
    #[error(transparent)]
    Fs(#[from] hooks_fs::Error),
}
