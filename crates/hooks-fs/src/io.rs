//! Plain, synchronous file operations
//!
//! Hook installation is deliberately last-writer-wins: no locking and no
//! write-to-temp-then-rename, every operation completes before the next
//! one starts.

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file, creating or truncating it.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    let native_path = path.to_native();
    fs::write(&native_path, content).map_err(|e| Error::io(&native_path, e))
}

/// Create a single directory level.
///
/// Succeeds when the directory already exists; fails when more than one
/// path segment is missing.
pub fn create_dir(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    match fs::create_dir(&native_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Delete a file when it exists.
///
/// Returns whether a file was actually removed; an absent file is not an
/// error.
pub fn remove_file_if_exists(path: &NormalizedPath) -> Result<bool> {
    let native_path = path.to_native();
    match fs::remove_file(&native_path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Mark a file as executable (`rwxr-xr-x`).
#[cfg(unix)]
pub fn set_executable(path: &NormalizedPath) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let native_path = path.to_native();
    fs::set_permissions(&native_path, fs::Permissions::from_mode(0o755))
        .map_err(|e| Error::io(&native_path, e))
}

/// Permission bits carry no executable semantics on this platform.
#[cfg(not(unix))]
pub fn set_executable(_path: &NormalizedPath) -> Result<()> {
    Ok(())
}
