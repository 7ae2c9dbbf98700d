//! Package manifest (`package.json`) access
//!
//! The install entry point needs two things from the consuming project's
//! manifest: whether it actually depends on this tool, and the optional
//! `git-hooks` top-level key used as a configuration fallback.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use hooks_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::names::TOOL_NAME;

/// Where `git-hooks` appears among the project's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Listed under `dependencies`; works, but belongs in devDependencies
    Regular,
    /// Listed under `devDependencies`
    Dev,
    /// Not listed at all
    Absent,
}

impl DependencyStatus {
    /// Whether the project depends on the tool in any section.
    pub fn is_present(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Parsed `package.json` content, limited to the fields this tool reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
    /// Raw value of the manifest's `git-hooks` key: either an inline hook
    /// map or a string path to an external config file.
    #[serde(default, rename = "git-hooks")]
    pub git_hooks: Option<serde_json::Value>,
}

impl PackageManifest {
    /// Read and parse `<project_root>/package.json`.
    ///
    /// A missing or unparsable manifest is fatal for callers that need it.
    pub fn read(project_root: &Path) -> Result<Self> {
        if project_root.as_os_str().is_empty() {
            return Err(Error::InvalidProjectRoot);
        }

        let path = NormalizedPath::new(project_root).join("package.json");
        let content = io::read_text(&path).map_err(|e| Error::ManifestUnreadable {
            path: path.to_native(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| Error::ManifestUnreadable {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Where this tool appears among the project's dependencies.
    pub fn depends_on_git_hooks(&self) -> DependencyStatus {
        if self.dependencies.contains_key(TOOL_NAME) {
            return DependencyStatus::Regular;
        }
        if self.dev_dependencies.contains_key(TOOL_NAME) {
            return DependencyStatus::Dev;
        }
        DependencyStatus::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, content: &str) {
        fs::write(dir.join("package.json"), content).unwrap();
    }

    #[test]
    fn test_read_exposes_git_hooks_key() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{ "name": "demo", "git-hooks": { "pre-commit": "npm test" } }"#,
        );

        let manifest = PackageManifest::read(temp.path()).unwrap();
        let value = manifest.git_hooks.unwrap();
        assert_eq!(value["pre-commit"], "npm test");
    }

    #[test]
    fn test_read_missing_manifest_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = PackageManifest::read(temp.path());
        assert!(matches!(result, Err(Error::ManifestUnreadable { .. })));
    }

    #[test]
    fn test_read_malformed_manifest_is_fatal() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "{ nope");
        let result = PackageManifest::read(temp.path());
        assert!(matches!(result, Err(Error::ManifestUnreadable { .. })));
    }

    #[test]
    fn test_read_rejects_empty_root() {
        let result = PackageManifest::read(Path::new(""));
        assert!(matches!(result, Err(Error::InvalidProjectRoot)));
    }

    #[test]
    fn test_dependency_status() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{ "devDependencies": { "git-hooks": "^1.0.0" } }"#,
        );
        let manifest = PackageManifest::read(temp.path()).unwrap();
        assert_eq!(manifest.depends_on_git_hooks(), DependencyStatus::Dev);
        assert!(manifest.depends_on_git_hooks().is_present());

        write_manifest(
            temp.path(),
            r#"{ "dependencies": { "git-hooks": "^1.0.0" } }"#,
        );
        let manifest = PackageManifest::read(temp.path()).unwrap();
        assert_eq!(manifest.depends_on_git_hooks(), DependencyStatus::Regular);

        write_manifest(temp.path(), r#"{ "dependencies": { "left-pad": "*" } }"#);
        let manifest = PackageManifest::read(temp.path()).unwrap();
        assert_eq!(manifest.depends_on_git_hooks(), DependencyStatus::Absent);
        assert!(!manifest.depends_on_git_hooks().is_present());
    }
}
