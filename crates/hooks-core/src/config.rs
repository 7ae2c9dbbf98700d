//! Hook configuration: shape, validation, and multi-source resolution
//!
//! A configuration maps each key to either a shell command (hook keys) or
//! an option value. Resolution tries an ordered list of sources lazily and
//! validates the first non-empty result; a malformed config is always an
//! error, never silently skipped in favor of the next source.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use hooks_fs::{ConfigLoader, NormalizedPath};

use crate::error::{Error, Result};
use crate::manifest::PackageManifest;
use crate::names::{self, DEFAULT_CONFIG_BASE, PRESERVE_UNUSED, VALID_HOOKS};

/// A value in a hook configuration.
///
/// Hook keys carry the command to install; `preserveUnused` carries a
/// boolean or a list of hook names. Values are not validated beyond what
/// is needed to parse them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean option value
    Flag(bool),
    /// Shell command to install for a hook
    Command(String),
    /// List of hook names
    HookList(Vec<String>),
}

impl ConfigValue {
    /// The command string, when this value is one.
    pub fn as_command(&self) -> Option<&str> {
        match self {
            Self::Command(command) => Some(command),
            _ => None,
        }
    }
}

/// A resolved hook configuration.
///
/// Constructed fresh per invocation, consumed once by the synchronizer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct HookConfig(BTreeMap<String, ConfigValue>);

impl HookConfig {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Hook names protected from deletion by the preserve-unused policy.
    ///
    /// A list value protects exactly those names; a true flag protects
    /// every hook. `false`, an empty list, and an unset option all behave
    /// as an empty protect-set.
    pub fn preserve_set(&self) -> Vec<&str> {
        match self.0.get(PRESERVE_UNUSED) {
            Some(ConfigValue::HookList(list)) => list.iter().map(String::as_str).collect(),
            Some(ConfigValue::Flag(true)) => VALID_HOOKS.to_vec(),
            _ => Vec::new(),
        }
    }
}

impl From<BTreeMap<String, ConfigValue>> for HookConfig {
    fn from(entries: BTreeMap<String, ConfigValue>) -> Self {
        Self(entries)
    }
}

/// Whether every key is a recognized hook or option name.
///
/// No value-type checking; an empty config is vacuously valid (the
/// resolver treats it as "nothing found" instead).
pub fn is_valid(config: &HookConfig) -> bool {
    config
        .keys()
        .all(|key| names::is_known_hook(key) || names::is_known_option(key))
}

/// Resolve the hook configuration for a project.
///
/// Sources, in order, first non-empty result wins:
/// 1. `custom_path` when given;
/// 2. `git-hooks.{toml,json,yaml,yml}` in the project root;
/// 3. the `git-hooks` key in `package.json` — a string value there is a
///    path fed back through the file loader.
///
/// The winning result is validated; unrecognized keys fail the whole
/// resolution without falling through. No source yielding anything is
/// [`Error::ConfigNotFound`].
pub fn resolve_config(project_root: &Path, custom_path: Option<&str>) -> Result<HookConfig> {
    if project_root.as_os_str().is_empty() {
        return Err(Error::InvalidProjectRoot);
    }

    let root = NormalizedPath::new(project_root);
    let loader = ConfigLoader::new();
    let (loader, root) = (&loader, &root);

    let mut sources: Vec<Box<dyn Fn() -> Result<Option<HookConfig>> + '_>> = Vec::new();
    if let Some(path) = custom_path {
        sources.push(Box::new(move || load_explicit(loader, root, path)));
    }
    sources.push(Box::new(|| {
        loader
            .discover(root, DEFAULT_CONFIG_BASE)
            .map_err(Error::from)
    }));
    sources.push(Box::new(|| load_from_manifest(loader, root)));

    for source in &sources {
        let Some(config) = source()? else { continue };
        if config.is_empty() {
            continue;
        }
        if !is_valid(&config) {
            let unknown: Vec<&str> = config
                .keys()
                .filter(|key| !names::is_known_hook(key) && !names::is_known_option(key))
                .collect();
            return Err(Error::ConfigInvalid {
                message: format!("unrecognized keys: {}", unknown.join(", ")),
            });
        }
        tracing::debug!(keys = ?config.keys().collect::<Vec<_>>(), "resolved hook config");
        return Ok(config);
    }

    Err(Error::ConfigNotFound)
}

/// Load a user-supplied config path.
///
/// Relative paths resolve against the project root. A path without an
/// extension is treated as a base name and probed across the supported
/// extensions.
fn load_explicit(
    loader: &ConfigLoader,
    root: &NormalizedPath,
    path: &str,
) -> Result<Option<HookConfig>> {
    let candidate = NormalizedPath::new(path);
    let candidate = if candidate.is_absolute() {
        candidate
    } else {
        root.join(path)
    };

    if candidate.extension().is_some() {
        return Ok(loader.load(&candidate)?);
    }

    match (candidate.parent(), candidate.file_name()) {
        (Some(dir), Some(base)) => {
            let base = base.to_string();
            Ok(loader.discover(&dir, &base)?)
        }
        _ => Ok(loader.discover(root, path)?),
    }
}

/// Load the `git-hooks` key from `package.json`.
fn load_from_manifest(loader: &ConfigLoader, root: &NormalizedPath) -> Result<Option<HookConfig>> {
    let manifest = PackageManifest::read(root.as_ref())?;
    match manifest.git_hooks {
        None => Ok(None),
        // A string value is a pointer to an external config file
        Some(serde_json::Value::String(path)) => load_explicit(loader, root, &path),
        Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
            Error::ConfigInvalid {
                message: format!("`git-hooks` entry in package.json: {e}"),
            }
        }),
    }
}
