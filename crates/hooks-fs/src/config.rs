//! Format-agnostic configuration loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Extensions probed by [`ConfigLoader::discover`], in precedence order.
pub const CONFIG_EXTENSIONS: [&str; 4] = ["toml", "json", "yaml", "yml"];

/// Format-agnostic configuration loader.
///
/// Detects the format from the file extension and deserializes
/// transparently. Loading never validates content; callers decide what a
/// well-formed configuration looks like.
#[derive(Debug, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new ConfigLoader.
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    ///
    /// Returns `Ok(None)` when the file does not exist; a file that exists
    /// but fails to parse is an error, never silently skipped.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<Option<T>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = io::read_text(path)?;
        let extension = path.extension().unwrap_or("");

        let parsed = match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "TOML".into(),
                message: e.to_string(),
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            })?,
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_native(),
                format: "YAML".into(),
                message: e.to_string(),
            })?,
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.to_string(),
                });
            }
        };

        Ok(Some(parsed))
    }

    /// Locate and load `<base_name>.<ext>` inside `dir`.
    ///
    /// Extensions are probed in [`CONFIG_EXTENSIONS`] order; the first file
    /// that exists wins and its parse result is authoritative.
    pub fn discover<T: DeserializeOwned>(
        &self,
        dir: &NormalizedPath,
        base_name: &str,
    ) -> Result<Option<T>> {
        for extension in CONFIG_EXTENSIONS {
            let candidate = dir.join(&format!("{base_name}.{extension}"));
            if candidate.is_file() {
                tracing::debug!(path = %candidate, "found config file");
                return self.load(&candidate);
            }
        }
        Ok(None)
    }
}
