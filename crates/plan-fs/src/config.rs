//! Format-agnostic configuration loading

use crate::{Error, NormalizedPath, Result, Source};
use serde::de::DeserializeOwned;

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes
/// transparently from any [`Source`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a project file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, source: &dyn Source, path: &str) -> Result<T> {
        let normalized = NormalizedPath::new(path);
        let extension = normalized.extension().unwrap_or("").to_lowercase();

        // Reject unknown formats before touching the source.
        if !matches!(extension.as_str(), "toml" | "json" | "yaml" | "yml") {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = source.read_text(path)?;
        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: normalized.to_native(),
            format: format.into(),
            message,
        };

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string())),
            "json" => {
                serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string()))
            }
            _ => serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string())),
        }
    }

    /// Load the first candidate file that exists in the source.
    ///
    /// Returns `Ok(None)` when none of the candidates exist. A candidate
    /// that exists but fails to parse is an error, it does not fall through
    /// to the next one.
    pub fn load_first<T: DeserializeOwned>(
        &self,
        source: &dyn Source,
        candidates: &[&str],
    ) -> Result<Option<T>> {
        for candidate in candidates {
            if source.exists(candidate) {
                tracing::debug!(path = %candidate, "loading config");
                return self.load(source, candidate).map(Some);
            }
        }
        Ok(None)
    }
}
