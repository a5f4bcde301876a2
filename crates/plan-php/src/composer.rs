//! Composer manifest (`composer.json`) access.
//!
//! Only the fields inference needs are modeled. Everything else in the
//! manifest is ignored, but a `require` table whose values are not strings
//! makes the whole manifest unavailable.

use std::collections::BTreeMap;

use plan_fs::Source;
use serde::de::{self, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Conventional manifest location, relative to the project root.
pub const COMPOSER_JSON: &str = "composer.json";

/// The parts of `composer.json` used for inference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComposerJson {
    /// Package name, e.g. `laravel/laravel`. Empty when not declared.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Declared runtime dependencies: package name to version constraint.
    #[serde(default, deserialize_with = "require_table")]
    pub require: Option<BTreeMap<String, String>>,
}

impl ComposerJson {
    /// Parse a manifest from its JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse `composer.json` from the root of a source.
    pub fn from_source(source: &dyn Source) -> Result<Self> {
        if !source.exists(COMPOSER_JSON) {
            return Err(Error::ManifestNotFound);
        }
        let content = source.read_text(COMPOSER_JSON)?;
        Self::from_json(&content)
    }

    /// Look up the constraint declared for a dependency.
    pub fn get_require(&self, name: &str) -> Option<&str> {
        self.require.as_ref()?.get(name).map(String::as_str)
    }

    /// Whether a dependency is declared at all, regardless of its constraint.
    pub fn requires(&self, name: &str) -> bool {
        self.get_require(name).is_some()
    }

    /// Declared dependency names.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.require.iter().flat_map(|r| r.keys().map(String::as_str))
    }
}

/// Load `composer.json`, collapsing every failure into `None`.
///
/// This is the single point where a manifest becomes "unavailable"; the
/// cause is only logged.
pub fn parse_composer_json(source: &dyn Source) -> Option<ComposerJson> {
    match ComposerJson::from_source(source) {
        Ok(composer) => Some(composer),
        Err(e) => {
            tracing::debug!(error = %e, "composer.json unavailable, using defaults");
            None
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Composer writes an empty `require` as `[]` when the manifest was
/// generated from a PHP array, so an empty list is accepted as "no
/// dependencies". Any other list is rejected.
fn require_table<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<BTreeMap<String, String>>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Require {
        Table(BTreeMap<String, String>),
        List(Vec<IgnoredAny>),
        Null(()),
    }

    match Require::deserialize(deserializer)? {
        Require::Table(table) => Ok(Some(table)),
        // Deliberately lenient: a strict map decode would reject `[]` outright.
        Require::List(items) if items.is_empty() => Ok(Some(BTreeMap::new())),
        Require::List(_) => Err(de::Error::custom("require must be an object")),
        Require::Null(()) => Ok(None),
    }
}
