//! Assembly of the individual inference results into one build plan

use std::collections::BTreeMap;

use plan_fs::Source;
use serde::{Deserialize, Serialize};

use crate::application::application_from;
use crate::composer::{ComposerJson, parse_composer_json};
use crate::deps::apt_dependencies_from;
use crate::framework::framework_from;
use crate::types::{PhpApplication, PhpFramework, PhpProperty};
use crate::version::php_version_from;

/// Caller-supplied knobs for plan detection.
///
/// Deserializes from the `[php]` table of a project config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlanOptions {
    /// Application server in use, e.g. `swoole`. Empty means PHP-FPM.
    pub server: String,
    /// Explicit PHP version, bypassing constraint resolution.
    #[serde(rename = "version", skip_serializing_if = "Option::is_none")]
    pub version_override: Option<String>,
}

impl PlanOptions {
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version_override = Some(version.into());
        self
    }
}

/// Everything inferred about a PHP project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhpPlan {
    pub php_version: String,
    pub framework: PhpFramework,
    pub apt_dependencies: Vec<String>,
    pub application: PhpApplication,
    pub property: PhpProperty,
    pub server: String,
}

impl PhpPlan {
    /// Detect the plan for the project in `source`.
    ///
    /// `composer.json` is read once and shared by every inference step.
    pub fn detect(source: &dyn Source, options: &PlanOptions) -> Self {
        let composer = parse_composer_json(source);
        Self::from_manifest(composer.as_ref(), options)
    }

    /// Build the plan from an already loaded manifest.
    pub fn from_manifest(composer: Option<&ComposerJson>, options: &PlanOptions) -> Self {
        let php_version = match options.version_override.as_deref() {
            Some(version) if !version.is_empty() => {
                tracing::debug!(version, "using configured PHP version");
                version.to_string()
            }
            _ => php_version_from(composer),
        };
        let (application, property) = application_from(composer);

        Self {
            php_version,
            framework: framework_from(composer),
            apt_dependencies: apt_dependencies_from(composer, &options.server),
            application,
            property,
            server: options.server.clone(),
        }
    }

    /// Flatten the plan into string metadata for template rendering.
    pub fn to_meta(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("phpVersion".to_string(), self.php_version.clone()),
            ("framework".to_string(), self.framework.to_string()),
            ("deps".to_string(), self.apt_dependencies.join(" ")),
            ("app".to_string(), self.application.to_string()),
            ("property".to_string(), self.property.to_string()),
            ("server".to_string(), self.server.clone()),
        ])
    }
}
