//! Project configuration (`buildplan.toml`)

use plan_fs::{ConfigStore, Source};
use plan_php::PlanOptions;
use serde::Deserialize;

use crate::error::Result;

/// Config files looked up in the project root, first match wins.
pub const CONFIG_CANDIDATES: &[&str] = &[
    "buildplan.toml",
    "buildplan.json",
    "buildplan.yaml",
    "buildplan.yml",
];

/// Top-level project configuration.
///
/// ```toml
/// [php]
/// server = "swoole"
/// version = "8.3"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub php: PlanOptions,
}

impl ProjectConfig {
    /// Load the project config, or defaults when the project has none.
    pub fn load(source: &dyn Source) -> Result<Self> {
        let config = ConfigStore::new().load_first(source, CONFIG_CANDIDATES)?;
        Ok(config.unwrap_or_default())
    }
}

/// Resolve the plan options: config file first, CLI flag on top.
pub fn resolve_options(source: &dyn Source, server_flag: Option<&str>) -> Result<PlanOptions> {
    let mut options = ProjectConfig::load(source)?.php;
    if let Some(server) = server_flag {
        tracing::debug!(server, "server overridden from command line");
        options.server = server.to_string();
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_fs::MemorySource;

    #[test]
    fn test_no_config_is_default() {
        let options = resolve_options(&MemorySource::new(), None).unwrap();
        assert_eq!(options, PlanOptions::default());
    }

    #[test]
    fn test_toml_config() {
        let source = MemorySource::new()
            .with_file("buildplan.toml", "[php]\nserver = \"swoole\"\nversion = \"8.3\"\n");
        let options = resolve_options(&source, None).unwrap();
        assert_eq!(options.server, "swoole");
        assert_eq!(options.version_override.as_deref(), Some("8.3"));
    }

    #[test]
    fn test_yaml_config() {
        let source = MemorySource::new().with_file("buildplan.yaml", "php:\n  server: swoole\n");
        let options = resolve_options(&source, None).unwrap();
        assert_eq!(options.server, "swoole");
    }

    #[test]
    fn test_flag_overrides_config() {
        let source =
            MemorySource::new().with_file("buildplan.toml", "[php]\nserver = \"swoole\"\n");
        let options = resolve_options(&source, Some("fpm")).unwrap();
        assert_eq!(options.server, "fpm");
    }

    #[test]
    fn test_config_without_php_table() {
        let source = MemorySource::new().with_file("buildplan.toml", "");
        let options = resolve_options(&source, None).unwrap();
        assert_eq!(options, PlanOptions::default());
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let source = MemorySource::new().with_file("buildplan.toml", "[php\nserver =");
        assert!(resolve_options(&source, None).is_err());
    }
}
