//! System (apt) package requirements of a PHP project

use plan_fs::Source;

use crate::composer::{ComposerJson, parse_composer_json};

/// Packages every PHP build needs.
pub const BASE_DEPENDENCIES: &[&str] = &["libicu-dev", "jq", "pkg-config", "unzip", "git"];

/// Server hint for projects served by an embedded application server.
///
/// Any other hint, including an empty one, means the application runs
/// behind nginx.
pub const EMBEDDED_SERVER: &str = "swoole";

/// Web server installed in front of PHP-FPM.
pub const WEB_SERVER_PACKAGE: &str = "nginx";

/// Packages needed to build the PHP extensions a manifest requires.
pub static EXTENSION_PACKAGES: &[(&str, &[&str])] = &[
    ("ext-openssl", &["libssl-dev"]),
    ("ext-zip", &["libzip-dev"]),
    ("ext-curl", &["libcurl4-openssl-dev", "libssl-dev"]),
    ("ext-gd", &["libpng-dev"]),
    ("ext-gmp", &["libgmp-dev"]),
];

/// Look up the packages an extension dependency needs.
pub fn packages_for(dependency: &str) -> Option<&'static [&'static str]> {
    EXTENSION_PACKAGES
        .iter()
        .find(|(name, _)| *name == dependency)
        .map(|(_, packages)| *packages)
}

/// Determine the apt packages required to build and run the project.
///
/// The result starts with [`BASE_DEPENDENCIES`], then nginx unless `server`
/// is [`EMBEDDED_SERVER`], then the packages of every recognized extension
/// in manifest order. Duplicates are kept.
pub fn determine_apt_dependencies(source: &dyn Source, server: &str) -> Vec<String> {
    apt_dependencies_from(parse_composer_json(source).as_ref(), server)
}

/// Determine the apt packages from an already loaded manifest.
pub fn apt_dependencies_from(composer: Option<&ComposerJson>, server: &str) -> Vec<String> {
    let mut dependencies: Vec<String> = BASE_DEPENDENCIES.iter().map(|d| d.to_string()).collect();

    if server != EMBEDDED_SERVER {
        dependencies.push(WEB_SERVER_PACKAGE.to_string());
    }

    let Some(composer) = composer else {
        return dependencies;
    };

    for dependency in composer.dependency_names() {
        if let Some(packages) = packages_for(dependency) {
            tracing::debug!(dependency, ?packages, "extension needs system packages");
            dependencies.extend(packages.iter().map(|p| p.to_string()));
        }
    }

    dependencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packages_for_known_extension() {
        assert_eq!(
            packages_for("ext-curl"),
            Some(&["libcurl4-openssl-dev", "libssl-dev"][..])
        );
    }

    #[test]
    fn test_packages_for_unknown_extension() {
        assert_eq!(packages_for("ext-intl"), None);
        assert_eq!(packages_for("laravel/framework"), None);
    }

    #[test]
    fn test_table_keys_unique() {
        for (i, (name, _)) in EXTENSION_PACKAGES.iter().enumerate() {
            assert!(EXTENSION_PACKAGES[i + 1..].iter().all(|(other, _)| other != name));
        }
    }

    #[test]
    fn test_without_manifest_embedded_server() {
        assert_eq!(apt_dependencies_from(None, EMBEDDED_SERVER), BASE_DEPENDENCIES);
    }

    #[test]
    fn test_without_manifest_default_server() {
        let deps = apt_dependencies_from(None, "");
        assert_eq!(deps.last().map(String::as_str), Some(WEB_SERVER_PACKAGE));
        assert_eq!(deps.len(), BASE_DEPENDENCIES.len() + 1);
    }

    #[test]
    fn test_duplicates_kept() {
        let composer = ComposerJson::from_json(
            r#"{"require": {"ext-openssl": "*", "ext-curl": "*"}}"#,
        )
        .unwrap();
        let deps = apt_dependencies_from(Some(&composer), EMBEDDED_SERVER);
        assert_eq!(deps.iter().filter(|d| *d == "libssl-dev").count(), 2);
    }
}
