//! Apt dependency mapping against realistic composer.json files.

mod common;

use std::collections::HashSet;

use common::{project_requiring, project_with, project_with_raw};
use plan_fs::MemorySource;
use plan_php::deps::WEB_SERVER_PACKAGE;
use plan_php::{BASE_DEPENDENCIES, EMBEDDED_SERVER, determine_apt_dependencies};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn assert_base_prefix(deps: &[String]) {
    assert!(deps.len() >= BASE_DEPENDENCIES.len());
    assert_eq!(&deps[..BASE_DEPENDENCIES.len()], BASE_DEPENDENCIES);
}

#[rstest]
#[case("")]
#[case("fpm")]
#[case("roadrunner")]
#[case("Swoole")]
#[case("swoole ")]
fn test_non_embedded_server_installs_nginx(#[case] server: &str) {
    let deps = determine_apt_dependencies(&MemorySource::new(), server);
    assert_base_prefix(&deps);
    assert_eq!(deps[BASE_DEPENDENCIES.len()], WEB_SERVER_PACKAGE);
}

#[test]
fn test_embedded_server_skips_nginx() {
    let source = project_requiring(&[("ext-gd", "*"), ("ext-zip", "*")]);
    let deps = determine_apt_dependencies(&source, EMBEDDED_SERVER);
    assert_base_prefix(&deps);
    assert!(!deps.iter().any(|d| d == WEB_SERVER_PACKAGE));
}

#[rstest]
#[case("ext-openssl", &["libssl-dev"])]
#[case("ext-zip", &["libzip-dev"])]
#[case("ext-curl", &["libcurl4-openssl-dev", "libssl-dev"])]
#[case("ext-gd", &["libpng-dev"])]
#[case("ext-gmp", &["libgmp-dev"])]
fn test_extension_packages(#[case] extension: &str, #[case] packages: &[&str]) {
    let source = project_requiring(&[("php", ">=8.1"), (extension, "*")]);
    let deps = determine_apt_dependencies(&source, EMBEDDED_SERVER);
    assert_eq!(&deps[BASE_DEPENDENCIES.len()..], packages);
}

#[test]
fn test_all_extensions_present_as_set() {
    let source = project_requiring(&[
        ("ext-openssl", "*"),
        ("ext-zip", "*"),
        ("ext-curl", "*"),
        ("ext-gd", "*"),
        ("ext-gmp", "*"),
        ("ext-mbstring", "*"),
    ]);
    let deps = determine_apt_dependencies(&source, "");

    assert_base_prefix(&deps);
    assert_eq!(deps[BASE_DEPENDENCIES.len()], WEB_SERVER_PACKAGE);

    // Extension order follows the manifest and is not part of the contract.
    let tail: Vec<&str> = deps[BASE_DEPENDENCIES.len() + 1..]
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(tail.len(), 6);
    let tail_set: HashSet<&str> = tail.into_iter().collect();
    let expected: HashSet<&str> = [
        "libssl-dev",
        "libzip-dev",
        "libcurl4-openssl-dev",
        "libpng-dev",
        "libgmp-dev",
    ]
    .into_iter()
    .collect();
    assert_eq!(tail_set, expected);
}

#[test]
fn test_duplicates_not_removed() {
    let source = project_requiring(&[("ext-openssl", "*"), ("ext-curl", "*")]);
    let deps = determine_apt_dependencies(&source, EMBEDDED_SERVER);
    assert_eq!(deps.iter().filter(|d| *d == "libssl-dev").count(), 2);
}

#[test]
fn test_unknown_dependencies_ignored() {
    let source = project_requiring(&[("ext-intl", "*"), ("laravel/framework", "^10.0")]);
    let deps = determine_apt_dependencies(&source, EMBEDDED_SERVER);
    assert_eq!(deps, BASE_DEPENDENCIES);
}

#[test]
fn test_no_require_section() {
    let source = project_with(json!({ "name": "acme/app" }));
    let deps = determine_apt_dependencies(&source, "");
    assert_eq!(deps.len(), BASE_DEPENDENCIES.len() + 1);
}

#[test]
fn test_malformed_manifest_returns_base_and_server() {
    let source = project_with_raw("{\"require\": ");
    let deps = determine_apt_dependencies(&source, "");
    assert_base_prefix(&deps);
    assert_eq!(deps.len(), BASE_DEPENDENCIES.len() + 1);
}

#[test]
fn test_base_list_not_mutated_between_calls() {
    let source = project_requiring(&[("ext-gd", "*")]);
    let first = determine_apt_dependencies(&source, "");
    let second = determine_apt_dependencies(&source, "");
    assert_eq!(first, second);
    assert_eq!(
        determine_apt_dependencies(&MemorySource::new(), EMBEDDED_SERVER),
        BASE_DEPENDENCIES
    );
}
