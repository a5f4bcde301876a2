//! PHP project metadata inference.
//!
//! Given a project [`Source`](plan_fs::Source), this crate reads
//! `composer.json` and answers four independent questions about the project:
//!
//! - which PHP version to build with ([`determine_php_version`])
//! - which framework it uses ([`determine_project_framework`])
//! - which apt packages it needs ([`determine_apt_dependencies`])
//! - which application variant it is ([`determine_application`])
//!
//! None of these fail. A missing or malformed manifest degrades every answer
//! to a documented default, so inference never blocks a build.

pub mod application;
pub mod composer;
pub mod deps;
pub mod error;
pub mod framework;
pub mod plan;
pub mod types;
pub mod version;

pub use application::determine_application;
pub use composer::{COMPOSER_JSON, ComposerJson, parse_composer_json};
pub use deps::{BASE_DEPENDENCIES, EMBEDDED_SERVER, determine_apt_dependencies};
pub use error::{Error, Result};
pub use framework::determine_project_framework;
pub use plan::{PhpPlan, PlanOptions};
pub use types::{PhpApplication, PhpFramework, PhpProperty};
pub use version::{DEFAULT_PHP_VERSION, determine_php_version, resolve_version_constraint};
