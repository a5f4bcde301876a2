//! Framework detection from declared composer dependencies

use plan_fs::Source;

use crate::composer::{ComposerJson, parse_composer_json};
use crate::types::PhpFramework;

/// A framework is identified by the package that ships it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkRule {
    pub package: &'static str,
    pub framework: PhpFramework,
}

impl FrameworkRule {
    pub fn matches(&self, composer: &ComposerJson) -> bool {
        composer.requires(self.package)
    }
}

/// Detection rules in priority order. The first matching rule wins.
pub static FRAMEWORK_RULES: &[FrameworkRule] = &[
    FrameworkRule {
        package: "laravel/framework",
        framework: PhpFramework::Laravel,
    },
    FrameworkRule {
        package: "topthink/framework",
        framework: PhpFramework::ThinkPhp,
    },
    FrameworkRule {
        package: "codeigniter4/framework",
        framework: PhpFramework::CodeIgniter,
    },
];

/// Determine the framework of the project.
pub fn determine_project_framework(source: &dyn Source) -> PhpFramework {
    framework_from(parse_composer_json(source).as_ref())
}

/// Determine the framework from an already loaded manifest.
pub fn framework_from(composer: Option<&ComposerJson>) -> PhpFramework {
    let Some(composer) = composer else {
        return PhpFramework::None;
    };

    FRAMEWORK_RULES
        .iter()
        .find(|rule| rule.matches(composer))
        .map_or(PhpFramework::None, |rule| rule.framework)
}
