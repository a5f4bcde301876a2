//! Application detection, used to apply application-specific fixes such as
//! a custom nginx configuration.

use plan_fs::Source;

use crate::composer::{ComposerJson, parse_composer_json};
use crate::types::{PhpApplication, PhpProperty};

/// An application recognized by its composer package name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationRule {
    pub name: &'static str,
    pub application: PhpApplication,
}

impl ApplicationRule {
    pub fn matches(&self, composer: &ComposerJson) -> bool {
        composer.name == self.name
    }
}

/// Known applications in priority order.
pub static APPLICATION_RULES: &[ApplicationRule] = &[ApplicationRule {
    name: "lizhipay/acg-faka",
    application: PhpApplication::AcgFaka,
}];

/// Determine what application the project is, and which manifest said so.
pub fn determine_application(source: &dyn Source) -> (PhpApplication, PhpProperty) {
    application_from(parse_composer_json(source).as_ref())
}

/// Determine the application from an already loaded manifest.
pub fn application_from(composer: Option<&ComposerJson>) -> (PhpApplication, PhpProperty) {
    let Some(composer) = composer else {
        return (PhpApplication::Default, PhpProperty::None);
    };

    let application = APPLICATION_RULES
        .iter()
        .find(|rule| rule.matches(composer))
        .map_or(PhpApplication::Default, |rule| rule.application);

    (application, PhpProperty::Composer)
}
