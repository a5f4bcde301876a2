//! PHP version resolution from composer constraints.
//!
//! Composer constraints describe a range; a build needs one version. The
//! resolver picks a single version heuristically from the first recognized
//! bound, without reconciling it against any other bound in the range:
//!
//! | atom   | resolved                                   |
//! |--------|--------------------------------------------|
//! | `8.2`  | `8.2` (only when it is the whole constraint) |
//! | `>=X`  | `X`                                        |
//! | `>X`   | `X + 0.1`, six decimal places              |
//! | `<=X`  | `X`                                        |
//! | `<X`   | `X - 0.1`, six decimal places              |
//!
//! Anything else (`^8.1`, `~7.4`, `||`) is skipped. When nothing resolves,
//! [`DEFAULT_PHP_VERSION`] is used.
//!
//! # Examples
//!
//! ```
//! use plan_php::resolve_version_constraint;
//!
//! assert_eq!(resolve_version_constraint(">=8.1 <8.4").as_deref(), Some("8.1"));
//! assert_eq!(resolve_version_constraint(">8.0").as_deref(), Some("8.100000"));
//! assert_eq!(resolve_version_constraint("^8.1"), None);
//! ```

use std::sync::LazyLock;

use plan_fs::Source;
use regex::Regex;

use crate::composer::{ComposerJson, parse_composer_json};

/// PHP version used when the project does not pin one we can understand.
pub const DEFAULT_PHP_VERSION: &str = "8.1";

/// Step applied to exclusive bounds to move inside the range.
const EXCLUSIVE_BOUND_STEP: f64 = 0.1;

/// One to three dot-separated non-negative integers, ASCII digits only.
static BARE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+){0,2}$").unwrap());

/// Determine the PHP version a project should be built with.
pub fn determine_php_version(source: &dyn Source) -> String {
    php_version_from(parse_composer_json(source).as_ref())
}

/// Determine the PHP version from an already loaded manifest.
pub fn php_version_from(composer: Option<&ComposerJson>) -> String {
    composer
        .and_then(|c| c.get_require("php"))
        .and_then(resolve_version_constraint)
        .unwrap_or_else(|| DEFAULT_PHP_VERSION.to_string())
}

/// Resolve a constraint expression to a single version.
///
/// Returns `None` when the constraint is empty or no atom is recognized.
pub fn resolve_version_constraint(constraint: &str) -> Option<String> {
    if constraint.is_empty() {
        return None;
    }
    if BARE_VERSION.is_match(constraint) {
        return Some(constraint.to_string());
    }

    // Atoms are evaluated in declared order; the first recognized one wins.
    constraint.split(' ').find_map(resolve_atom)
}

fn resolve_atom(atom: &str) -> Option<String> {
    if let Some(version) = atom.strip_prefix(">=") {
        Some(version.to_string())
    } else if let Some(version) = atom.strip_prefix('>') {
        shift(atom, version, EXCLUSIVE_BOUND_STEP)
    } else if let Some(version) = atom.strip_prefix("<=") {
        Some(version.to_string())
    } else if let Some(version) = atom.strip_prefix('<') {
        shift(atom, version, -EXCLUSIVE_BOUND_STEP)
    } else {
        None
    }
}

/// Move an exclusive bound by `delta`, formatted with six decimal places.
///
/// An unparsable bound is logged and skipped so the next atom gets a chance.
fn shift(atom: &str, version: &str, delta: f64) -> Option<String> {
    match version.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(format!("{:.6}", value + delta)),
        _ => {
            tracing::warn!(atom, "unparsable PHP version bound, skipping");
            None
        }
    }
}
