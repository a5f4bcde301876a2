#![allow(dead_code)]

use plan_fs::MemorySource;
use plan_php::COMPOSER_JSON;
use serde_json::{Map, Value, json};

/// In-memory project whose composer.json declares `require`.
pub fn project_requiring(require: &[(&str, &str)]) -> MemorySource {
    let require: Map<String, Value> = require
        .iter()
        .map(|(name, constraint)| (name.to_string(), json!(constraint)))
        .collect();
    project_with(json!({ "name": "acme/app", "require": require }))
}

/// In-memory project with the given composer.json document.
pub fn project_with(composer: Value) -> MemorySource {
    MemorySource::new().with_file(COMPOSER_JSON, composer.to_string())
}

/// In-memory project with a raw composer.json body.
pub fn project_with_raw(content: &str) -> MemorySource {
    MemorySource::new().with_file(COMPOSER_JSON, content)
}
