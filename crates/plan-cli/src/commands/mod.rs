//! Command implementations for plan-cli

pub mod meta;
pub mod plan;

pub use meta::run_meta;
pub use plan::run_plan;

use std::path::Path;

use plan_fs::DirSource;
use plan_php::PhpPlan;

use crate::config::resolve_options;
use crate::error::{CliError, Result};

/// Open the project directory and detect its plan.
fn detect_plan(path: &Path, server_flag: Option<&str>) -> Result<PhpPlan> {
    if !path.is_dir() {
        return Err(CliError::user(format!(
            "Project directory not found: {}",
            path.display()
        )));
    }

    let source = DirSource::new(path);
    let options = resolve_options(&source, server_flag)?;
    tracing::debug!(path = %source.root(), ?options, "detecting PHP plan");
    Ok(PhpPlan::detect(&source, &options))
}
