//! Meta command implementation

use std::path::Path;

use super::detect_plan;
use crate::error::Result;

/// Run the meta command
pub fn run_meta(path: &Path, server: Option<&str>) -> Result<()> {
    let plan = detect_plan(path, server)?;
    for (key, value) in plan.to_meta() {
        println!("{key}={value}");
    }
    Ok(())
}
