//! Plan command implementation

use std::path::Path;

use colored::Colorize;
use plan_php::{EMBEDDED_SERVER, PhpApplication, PhpPlan, PhpProperty};

use super::detect_plan;
use crate::error::Result;

/// Run the plan command
pub fn run_plan(path: &Path, server: Option<&str>, json: bool) -> Result<()> {
    let plan = detect_plan(path, server)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    print_plan(path, &plan);
    Ok(())
}

fn print_plan(path: &Path, plan: &PhpPlan) {
    println!("{}", "PHP Build Plan".bold());
    println!();

    println!("{}:        {}", "Path".dimmed(), path.display());
    println!("{}: {}", "PHP version".dimmed(), plan.php_version.cyan());
    println!("{}:   {}", "Framework".dimmed(), plan.framework.to_string().cyan());

    let application = match plan.application {
        PhpApplication::Default => plan.application.to_string().normal(),
        _ => plan.application.to_string().yellow(),
    };
    let property = match plan.property {
        PhpProperty::None => "no composer.json".dimmed(),
        PhpProperty::Composer => "from composer.json".dimmed(),
    };
    println!("{}: {} ({})", "Application".dimmed(), application, property);

    let server = if plan.server == EMBEDDED_SERVER {
        plan.server.green()
    } else if plan.server.is_empty() {
        "php-fpm + nginx".normal()
    } else {
        format!("{} + nginx", plan.server).normal()
    };
    println!("{}:      {}", "Server".dimmed(), server);
    println!();

    println!("{}:", "Apt Packages".bold());
    for package in &plan.apt_dependencies {
        println!("  {} {}", "+".green(), package);
    }
}
