//! Readme command implementation

use colored::Colorize;

use hookconf_core::domains;

use crate::error::{CliError, Result};

/// Render the README of one bundled domain, or of all of them.
pub fn run_readme(domain: Option<&str>) -> Result<String> {
    let bundled = domains::bundled();

    match domain {
        Some(wanted) => bundled
            .iter()
            .find(|(name, _)| name == wanted)
            .map(|(_, readme)| readme.trim().to_string())
            .ok_or_else(|| {
                let known: Vec<&str> = bundled.iter().map(|(name, _)| name.as_str()).collect();
                CliError::user(format!(
                    "Unknown domain '{wanted}'. Bundled domains: {}",
                    known.join(", ")
                ))
            }),
        None => Ok(bundled
            .iter()
            .map(|(name, readme)| format!("{} ({name}.conf)\n{}", name.as_str().bold(), readme.trim()))
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}
