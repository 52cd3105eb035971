//! Sections command implementation

use std::sync::Arc;

use hookconf_core::{ConfigurationRegistry, ConfigurationView};

use crate::error::Result;

/// Render every `section.key = value` of configuration `name`.
///
/// Keys of the unnamed section (before any header) render without a
/// section prefix.
pub fn run_sections(registry: &Arc<ConfigurationRegistry>, name: &str, json: bool) -> Result<String> {
    let mapping = ConfigurationView::open(registry, name)?.snapshot();

    if json {
        return Ok(serde_json::to_string_pretty(&mapping)?);
    }

    let lines: Vec<String> = mapping
        .entries()
        .map(|(section, key, value)| {
            if section.is_empty() {
                format!("{key} = {value}")
            } else {
                format!("{section}.{key} = {value}")
            }
        })
        .collect();
    Ok(lines.join("\n"))
}
