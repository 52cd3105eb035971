//! Get command implementation

use std::sync::Arc;

use hookconf_core::coercion;
use hookconf_core::{ConfigurationRegistry, ConfigurationView};

use crate::cli::ValueKind;
use crate::error::{CliError, Result};

/// Options for a single `get` lookup.
#[derive(Debug, Clone, Copy)]
pub struct GetRequest<'a> {
    pub name: &'a str,
    pub section: &'a str,
    pub key: &'a str,
    pub kind: ValueKind,
    pub default: Option<&'a str>,
    pub optional: bool,
}

/// Look up one value and render it as text.
///
/// Absent optional values render as an empty string. Arrays render one item
/// per line.
pub fn run_get(registry: &Arc<ConfigurationRegistry>, request: GetRequest<'_>) -> Result<String> {
    let view = ConfigurationView::open(registry, request.name)?;
    let GetRequest {
        section,
        key,
        default,
        ..
    } = request;
    let required = !request.optional;

    let rendered = match request.kind {
        ValueKind::Text => view
            .get_value(section, key, default, required)?
            .get_or_else(String::new()),
        ValueKind::Numeric => {
            let default = default
                .map(|raw| {
                    coercion::to_numeric(raw)
                        .ok_or_else(|| CliError::user(format!("Default {raw:?} is not numeric")))
                })
                .transpose()?;
            view.get_numeric(section, key, default, required)?
                .map(|value| value.to_string())
                .get_or_else(String::new())
        }
        ValueKind::Array => view
            .get_array(section, key, default.map(coercion::to_array), required)?
            .map(|items| items.join("\n"))
            .get_or_else(String::new()),
        ValueKind::Bool => view
            .get_bool(section, key, default.map(coercion::to_bool), required)?
            .to_string(),
    };

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookconf_core::{Error, NormalizedPath};
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Arc<ConfigurationRegistry>) {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("deploy.conf"),
            "[limits]\nretries = 3\nratio = 0.5\n[hosts]\nlist = \"a, b,c\"\nenabled = true\n",
        )
        .unwrap();
        let registry = crate::context::registry(temp.path()).unwrap();
        (temp, registry)
    }

    fn request<'a>(section: &'a str, key: &'a str, kind: ValueKind) -> GetRequest<'a> {
        GetRequest {
            name: "deploy",
            section,
            key,
            kind,
            default: None,
            optional: false,
        }
    }

    #[test]
    fn test_get_string() {
        let (_temp, registry) = setup();
        let out = run_get(&registry, request("limits", "retries", ValueKind::Text)).unwrap();
        assert_eq!(out, "3");
    }

    #[test]
    fn test_get_numeric() {
        let (_temp, registry) = setup();
        assert_eq!(run_get(&registry, request("limits", "retries", ValueKind::Numeric)).unwrap(), "3");
        assert_eq!(run_get(&registry, request("limits", "ratio", ValueKind::Numeric)).unwrap(), "0.5");
    }

    #[test]
    fn test_get_array_one_item_per_line() {
        let (_temp, registry) = setup();
        let out = run_get(&registry, request("hosts", "list", ValueKind::Array)).unwrap();
        assert_eq!(out, "a\nb\nc");
    }

    #[test]
    fn test_get_bool() {
        let (_temp, registry) = setup();
        assert_eq!(run_get(&registry, request("hosts", "enabled", ValueKind::Bool)).unwrap(), "true");
        assert_eq!(run_get(&registry, request("hosts", "list", ValueKind::Bool)).unwrap(), "false");
    }

    #[test]
    fn test_missing_optional_renders_empty() {
        let (_temp, registry) = setup();
        let mut req = request("limits", "missing", ValueKind::Text);
        req.optional = true;
        assert_eq!(run_get(&registry, req).unwrap(), "");
    }

    #[test]
    fn test_missing_required_fails() {
        let (_temp, registry) = setup();
        let err = run_get(&registry, request("limits", "missing", ValueKind::Text)).unwrap_err();
        assert!(matches!(err, CliError::Core(Error::MissingValue { .. })));
    }

    #[test]
    fn test_non_numeric_default_is_rejected() {
        let (_temp, registry) = setup();
        let mut req = request("limits", "missing", ValueKind::Numeric);
        req.default = Some("lots");
        assert!(matches!(run_get(&registry, req), Err(CliError::User { .. })));
    }

    #[test]
    fn test_default_is_coerced() {
        let (_temp, registry) = setup();
        let mut req = request("limits", "missing", ValueKind::Numeric);
        req.default = Some("7");
        assert_eq!(run_get(&registry, req).unwrap(), "7");
    }

    #[test]
    fn test_cache_is_reused_between_lookups() {
        let (_temp, registry) = setup();
        run_get(&registry, request("limits", "retries", ValueKind::Text)).unwrap();
        run_get(&registry, request("hosts", "list", ValueKind::Array)).unwrap();

        let cached: Vec<NormalizedPath> = registry.cached_paths();
        assert_eq!(cached.len(), 1);
    }
}
