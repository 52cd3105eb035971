//! INI reader for `.conf` files.
//!
//! Supports the dialect the configuration files are written in:
//!
//! ```ini
//! ; comment
//! top_level = value
//!
//! [freeze]
//! repo_names = "example.git, other.git"
//! enabled = true      ; becomes "1"
//! ```
//!
//! Unquoted `true`/`on`/`yes` are read as `"1"`, unquoted
//! `false`/`off`/`no`/`none`/`null` as `""`. Quoted values are literal, so
//! `"true"` stays `"true"`.

use crate::{ConfigurationMapping, Error, Result};
use std::path::Path;

/// Section used for keys outside any `[section]` header.
pub const UNNAMED_SECTION: &str = "";

/// Parse INI `content` read from `path`.
///
/// With `with_sections` false every key lands in [`UNNAMED_SECTION`], later
/// keys overwriting earlier ones of the same name.
pub fn parse(content: &str, path: &Path, with_sections: bool) -> Result<ConfigurationMapping> {
    let mut mapping = ConfigurationMapping::new();
    let mut current = UNNAMED_SECTION.to_string();

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        let parse_error = |message: &str| Error::Parse {
            path: path.to_path_buf(),
            line: line_no,
            message: message.to_string(),
        };

        if let Some(rest) = line.strip_prefix('[') {
            let end = rest
                .find(']')
                .ok_or_else(|| parse_error("unterminated section header"))?;
            let name = rest[..end].trim();
            if name.is_empty() {
                return Err(parse_error("empty section name"));
            }
            if with_sections {
                current = name.to_string();
                mapping.ensure_section(name);
            }
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| parse_error("expected `key = value`"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(parse_error("empty key"));
        }

        let value = read_value(value.trim()).ok_or_else(|| parse_error("unterminated quoted value"))?;
        let section = if with_sections {
            current.as_str()
        } else {
            UNNAMED_SECTION
        };
        mapping.set(section, key, value);
    }

    Ok(mapping)
}

fn read_value(raw: &str) -> Option<String> {
    for quote in ['"', '\''] {
        if let Some(rest) = raw.strip_prefix(quote) {
            let end = rest.find(quote)?;
            return Some(rest[..end].to_string());
        }
    }

    let unquoted = raw.split(';').next().unwrap_or_default().trim();
    let value = match unquoted.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => "1",
        "false" | "off" | "no" | "none" | "null" => "",
        _ => unquoted,
    };
    Some(value.to_string())
}
