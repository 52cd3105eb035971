//! Raw string to typed value conversions used by the typed getters.
//!
//! These are deliberately narrow conventions, not general parsers:
//!
//! - booleans are true only for `"true"` and `"1"`
//! - arrays split on a comma followed by at most one ASCII whitespace character
//! - numerics are integers when all digits, floats when otherwise numeric

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static ARRAY_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(?-u:\s)?").expect("static separator pattern"));

static NUMERIC_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$")
        .expect("static numeric pattern")
});

/// A numeric configuration value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    /// Integer values as-is; floats truncated toward zero.
    pub fn as_i64(&self) -> i64 {
        match *self {
            Self::Integer(value) => value,
            Self::Float(value) => value as i64,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// Convert a raw value into a [`Numeric`].
///
/// Returns `None` when the value is not numeric-shaped; callers attach the
/// section and key to the error.
pub fn to_numeric(raw: &str) -> Option<Numeric> {
    if is_all_digits(raw) {
        // Digit strings too long for i64 still count as numeric
        return match raw.parse::<i64>() {
            Ok(value) => Some(Numeric::Integer(value)),
            Err(_) => raw.parse::<f64>().ok().map(Numeric::Float),
        };
    }

    if NUMERIC_SHAPE.is_match(raw) {
        return raw.trim().parse::<f64>().ok().map(Numeric::Float);
    }

    None
}

/// Split a raw value on `,` plus at most one ASCII whitespace character.
///
/// Non-ASCII whitespace such as U+00A0 is kept as part of the next item.
///
/// `"a,b, c"` yields `["a", "b", "c"]` while `"a,  b"` yields `["a", " b"]`.
pub fn to_array(raw: &str) -> Vec<String> {
    ARRAY_SEPARATOR.split(raw).map(str::to_string).collect()
}

/// `true` only for the literal strings `"true"` and `"1"`.
///
/// `"1"` is what the INI reader produces for an unquoted `true`.
pub fn to_bool(raw: &str) -> bool {
    raw == "true" || raw == "1"
}

fn is_all_digits(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}
