use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::version::{is_hex, is_valid_prefix, is_valid_suffix};
use crate::domain::{split_tail, Field, Version};
use crate::error::ParseError;

/// Outer shape. The prefix run is checked against its own rule afterwards, and so are the
/// suffix and hash once the tail has been split.
static SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^0-9]*)([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([A-Za-z0-9-]+))?$").unwrap()
});

/// Parse a build version string.
///
/// # Examples
/// ```
/// use build_version::parser::parse;
///
/// let version = parse("v1.2.3-beta-abc1234").unwrap();
/// assert_eq!(version.prefix.as_deref(), Some("v"));
/// assert_eq!(version.suffix.as_deref(), Some("beta"));
/// assert_eq!(version.hash.as_deref(), Some("abc1234"));
/// ```
pub fn parse(input: &str) -> Result<Version, ParseError> {
    let captures = SHAPE_RE
        .captures(input)
        .ok_or_else(|| ParseError::MalformedShape(input.to_string()))?;

    let prefix = match captures.get(1).map(|m| m.as_str()) {
        None | Some("") => None,
        Some(prefix) if is_valid_prefix(prefix) => Some(prefix.to_string()),
        Some(prefix) => return Err(invalid(Field::Prefix, prefix)),
    };

    let major = number(&captures, 2, Field::Major)?;
    let minor = number(&captures, 3, Field::Minor)?;
    let patch = number(&captures, 4, Field::Patch)?;

    let tail = split_tail(captures.get(5).map_or("", |m| m.as_str()));

    if let Some(suffix) = tail.suffix {
        if !is_valid_suffix(suffix) {
            return Err(invalid(Field::Suffix, suffix));
        }
    }
    if let Some(hash) = tail.hash {
        if !is_hex(hash) {
            return Err(invalid(Field::Hash, hash));
        }
    }

    Ok(Version {
        prefix,
        major,
        minor,
        patch,
        suffix: tail.suffix.map(str::to_string),
        hash: tail.hash.map(str::to_string),
    })
}

fn number(captures: &Captures<'_>, group: usize, field: Field) -> Result<u64, ParseError> {
    let digits = captures.get(group).map_or("", |m| m.as_str());
    digits.parse::<u64>().map_err(|_| invalid(field, digits))
}

fn invalid(component: Field, value: &str) -> ParseError {
    ParseError::InvalidComponent {
        component,
        value: value.to_string(),
    }
}
