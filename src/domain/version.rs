use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::{ReleaseType, Template};
use crate::error::{ParseError, UnknownName};

/// Suffix value that marks a release candidate.
pub const RC_SUFFIX: &str = "rc";

/// Hex runs shorter than this are read as suffixes, not hashes.
pub const MIN_HASH_LEN: usize = 6;

static PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^0-9.]+$").unwrap());
static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());
static HASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-f]+$").unwrap());

pub fn is_valid_prefix(s: &str) -> bool {
    PREFIX_RE.is_match(s)
}

pub fn is_valid_suffix(s: &str) -> bool {
    SUFFIX_RE.is_match(s)
}

/// Lowercase hexadecimal only. Uppercase digits never qualify.
pub fn is_hex(s: &str) -> bool {
    HASH_RE.is_match(s)
}

/// A run of lowercase hex long enough to be taken as a commit hash.
pub fn is_hash_like(s: &str) -> bool {
    s.len() >= MIN_HASH_LEN && is_hex(s)
}

/// One named part of a build version, plus the two derived facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Prefix,
    Major,
    Minor,
    Patch,
    Suffix,
    Hash,
    Type,
    Format,
}

impl Field {
    /// Every field, in dump order.
    pub const ALL: [Field; 8] = [
        Field::Prefix,
        Field::Major,
        Field::Minor,
        Field::Patch,
        Field::Suffix,
        Field::Hash,
        Field::Type,
        Field::Format,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Prefix => "prefix",
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
            Field::Suffix => "suffix",
            Field::Hash => "hash",
            Field::Type => "type",
            Field::Format => "format",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownName::Field(s.to_string()))
    }
}

/// A decomposed build identifier such as `v1.2.3-rc-a1b2c3f`.
///
/// Values are produced by [`Version::parse`] and never mutated afterwards. An absent
/// prefix, suffix or hash is `None`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Version {
    pub prefix: Option<String>,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub suffix: Option<String>,
    pub hash: Option<String>,
}

impl Version {
    /// Parse a build version string (e.g. "v1.2.3-beta-abc1234").
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        crate::parser::parse(s)
    }

    pub fn release_type(&self) -> ReleaseType {
        ReleaseType::of(self.suffix.as_deref(), self.hash.is_some())
    }

    /// The template this version satisfies.
    pub fn template(&self) -> Template {
        Template::of(self)
    }

    pub fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    pub fn has_suffix(&self) -> bool {
        self.suffix.is_some()
    }

    pub fn has_hash(&self) -> bool {
        self.hash.is_some()
    }

    pub fn is_release(&self) -> bool {
        self.release_type() == ReleaseType::Release
    }

    pub fn is_rc(&self) -> bool {
        self.release_type() == ReleaseType::Rc
    }

    pub fn is_dev(&self) -> bool {
        self.release_type() == ReleaseType::Dev
    }

    pub fn is_rc_dev(&self) -> bool {
        self.release_type() == ReleaseType::RcDev
    }

    pub fn is_custom(&self) -> bool {
        self.release_type() == ReleaseType::Custom
    }

    pub fn is_custom_dev(&self) -> bool {
        self.release_type() == ReleaseType::CustomDev
    }

    /// String value of a field; absent optional parts read as an empty string.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Prefix => self.prefix.clone().unwrap_or_default(),
            Field::Major => self.major.to_string(),
            Field::Minor => self.minor.to_string(),
            Field::Patch => self.patch.to_string(),
            Field::Suffix => self.suffix.clone().unwrap_or_default(),
            Field::Hash => self.hash.clone().unwrap_or_default(),
            Field::Type => self.release_type().to_string(),
            Field::Format => self.template().to_string(),
        }
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            f.write_str(prefix)?;
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "-{}", suffix)?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "-{}", hash)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(prefix: Option<&str>, suffix: Option<&str>, hash: Option<&str>) -> Version {
        Version {
            prefix: prefix.map(str::to_string),
            major: 1,
            minor: 2,
            patch: 3,
            suffix: suffix.map(str::to_string),
            hash: hash.map(str::to_string),
        }
    }

    #[test]
    fn test_char_classes() {
        assert!(is_valid_prefix("v"));
        assert!(is_valid_prefix("release-"));
        assert!(!is_valid_prefix("v."));
        assert!(!is_valid_prefix("v1"));
        assert!(!is_valid_prefix(""));

        assert!(is_valid_suffix("beta-2"));
        assert!(is_valid_suffix("ABCDEF"));
        assert!(!is_valid_suffix("rc.1"));
        assert!(!is_valid_suffix(""));

        assert!(is_hex("abc123"));
        assert!(!is_hex("ABC123"));
        assert!(!is_hex("abcg"));
    }

    #[test]
    fn test_hash_like_threshold() {
        assert!(!is_hash_like("abcde"));
        assert!(is_hash_like("abcdef"));
        assert!(!is_hash_like("ABCDEF"));
    }

    #[test]
    fn test_display() {
        assert_eq!(version(None, None, None).to_string(), "1.2.3");
        assert_eq!(
            version(Some("v"), Some("rc"), Some("abc123f")).to_string(),
            "v1.2.3-rc-abc123f"
        );
        assert_eq!(
            version(None, None, Some("abc1234")).to_string(),
            "1.2.3-abc1234"
        );
    }

    #[test]
    fn test_predicates() {
        let v = version(Some("v"), Some("rc"), Some("abc123"));
        assert!(v.has_prefix() && v.has_suffix() && v.has_hash());
        assert!(v.is_rc_dev());
        assert!(!v.is_rc());

        let v = version(None, Some("beta"), None);
        assert!(v.is_custom());
        assert!(!v.has_prefix());
    }

    #[test]
    fn test_get_fields() {
        let v = version(Some("v"), Some("beta"), Some("abc123"));
        assert_eq!(v.get(Field::Prefix), "v");
        assert_eq!(v.get(Field::Patch), "3");
        assert_eq!(v.get(Field::Type), "custom-dev");
        assert_eq!(v.get(Field::Format), "vX.YY.Z-<suffix>-HASH");
        assert_eq!(version(None, None, None).get(Field::Hash), "");
    }

    #[test]
    fn test_field_names() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "color".parse::<Field>(),
            Err(UnknownName::Field("color".to_string()))
        );
    }
}
