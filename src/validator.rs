//! Validation of raw strings against a template, a release type, or a single predicate.
//!
//! Every check parses first; an unparseable string fails every check with
//! [`ValidationError::Parse`].

use std::fmt;
use std::str::FromStr;

use crate::domain::{ReleaseType, Template, Version};
use crate::error::{ParseError, UnknownName, ValidationError};
use crate::parser::parse;

/// A single yes/no fact about a parsed version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    HasPrefix,
    HasSuffix,
    HasHash,
    IsRelease,
    IsRc,
    IsDev,
    IsRcDev,
    IsCustom,
    IsCustomDev,
}

impl Predicate {
    pub const ALL: [Predicate; 9] = [
        Predicate::HasPrefix,
        Predicate::HasSuffix,
        Predicate::HasHash,
        Predicate::IsRelease,
        Predicate::IsRc,
        Predicate::IsDev,
        Predicate::IsRcDev,
        Predicate::IsCustom,
        Predicate::IsCustomDev,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Predicate::HasPrefix => "has-prefix",
            Predicate::HasSuffix => "has-suffix",
            Predicate::HasHash => "has-hash",
            Predicate::IsRelease => "is-release",
            Predicate::IsRc => "is-rc",
            Predicate::IsDev => "is-dev",
            Predicate::IsRcDev => "is-rc-dev",
            Predicate::IsCustom => "is-custom",
            Predicate::IsCustomDev => "is-custom-dev",
        }
    }

    pub fn holds(self, version: &Version) -> bool {
        match self {
            Predicate::HasPrefix => version.has_prefix(),
            Predicate::HasSuffix => version.has_suffix(),
            Predicate::HasHash => version.has_hash(),
            Predicate::IsRelease => version.is_release(),
            Predicate::IsRc => version.is_rc(),
            Predicate::IsDev => version.is_dev(),
            Predicate::IsRcDev => version.is_rc_dev(),
            Predicate::IsCustom => version.is_custom(),
            Predicate::IsCustomDev => version.is_custom_dev(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Predicate {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Predicate::ALL
            .into_iter()
            .find(|predicate| predicate.name() == s)
            .ok_or_else(|| UnknownName::Predicate(s.to_string()))
    }
}

/// Parse-only check.
pub fn validate(input: &str) -> Result<(), ParseError> {
    parse(input).map(|_| ())
}

pub fn validate_against_template(input: &str, template: &Template) -> Result<(), ValidationError> {
    let version = parse(input)?;
    if template.matches(&version) {
        Ok(())
    } else {
        Err(ValidationError::TemplateMismatch {
            template: *template,
            actual: version.template(),
        })
    }
}

pub fn validate_against_type(input: &str, expected: ReleaseType) -> Result<(), ValidationError> {
    let actual = parse(input)?.release_type();
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationError::TypeMismatch { expected, actual })
    }
}

pub fn check(input: &str, predicate: Predicate) -> Result<(), ValidationError> {
    let version = parse(input)?;
    if predicate.holds(&version) {
        Ok(())
    } else {
        Err(ValidationError::PredicateFailed { predicate })
    }
}
