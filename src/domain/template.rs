//! Format templates: the abstract shapes a build version can take.
//!
//! A template is three independent axes (prefix, suffix kind, hash) rather than a string.
//! Each of the twelve combinations has a canonical name such as `vX.YY.Z-rc-HASH`, which is
//! what users type on the command line and what configuration files store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::version::RC_SUFFIX;
use crate::domain::{ReleaseType, Version};
use crate::error::UnknownName;

/// What a template demands of the suffix slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixKind {
    /// No suffix allowed.
    Absent,
    /// Exactly the `rc` suffix.
    Rc,
    /// Any suffix other than `rc`.
    Generic,
}

impl SuffixKind {
    fn accepts(self, suffix: Option<&str>) -> bool {
        match (self, suffix) {
            (SuffixKind::Absent, None) => true,
            (SuffixKind::Rc, Some(s)) => s == RC_SUFFIX,
            (SuffixKind::Generic, Some(s)) => s != RC_SUFFIX,
            _ => false,
        }
    }
}

impl fmt::Display for SuffixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SuffixKind::Absent => "no",
            SuffixKind::Rc => "rc",
            SuffixKind::Generic => "custom",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    pub has_prefix: bool,
    pub suffix: SuffixKind,
    pub has_hash: bool,
}

impl Template {
    pub const fn new(has_prefix: bool, suffix: SuffixKind, has_hash: bool) -> Self {
        Template {
            has_prefix,
            suffix,
            has_hash,
        }
    }

    /// `vX.YY.Z`, the fallback when nothing else decides a format.
    pub const DEFAULT: Template = Template::new(true, SuffixKind::Absent, false);

    /// All twelve named templates, unprefixed first.
    pub const ALL: [Template; 12] = [
        Template::new(false, SuffixKind::Absent, false),
        Template::new(true, SuffixKind::Absent, false),
        Template::new(false, SuffixKind::Rc, false),
        Template::new(true, SuffixKind::Rc, false),
        Template::new(false, SuffixKind::Generic, false),
        Template::new(true, SuffixKind::Generic, false),
        Template::new(false, SuffixKind::Absent, true),
        Template::new(true, SuffixKind::Absent, true),
        Template::new(false, SuffixKind::Rc, true),
        Template::new(true, SuffixKind::Rc, true),
        Template::new(false, SuffixKind::Generic, true),
        Template::new(true, SuffixKind::Generic, true),
    ];

    /// The template a parsed version satisfies.
    pub fn of(version: &Version) -> Self {
        Template::infer(
            version.has_prefix(),
            version.suffix.as_deref(),
            version.hash.as_deref(),
        )
    }

    /// Build a template from the presence of each part.
    pub fn infer(has_prefix: bool, suffix: Option<&str>, hash: Option<&str>) -> Self {
        let suffix = match suffix {
            None => SuffixKind::Absent,
            Some(RC_SUFFIX) => SuffixKind::Rc,
            Some(_) => SuffixKind::Generic,
        };
        Template::new(has_prefix, suffix, hash.is_some())
    }

    /// Canonical template for a release type. Canonical templates are always prefixed.
    pub fn for_type(release_type: ReleaseType) -> Self {
        let (suffix, has_hash) = match release_type {
            ReleaseType::Release => (SuffixKind::Absent, false),
            ReleaseType::Rc => (SuffixKind::Rc, false),
            ReleaseType::Dev => (SuffixKind::Absent, true),
            ReleaseType::RcDev => (SuffixKind::Rc, true),
            ReleaseType::Custom => (SuffixKind::Generic, false),
            ReleaseType::CustomDev => (SuffixKind::Generic, true),
        };
        Template::new(true, suffix, has_hash)
    }

    pub fn release_type(self) -> ReleaseType {
        match (self.suffix, self.has_hash) {
            (SuffixKind::Absent, false) => ReleaseType::Release,
            (SuffixKind::Absent, true) => ReleaseType::Dev,
            (SuffixKind::Rc, false) => ReleaseType::Rc,
            (SuffixKind::Rc, true) => ReleaseType::RcDev,
            (SuffixKind::Generic, false) => ReleaseType::Custom,
            (SuffixKind::Generic, true) => ReleaseType::CustomDev,
        }
    }

    /// Whether `version` has exactly the shape this template describes.
    pub fn matches(&self, version: &Version) -> bool {
        self.has_prefix == version.has_prefix()
            && self.has_hash == version.has_hash()
            && self.suffix.accepts(version.suffix.as_deref())
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::DEFAULT
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_prefix {
            f.write_str("v")?;
        }
        f.write_str("X.YY.Z")?;
        match self.suffix {
            SuffixKind::Absent => {}
            SuffixKind::Rc => f.write_str("-rc")?,
            SuffixKind::Generic => f.write_str("-<suffix>")?,
        }
        if self.has_hash {
            f.write_str("-HASH")?;
        }
        Ok(())
    }
}

impl FromStr for Template {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|template| template.to_string() == s)
            .ok_or_else(|| UnknownName::Template(s.to_string()))
    }
}

impl TryFrom<String> for Template {
    type Error = UnknownName;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.to_string()
    }
}
