//! Builds version strings from components.
//!
//! The format is fixed by the first rule that applies:
//!
//! 1. an explicit template
//! 2. an explicit release type, through [`Template::for_type`]
//! 3. a template inferred from which parts were supplied or excluded
//! 4. the configured default template, when the request carries no signal at all
//!
//! The composer never emits a string that [`parse`](crate::parser::parse) would read back
//! differently, so `parse(compose(v))` always yields `v`.

use std::fmt;

use crate::config::Defaults;
use crate::domain::version::{is_hash_like, is_hex, is_valid_prefix, is_valid_suffix};
use crate::domain::version::{MIN_HASH_LEN, RC_SUFFIX};
use crate::domain::{Field, ReleaseType, SuffixKind, Template, Version};
use crate::error::ComposeError;
use crate::warning::ComposeWarning;

/// Which priority rule decided the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionRule {
    ExplicitTemplate,
    ExplicitType,
    Inferred,
    Default,
}

impl fmt::Display for ResolutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResolutionRule::ExplicitTemplate => "explicit format",
            ResolutionRule::ExplicitType => "explicit type",
            ResolutionRule::Inferred => "inferred from components",
            ResolutionRule::Default => "default format",
        })
    }
}

/// Inputs to [`compose`]. Empty strings count as absent.
///
/// When both `template` and `release_type` are set, the template wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeRequest {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub hash: Option<String>,
    pub exclude_prefix: bool,
    pub exclude_suffix: bool,
    /// Seeded from a version without a prefix. Shapes inference like `exclude_prefix`, but a
    /// format that needs a prefix fills in the default without a warning.
    pub unprefixed: bool,
    pub template: Option<Template>,
    pub release_type: Option<ReleaseType>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|s| !s.is_empty())
}

impl ComposeRequest {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ComposeRequest {
            major: Some(major),
            minor: Some(minor),
            patch: Some(patch),
            ..ComposeRequest::default()
        }
    }

    /// Seed a request with every part of an already parsed version.
    ///
    /// An unprefixed version is marked `unprefixed`, so inference reproduces its shape.
    pub fn from_version(version: &Version) -> Self {
        ComposeRequest {
            major: Some(version.major),
            minor: Some(version.minor),
            patch: Some(version.patch),
            prefix: version.prefix.clone(),
            suffix: version.suffix.clone(),
            hash: version.hash.clone(),
            exclude_prefix: false,
            exclude_suffix: false,
            unprefixed: version.prefix.is_none(),
            template: None,
            release_type: None,
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = non_empty(prefix);
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = non_empty(suffix);
        self
    }

    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = non_empty(hash);
        self
    }

    pub fn exclude_prefix(mut self) -> Self {
        self.exclude_prefix = true;
        self
    }

    pub fn exclude_suffix(mut self) -> Self {
        self.exclude_suffix = true;
        self
    }

    pub fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn release_type(mut self, release_type: ReleaseType) -> Self {
        self.release_type = Some(release_type);
        self
    }

    /// Layer explicitly set values from `overrides` on top of this request.
    ///
    /// A prefix given in `overrides` replaces an unprefixed seed.
    pub fn with_overrides(mut self, overrides: &ComposeRequest) -> Self {
        self.major = overrides.major.or(self.major);
        self.minor = overrides.minor.or(self.minor);
        self.patch = overrides.patch.or(self.patch);
        if overrides.prefix.is_some() {
            self.prefix = overrides.prefix.clone();
            self.unprefixed = false;
        }
        if overrides.suffix.is_some() {
            self.suffix = overrides.suffix.clone();
        }
        if overrides.hash.is_some() {
            self.hash = overrides.hash.clone();
        }
        self.exclude_prefix |= overrides.exclude_prefix;
        self.exclude_suffix |= overrides.exclude_suffix;
        self.template = overrides.template.or(self.template);
        self.release_type = overrides.release_type.or(self.release_type);
        self
    }

    fn effective_prefix(&self) -> Option<&str> {
        if self.exclude_prefix || self.unprefixed {
            None
        } else {
            self.prefix.as_deref().filter(|s| !s.is_empty())
        }
    }

    fn effective_suffix(&self) -> Option<&str> {
        if self.exclude_suffix {
            None
        } else {
            self.suffix.as_deref().filter(|s| !s.is_empty())
        }
    }

    fn effective_hash(&self) -> Option<&str> {
        self.hash.as_deref().filter(|s| !s.is_empty())
    }

    fn has_signal(&self) -> bool {
        self.effective_prefix().is_some()
            || self.effective_suffix().is_some()
            || self.effective_hash().is_some()
            || self.exclude_prefix
            || self.exclude_suffix
            || self.unprefixed
    }
}

/// A composed version and how it came about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub version: String,
    pub template: Template,
    pub rule: ResolutionRule,
    pub warnings: Vec<ComposeWarning>,
}

/// Pick the template for a request.
pub fn resolve_template(
    request: &ComposeRequest,
    defaults: &Defaults,
) -> Result<(Template, ResolutionRule), ComposeError> {
    match (request.template, request.release_type) {
        (Some(template), _) => Ok((template, ResolutionRule::ExplicitTemplate)),
        (None, Some(release_type)) => {
            let template = Template::for_type(release_type);
            if template.suffix == SuffixKind::Rc {
                if let Some(suffix) = request.effective_suffix().filter(|s| *s != RC_SUFFIX) {
                    return Err(ComposeError::SuffixConflict {
                        suffix: suffix.to_string(),
                        expected: SuffixKind::Rc,
                    });
                }
            }
            Ok((template, ResolutionRule::ExplicitType))
        }
        (None, None) if request.has_signal() => Ok((
            Template::infer(
                !(request.exclude_prefix || request.unprefixed),
                request.effective_suffix(),
                request.effective_hash(),
            ),
            ResolutionRule::Inferred,
        )),
        (None, None) => Ok((defaults.template, ResolutionRule::Default)),
    }
}

/// Compose a version string.
///
/// # Examples
/// ```
/// use build_version::composer::{compose, ComposeRequest};
/// use build_version::config::Defaults;
///
/// let request = ComposeRequest::new(1, 2, 3).hash("abc1234");
/// let composed = compose(&request, &Defaults::default()).unwrap();
/// assert_eq!(composed.version, "v1.2.3-abc1234");
/// assert_eq!(composed.template.to_string(), "vX.YY.Z-HASH");
/// ```
pub fn compose(request: &ComposeRequest, defaults: &Defaults) -> Result<Composition, ComposeError> {
    let major = request
        .major
        .ok_or(ComposeError::MissingComponent(Field::Major))?;
    let minor = request
        .minor
        .ok_or(ComposeError::MissingComponent(Field::Minor))?;
    let patch = request
        .patch
        .ok_or(ComposeError::MissingComponent(Field::Patch))?;

    let prefix = request.effective_prefix();
    let suffix = request.effective_suffix();
    let hash = request.effective_hash();
    check_components(prefix, suffix, hash)?;

    let (template, rule) = resolve_template(request, defaults)?;
    let mut warnings = Vec::new();
    let mut version = String::new();

    if template.has_prefix {
        if request.exclude_prefix {
            warnings.push(ComposeWarning::ExclusionOverridden {
                field: Field::Prefix,
                template,
            });
        }
        let prefix = prefix.unwrap_or(&defaults.prefix);
        if !is_valid_prefix(prefix) {
            return Err(invalid(Field::Prefix, prefix));
        }
        version.push_str(prefix);
    } else if let Some(prefix) = prefix {
        warnings.push(dropped(Field::Prefix, prefix, template));
    }

    version.push_str(&format!("{}.{}.{}", major, minor, patch));

    let emitted_suffix = match template.suffix {
        SuffixKind::Absent => {
            if let Some(suffix) = suffix {
                warnings.push(dropped(Field::Suffix, suffix, template));
            }
            None
        }
        SuffixKind::Rc => {
            if request.exclude_suffix {
                warnings.push(ComposeWarning::ExclusionOverridden {
                    field: Field::Suffix,
                    template,
                });
            }
            if let Some(supplied) = suffix.filter(|s| *s != RC_SUFFIX) {
                warnings.push(ComposeWarning::SuffixForcedToRc {
                    supplied: supplied.to_string(),
                });
            }
            Some(RC_SUFFIX)
        }
        SuffixKind::Generic => {
            let suffix = suffix.ok_or(ComposeError::MissingSuffix { template })?;
            if suffix == RC_SUFFIX {
                return Err(ComposeError::SuffixConflict {
                    suffix: suffix.to_string(),
                    expected: SuffixKind::Generic,
                });
            }
            Some(suffix)
        }
    };

    let emitted_hash = if template.has_hash {
        Some(hash.ok_or(ComposeError::MissingHash { template })?)
    } else {
        if let Some(hash) = hash {
            warnings.push(dropped(Field::Hash, hash, template));
        }
        None
    };

    if let (Some(suffix), None) = (emitted_suffix, emitted_hash) {
        if reads_as_hash(suffix) {
            return Err(ComposeError::AmbiguousSuffix {
                suffix: suffix.to_string(),
            });
        }
    }

    if let Some(suffix) = emitted_suffix {
        version.push('-');
        version.push_str(suffix);
    }
    if let Some(hash) = emitted_hash {
        version.push('-');
        version.push_str(hash);
    }

    Ok(Composition {
        version,
        template,
        rule,
        warnings,
    })
}

fn check_components(
    prefix: Option<&str>,
    suffix: Option<&str>,
    hash: Option<&str>,
) -> Result<(), ComposeError> {
    if let Some(prefix) = prefix {
        if !is_valid_prefix(prefix) {
            return Err(invalid(Field::Prefix, prefix));
        }
    }
    if let Some(suffix) = suffix {
        if !is_valid_suffix(suffix) {
            return Err(invalid(Field::Suffix, suffix));
        }
    }
    if let Some(hash) = hash {
        if !is_hex(hash) {
            return Err(invalid(Field::Hash, hash));
        }
        if hash.len() < MIN_HASH_LEN {
            return Err(ComposeError::HashTooShort {
                hash: hash.to_string(),
                min: MIN_HASH_LEN,
            });
        }
    }
    Ok(())
}

/// A lone suffix the tail rules would turn (partly) into a hash.
fn reads_as_hash(suffix: &str) -> bool {
    is_hash_like(suffix)
        || suffix
            .rsplit_once('-')
            .is_some_and(|(_, candidate)| is_hash_like(candidate))
}

fn invalid(component: Field, value: &str) -> ComposeError {
    ComposeError::InvalidComponent {
        component,
        value: value.to_string(),
    }
}

fn dropped(field: Field, value: &str, template: Template) -> ComposeWarning {
    ComposeWarning::Dropped {
        field,
        value: value.to_string(),
        template,
    }
}
