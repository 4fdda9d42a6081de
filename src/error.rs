use thiserror::Error;

use crate::domain::{Field, ReleaseType, SuffixKind, Template};
use crate::validator::Predicate;

/// Failure to read a string as a build version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not shaped like [prefix]MAJOR.MINOR.PATCH[-tail]")]
    MalformedShape(String),

    #[error("invalid {component} '{value}'")]
    InvalidComponent { component: Field, value: String },
}

/// Failure of a validation request. Parse failures stay distinguishable from mismatches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("format '{actual}' does not match '{template}'")]
    TemplateMismatch { template: Template, actual: Template },

    #[error("type '{actual}' does not match '{expected}'")]
    TypeMismatch {
        expected: ReleaseType,
        actual: ReleaseType,
    },

    #[error("check '{predicate}' failed")]
    PredicateFailed { predicate: Predicate },
}

/// Reasons the composer refused to build a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("missing required {0}")]
    MissingComponent(Field),

    #[error("format '{template}' requires a custom suffix")]
    MissingSuffix { template: Template },

    #[error("format '{template}' requires a hash")]
    MissingHash { template: Template },

    #[error("invalid {component} '{value}'")]
    InvalidComponent { component: Field, value: String },

    #[error("suffix '{suffix}' conflicts with {expected} suffix")]
    SuffixConflict { suffix: String, expected: SuffixKind },

    #[error("suffix '{suffix}' would be read back as a hash")]
    AmbiguousSuffix { suffix: String },

    #[error("hash '{hash}' is shorter than {min} characters")]
    HashTooShort { hash: String, min: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no version found")]
    NotFound,
}

/// Text that names none of a closed set of values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnknownName {
    #[error("unknown format '{0}'")]
    Template(String),

    #[error("unknown type '{0}'")]
    ReleaseType(String),

    #[error("unknown check '{0}'")]
    Predicate(String),

    #[error("unknown field '{0}'")]
    Field(String),
}

/// Unified error type for build-version operations
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Usage error: {0}")]
    Usage(String),
}

/// Convenience type alias for Results in build-version
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        Error::Usage(msg.into())
    }

    /// Process exit code for this error: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl From<UnknownName> for Error {
    fn from(err: UnknownName) -> Self {
        Error::Usage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_parse_error_names_component() {
        let err = ParseError::InvalidComponent {
            component: Field::Suffix,
            value: "a_b".to_string(),
        };
        assert_eq!(err.to_string(), "invalid suffix 'a_b'");
    }

    #[test]
    fn test_compose_error_names_field() {
        assert_eq!(
            ComposeError::MissingComponent(Field::Minor).to_string(),
            "missing required minor"
        );
        let err = ComposeError::MissingHash {
            template: "vX.YY.Z-HASH".parse().unwrap(),
        };
        assert!(err.to_string().contains("vX.YY.Z-HASH"));
    }

    #[test]
    fn test_validation_error_wraps_parse() {
        let err: ValidationError = ParseError::MalformedShape("1.2".to_string()).into();
        assert!(matches!(err, ValidationError::Parse(_)));
        assert!(err.to_string().contains("'1.2'"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::usage("bad flag").exit_code(), 2);
        assert_eq!(Error::from(ExtractError::NotFound).exit_code(), 1);
        assert_eq!(
            Error::from(UnknownName::Field("color".to_string())).exit_code(),
            2
        );
        assert_eq!(Error::config("x").exit_code(), 1);
    }
}
