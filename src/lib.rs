//! Parse, validate, compose and extract structured build version strings such as
//! `v1.2.3-rc-a1b2c3f`.

pub mod cli;
pub mod composer;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod git;
pub mod parser;
pub mod ui;
pub mod validator;
pub mod warning;

pub use composer::{compose, ComposeRequest, Composition, ResolutionRule};
pub use domain::{Field, ReleaseType, SuffixKind, Template, Version};
pub use error::{ComposeError, Error, ExtractError, ParseError, Result, ValidationError};
pub use extractor::{extract, Extraction};
pub use parser::parse;
pub use validator::{validate, validate_against_template, validate_against_type, Predicate};
