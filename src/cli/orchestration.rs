//! Command execution for the `build-version` binary
//!
//! The clap front end in `main.rs` only translates arguments into a [Command]. Running it
//! happens here, so every subcommand can be driven programmatically and tested without a
//! process boundary. Nothing in this module prints: results come back as an [Outcome], and
//! failures as [crate::Error] whose `exit_code` the binary uses.

use crate::composer::{compose, ComposeRequest};
use crate::config::Config;
use crate::domain::{Field, ReleaseType, Template, Version};
use crate::error::{Error, Result};
use crate::extractor::extract;
use crate::git::{Git2Repository, Repository};
use crate::ui::{format_exports, format_fields, format_template_table};
use crate::validator::{check, validate_against_template, validate_against_type, Predicate};

/// A subcommand with its arguments already converted to domain types
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print fields of a parsed version
    Parse {
        version: String,
        fields: Vec<Field>,
        export: bool,
    },

    /// Check a version, optionally against a template, a type and predicates
    Validate {
        version: String,
        template: Option<Template>,
        release_type: Option<ReleaseType>,
        checks: Vec<Predicate>,
    },

    /// Build a version from components
    Compose {
        request: ComposeRequest,
        /// Existing version whose parts seed the request
        from: Option<String>,
        /// Take the hash from the repository HEAD
        git_hash: bool,
    },

    /// Find the first version in free text
    Extract { text: String },

    /// List the named templates
    Formats,

    /// Print the effective configuration
    ShowConfig,
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    /// Lines for stdout
    pub output: Vec<String>,

    /// Non-fatal warnings for stderr
    pub warnings: Vec<String>,

    /// Status notes shown in verbose mode
    pub notes: Vec<String>,
}

/// Run a command, opening the repository in the current directory if one is needed.
pub fn run(command: Command, config: &Config) -> Result<Outcome> {
    execute(command, config, || Git2Repository::open("."))
}

/// Run a command with a caller-supplied repository source.
///
/// `open_repository` is only called for `compose --git-hash`.
pub fn execute<R, F>(command: Command, config: &Config, open_repository: F) -> Result<Outcome>
where
    R: Repository,
    F: FnOnce() -> Result<R>,
{
    match command {
        Command::Parse {
            version,
            fields,
            export,
        } => {
            let parsed = Version::parse(&version)?;
            let output = if export {
                format_exports(&parsed, &config.export.var_prefix)
            } else {
                format_fields(&parsed, &fields)
            };
            Ok(Outcome {
                output,
                ..Outcome::default()
            })
        }

        Command::Validate {
            version,
            template,
            release_type,
            checks,
        } => {
            let parsed = Version::parse(&version)?;
            if let Some(template) = template {
                validate_against_template(&version, &template)?;
            }
            if let Some(release_type) = release_type {
                validate_against_type(&version, release_type)?;
            }
            for predicate in checks {
                check(&version, predicate)?;
            }
            Ok(Outcome {
                notes: vec![format!(
                    "'{}' is a valid {} version ({})",
                    version,
                    parsed.release_type(),
                    parsed.template()
                )],
                ..Outcome::default()
            })
        }

        Command::Compose {
            request,
            from,
            git_hash,
        } => {
            if git_hash && request.hash.is_some() {
                return Err(Error::usage("--hash and --git-hash are mutually exclusive"));
            }
            let mut request = match from {
                Some(from) => {
                    ComposeRequest::from_version(&Version::parse(&from)?).with_overrides(&request)
                }
                None => request,
            };
            let mut notes = Vec::new();
            if git_hash {
                let hash = open_repository()?.short_head_hash(config.defaults.hash_length)?;
                notes.push(format!("Using HEAD commit {}", hash));
                request.hash = Some(hash);
            }

            let composition = compose(&request, &config.defaults)?;
            notes.push(format!(
                "Format {} ({})",
                composition.template, composition.rule
            ));
            Ok(Outcome {
                output: vec![composition.version],
                warnings: composition.warnings.iter().map(|w| w.to_string()).collect(),
                notes,
            })
        }

        Command::Extract { text } => {
            let extraction = extract(&text)?;
            Ok(Outcome {
                output: vec![extraction.text.to_string()],
                notes: vec![format!(
                    "Found {} at bytes {}..{}",
                    extraction.version.release_type(),
                    extraction.span.start,
                    extraction.span.end
                )],
                ..Outcome::default()
            })
        }

        Command::Formats => Ok(Outcome {
            output: format_template_table(),
            ..Outcome::default()
        }),

        Command::ShowConfig => {
            let rendered = toml::to_string(config)
                .map_err(|e| Error::config(format!("cannot render configuration: {}", e)))?;
            Ok(Outcome {
                output: rendered.lines().map(str::to_string).collect(),
                ..Outcome::default()
            })
        }
    }
}
