//! User interface module - reporting and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Verbosity-aware printing to stderr
//!
//! Values a script may capture go to stdout through the CLI runner; everything printed here
//! goes to stderr.

pub mod formatter;

pub use formatter::{format_exports, format_fields, format_template_table};

/// How much diagnostic output to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Errors and warnings
    #[default]
    Normal,
    /// Everything, including status lines
    Verbose,
}

impl Verbosity {
    /// Resolve `-q` / `-v` flags. Quiet wins when both are given.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Prints diagnostics according to a fixed verbosity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Reporter { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Errors are always shown.
    pub fn error(&self, message: &str) {
        eprintln!("{}", formatter::format_error(message));
    }

    pub fn warning(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{}", formatter::format_warning(message));
        }
    }

    pub fn status(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{}", formatter::format_status(message));
        }
    }
}
