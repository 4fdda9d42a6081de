use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use build_version::cli::{self, Command};
use build_version::config::{self, Config};
use build_version::ui::{Reporter, Verbosity};
use build_version::validator::Predicate;
use build_version::{ComposeRequest, Error, Field, ReleaseType, Template};

#[derive(clap::Parser)]
#[command(
    name = "build-version",
    version,
    about = "Parse, validate, compose and extract build version strings"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Only print errors")]
    quiet: bool,

    #[arg(short, long, global = true, help = "Print status information")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a version into its parts
    Parse {
        version: String,

        #[arg(short, long = "field", help = "Field to print (repeatable)")]
        fields: Vec<Field>,

        #[arg(long, conflicts_with = "fields", help = "Print NAME=value lines for every field")]
        export: bool,
    },

    /// Check a version against a format, a type or individual predicates
    Validate {
        version: String,

        #[arg(short, long, help = "Format the version must have, e.g. vX.YY.Z-rc")]
        format: Option<Template>,

        #[arg(short = 't', long = "type", help = "Release type the version must have")]
        release_type: Option<ReleaseType>,

        #[arg(long = "check", help = "Predicate that must hold, e.g. has-hash (repeatable)")]
        checks: Vec<Predicate>,
    },

    /// Build a version from its parts
    Compose {
        #[arg(long)]
        major: Option<u64>,

        #[arg(long)]
        minor: Option<u64>,

        #[arg(long)]
        patch: Option<u64>,

        #[arg(long, help = "Existing version to take unspecified parts from")]
        from: Option<String>,

        #[arg(long)]
        prefix: Option<String>,

        #[arg(long, num_args = 0..=1, help = "Suffix; without a value uses the configured default")]
        suffix: Option<Option<String>>,

        #[arg(long)]
        hash: Option<String>,

        #[arg(long, conflicts_with = "hash", help = "Use the abbreviated HEAD commit as hash")]
        git_hash: bool,

        #[arg(long, help = "Omit the prefix")]
        no_prefix: bool,

        #[arg(long, help = "Omit the suffix")]
        no_suffix: bool,

        #[arg(short, long, help = "Output format, e.g. vX.YY.Z-<suffix>-HASH")]
        format: Option<Template>,

        #[arg(short = 't', long = "type", help = "Release type to produce")]
        release_type: Option<ReleaseType>,
    },

    /// Print the first version found in text (reads stdin when no text is given)
    Extract { text: Vec<String> },

    /// List the known formats
    Formats,

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let reporter = Reporter::new(Verbosity::from_flags(args.quiet, args.verbose));

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            reporter.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    let command = match build_command(args.command, &config) {
        Ok(command) => command,
        Err(e) => {
            reporter.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    match cli::run(command, &config) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                reporter.warning(warning);
            }
            for note in &outcome.notes {
                reporter.status(note);
            }
            let mut stdout = io::stdout().lock();
            for line in &outcome.output {
                writeln!(stdout, "{}", line)?;
            }
        }
        Err(e) => {
            reporter.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn build_command(command: Commands, config: &Config) -> build_version::Result<Command> {
    let command = match command {
        Commands::Parse {
            version,
            fields,
            export,
        } => Command::Parse {
            version,
            fields,
            export,
        },
        Commands::Validate {
            version,
            format,
            release_type,
            checks,
        } => Command::Validate {
            version,
            template: format,
            release_type,
            checks,
        },
        Commands::Compose {
            major,
            minor,
            patch,
            from,
            prefix,
            suffix,
            hash,
            git_hash,
            no_prefix,
            no_suffix,
            format,
            release_type,
        } => {
            let suffix = suffix.map(|value| value.unwrap_or_else(|| config.defaults.suffix.clone()));
            let request = ComposeRequest {
                major,
                minor,
                patch,
                prefix: prefix.filter(|s| !s.is_empty()),
                suffix: suffix.filter(|s| !s.is_empty()),
                hash: hash.filter(|s| !s.is_empty()),
                exclude_prefix: no_prefix,
                exclude_suffix: no_suffix,
                template: format,
                release_type,
                ..ComposeRequest::default()
            };
            Command::Compose {
                request,
                from,
                git_hash,
            }
        }
        Commands::Extract { text } => {
            let text = if text.is_empty() {
                read_stdin()?
            } else {
                text.join(" ")
            };
            Command::Extract { text }
        }
        Commands::Formats => Command::Formats,
        Commands::Config => Command::ShowConfig,
    };
    Ok(command)
}

fn read_stdin() -> build_version::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(Error::usage("no text given and stdin is a terminal"));
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text)
}
