//! CLI support - clap-independent command model and runner

pub mod orchestration;

pub use orchestration::{execute, run, Command, Outcome};
