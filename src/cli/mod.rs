//! CLI layer for vignette.
//!
//! Provides the command-line interface using clap, with commands for
//! listing, describing, and running the registered demos.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
