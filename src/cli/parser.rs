//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};

/// Default seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Vignette: a gallery of small, seeded algorithm demos.
///
/// Each demo reproduces one self-contained algorithm walkthrough and
/// prints a report.
#[derive(Parser, Debug)]
#[command(name = "vignette")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all registered demos.
    #[command(name = "list", alias = "ls")]
    List,

    /// Show what a demo does.
    Describe {
        /// Demo name (see `list`).
        name: String,
    },

    /// Run one demo and print its report.
    Run {
        /// Demo name (see `list`).
        name: String,

        /// Seed for demos that draw random data.
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Run every demo with the same seed.
    RunAll {
        /// Seed for demos that draw random data.
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}
