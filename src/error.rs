//! Error types for vignette operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! vignette operations including algorithm input validation, demo lookup,
//! and CLI commands.

use thiserror::Error;

/// Result type alias for vignette operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for vignette operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Algorithm-level errors (input validation).
    #[error("algorithm error: {0}")]
    Algorithm(#[from] AlgorithmError),

    /// Demo registry errors.
    #[error("demo error: {0}")]
    Demo(#[from] DemoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Input-validation errors shared by the algorithm modules.
///
/// The demos feed their functions well-formed sample data; these
/// variants make the same preconditions explicit for library callers.
#[derive(Error, Debug)]
pub enum AlgorithmError {
    /// An input slice or collection was empty.
    #[error("empty input: {what}")]
    EmptyInput {
        /// What was empty.
        what: &'static str,
    },

    /// Two inputs that must agree in length did not.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the left-hand input.
        left: usize,
        /// Length of the right-hand input.
        right: usize,
    },

    /// A parameter was outside its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An index was outside the addressed table or slice.
    #[error("index {index} out of range for {what} of length {len}")]
    IndexOutOfRange {
        /// What was being indexed.
        what: &'static str,
        /// The offending index.
        index: usize,
        /// Length of the indexed collection.
        len: usize,
    },

    /// A vector had zero norm where a direction was required.
    #[error("zero-norm vector: {what}")]
    ZeroNorm {
        /// Which input had zero norm.
        what: &'static str,
    },
}

/// Demo registry errors.
#[derive(Error, Debug)]
pub enum DemoError {
    /// Demo name not present in the registry.
    #[error("unknown demo: {name} (see `vignette list`)")]
    UnknownDemo {
        /// Name that was not found.
        name: String,
    },

    /// A demo failed while producing its report.
    #[error("demo {name} failed: {reason}")]
    RunFailed {
        /// Demo name.
        name: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Command(CommandError::OutputFormat(err.to_string()))
    }
}
