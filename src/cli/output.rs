//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::demo::DemoEntry;
use crate::error::Error;
use crate::report::Report;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats one demo report.
#[must_use]
pub fn format_report(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Json => format_json(report),
    }
}

/// Formats a batch of reports, one per demo.
#[must_use]
pub fn format_reports(reports: &[Report], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for report in reports {
                output.push_str(&report.to_text());
                output.push('\n');
            }
            output
        }
        OutputFormat::Json => format_json(&reports),
    }
}

/// Formats the demo registry listing.
#[must_use]
pub fn format_demo_list(demos: &[DemoEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("Demos:\n");
            for entry in demos {
                let _ = writeln!(output, "  {:<20} {}", entry.name, entry.summary);
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Listed<'a> {
                name: &'a str,
                summary: &'a str,
            }
            let listed: Vec<Listed<'_>> = demos
                .iter()
                .map(|e| Listed {
                    name: e.name,
                    summary: e.summary,
                })
                .collect();
            format_json(&listed)
        }
    }
}

/// Formats one demo description.
#[must_use]
pub fn format_demo_description(entry: &DemoEntry, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{}\n  {}\n", entry.name, entry.summary),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Described<'a> {
                name: &'a str,
                summary: &'a str,
            }
            format_json(&Described {
                name: entry.name,
                summary: entry.summary,
            })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
