//! Demo report type.
//!
//! Every demo shares the same shape: sample data, a pure transformation,
//! and a printed report. [`Report`] is that report as a value, free-form
//! narrative lines plus named numeric figures, so the library stays pure
//! and only the CLI layer prints.

use serde::Serialize;
use std::fmt::Write;

/// A named numeric figure produced by a demo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    /// Figure name (e.g. "max subarray sum").
    pub name: String,
    /// Figure value.
    pub value: f64,
}

/// A titled demo report: narrative lines and named figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Report title (the demo name, human-readable).
    pub title: String,
    /// Narrative output lines, in emission order.
    pub lines: Vec<String>,
    /// Named numeric figures, in emission order.
    pub metrics: Vec<Metric>,
}

impl Report {
    /// Creates an empty report with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            metrics: Vec::new(),
        }
    }

    /// Appends a narrative line.
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Records a named numeric figure.
    pub fn metric(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.metrics.push(Metric {
            name: name.into(),
            value,
        });
        self
    }

    /// Looks up a recorded figure by name.
    #[must_use]
    pub fn get_metric(&self, name: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }

    /// Renders the report as human-readable text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{}", self.title);
        let _ = writeln!(output, "{}", "=".repeat(self.title.len()));
        for line in &self.lines {
            let _ = writeln!(output, "{line}");
        }
        if !self.metrics.is_empty() {
            output.push('\n');
            for metric in &self.metrics {
                let _ = writeln!(output, "  {:<32} {:.6}", metric.name, metric.value);
            }
        }
        output
    }
}
