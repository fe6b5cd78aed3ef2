//! Term deduplication and transition-table state minimization.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;
use std::collections::HashSet;

/// Removes duplicate product terms, keeping first occurrences in order.
#[must_use]
pub fn dedupe_terms(terms: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for &term in terms {
        if seen.insert(term) {
            out.push(term.to_owned());
        }
    }
    out
}

/// Counts the distinct states of a transition table: states with
/// identical transition rows are equivalent and merge.
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyInput`] for an empty table and
/// [`AlgorithmError::DimensionMismatch`] for ragged rows.
pub fn minimize_states(table: &[Vec<usize>]) -> Result<usize> {
    let Some(first) = table.first() else {
        return Err(AlgorithmError::EmptyInput { what: "table" }.into());
    };
    let width = first.len();
    for row in table {
        if row.len() != width {
            return Err(AlgorithmError::DimensionMismatch {
                left: width,
                right: row.len(),
            }
            .into());
        }
    }

    let unique: HashSet<&[usize]> = table.iter().map(Vec::as_slice).collect();
    Ok(unique.len())
}

/// Demo: a duplicate-terms list and a redundant-state transition table.
pub fn demo(_seed: u64) -> Result<Report> {
    let terms = ["AB", "BC", "AB"];
    let deduped = dedupe_terms(&terms);

    // States 0 and 2 transition identically and merge.
    let table = vec![vec![1, 0], vec![2, 1], vec![1, 0]];
    let states = minimize_states(&table)?;

    let mut report = Report::new("Logic simplification");
    report.line(format!("terms:        {terms:?}"));
    report.line(format!("deduplicated: {deduped:?}"));
    #[allow(clippy::cast_precision_loss)]
    {
        report.metric("unique terms", deduped.len() as f64);
        report.metric("states before", table.len() as f64);
        report.metric("states after", states as f64);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        let out = dedupe_terms(&["AB", "BC", "AB", "CD", "BC"]);
        assert_eq!(out, vec!["AB", "BC", "CD"]);
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe_terms(&[]).is_empty());
    }

    #[test]
    fn test_minimize_merges_identical_rows() {
        let table = vec![vec![1, 0], vec![2, 1], vec![1, 0]];
        assert_eq!(minimize_states(&table).unwrap(), 2);
    }

    #[test]
    fn test_minimize_all_distinct() {
        let table = vec![vec![0, 1], vec![1, 0], vec![1, 1]];
        assert_eq!(minimize_states(&table).unwrap(), 3);
    }

    #[test]
    fn test_minimize_single_state() {
        assert_eq!(minimize_states(&[vec![0]]).unwrap(), 1);
    }

    #[test]
    fn test_minimize_validation() {
        assert!(minimize_states(&[]).is_err());
        assert!(minimize_states(&[vec![0, 1], vec![0]]).is_err());
    }
}
