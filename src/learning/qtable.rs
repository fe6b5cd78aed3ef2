//! Tabular Q-learning.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;

/// A `states x actions` Q-value table.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    values: Vec<Vec<f64>>,
    alpha: f64,
    gamma: f64,
}

impl QTable {
    /// Creates a zeroed table.
    ///
    /// # Errors
    ///
    /// Returns an error for zero states/actions, `alpha` outside
    /// `(0, 1]`, or `gamma` outside `[0, 1]`.
    pub fn new(states: usize, actions: usize, alpha: f64, gamma: f64) -> Result<Self> {
        if states == 0 {
            return Err(AlgorithmError::EmptyInput { what: "states" }.into());
        }
        if actions == 0 {
            return Err(AlgorithmError::EmptyInput { what: "actions" }.into());
        }
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(AlgorithmError::InvalidParameter {
                name: "alpha",
                reason: format!("must be in (0, 1], got {alpha}"),
            }
            .into());
        }
        if !gamma.is_finite() || !(0.0..=1.0).contains(&gamma) {
            return Err(AlgorithmError::InvalidParameter {
                name: "gamma",
                reason: format!("must be in [0, 1], got {gamma}"),
            }
            .into());
        }
        Ok(Self {
            values: vec![vec![0.0; actions]; states],
            alpha,
            gamma,
        })
    }

    /// Number of states.
    #[must_use]
    pub fn states(&self) -> usize {
        self.values.len()
    }

    /// Number of actions.
    #[must_use]
    pub fn actions(&self) -> usize {
        self.values[0].len()
    }

    /// Reads one Q-value.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::IndexOutOfRange`] for bad indices.
    pub fn get(&self, state: usize, action: usize) -> Result<f64> {
        self.check(state, action)?;
        Ok(self.values[state][action])
    }

    /// Applies the Q-learning update:
    /// `Q(s,a) += alpha * (r + gamma * max_a' Q(s',a') - Q(s,a))`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::IndexOutOfRange`] for bad indices.
    pub fn update(
        &mut self,
        state: usize,
        action: usize,
        reward: f64,
        next_state: usize,
    ) -> Result<()> {
        self.check(state, action)?;
        if next_state >= self.states() {
            return Err(AlgorithmError::IndexOutOfRange {
                what: "states",
                index: next_state,
                len: self.states(),
            }
            .into());
        }

        let max_next = self.values[next_state]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let current = self.values[state][action];
        self.values[state][action] =
            current + self.alpha * (reward + self.gamma * max_next - current);
        Ok(())
    }

    /// Returns the greedy action for a state (ties keep the lowest
    /// index).
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::IndexOutOfRange`] for a bad state.
    pub fn greedy(&self, state: usize) -> Result<usize> {
        if state >= self.states() {
            return Err(AlgorithmError::IndexOutOfRange {
                what: "states",
                index: state,
                len: self.states(),
            }
            .into());
        }
        let row = &self.values[state];
        let mut best = 0;
        for (a, &value) in row.iter().enumerate() {
            if value > row[best] {
                best = a;
            }
        }
        Ok(best)
    }

    fn check(&self, state: usize, action: usize) -> Result<()> {
        if state >= self.states() {
            return Err(AlgorithmError::IndexOutOfRange {
                what: "states",
                index: state,
                len: self.states(),
            }
            .into());
        }
        if action >= self.actions() {
            return Err(AlgorithmError::IndexOutOfRange {
                what: "actions",
                index: action,
                len: self.actions(),
            }
            .into());
        }
        Ok(())
    }
}

/// Demo: one update against a 3-state, 2-action zero table.
pub fn demo(_seed: u64) -> Result<Report> {
    let mut table = QTable::new(3, 2, super::DEFAULT_ALPHA, super::DEFAULT_GAMMA)?;
    table.update(0, 1, 10.0, 1)?;

    let mut report = Report::new("Q-learning table update");
    report.line("applied update(state 0, action 1, reward 10, next state 1)");
    for state in 0..table.states() {
        let row: Vec<f64> = (0..table.actions())
            .map(|a| table.get(state, a))
            .collect::<Result<_>>()?;
        report.line(format!("state {state}: {row:?}"));
    }
    report.metric("q(0, 1)", table.get(0, 1)?);
    #[allow(clippy::cast_precision_loss)]
    report.metric("greedy action for state 0", table.greedy(0)? as f64);
    Ok(report)
}
