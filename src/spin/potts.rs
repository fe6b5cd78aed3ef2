//! Driven Potts model on a ring.
//!
//! `n` spins over `q` states with ferromagnetic interaction: each equal
//! pair of ring neighbors contributes −1 to the energy. The Metropolis
//! sweep proposes a different state per site and accepts with the usual
//! `min(1, exp(-beta * dE))` rule, where `dE = E_new - E_old` over both
//! ring neighbors, so the dynamics preserve detailed balance.

use crate::error::{AlgorithmError, Result};
use crate::report::Report;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Potts model parameters.
#[derive(Debug, Clone, Copy)]
pub struct PottsConfig {
    /// Number of spins on the ring.
    pub spins: usize,
    /// Number of Potts states (`q`).
    pub states: u8,
    /// Inverse temperature.
    pub beta: f64,
}

impl Default for PottsConfig {
    fn default() -> Self {
        Self {
            spins: 100,
            states: 3,
            beta: 0.5,
        }
    }
}

/// A Potts spin ring.
#[derive(Debug, Clone)]
pub struct PottsModel {
    spins: Vec<u8>,
    states: u8,
    beta: f64,
}

impl PottsModel {
    /// Creates a model with randomly initialized spins.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than 2 spins or states, or a
    /// non-finite or negative `beta`.
    pub fn new(config: &PottsConfig, rng: &mut impl Rng) -> Result<Self> {
        if config.spins < 2 {
            return Err(AlgorithmError::InvalidParameter {
                name: "spins",
                reason: format!("ring needs at least 2 spins, got {}", config.spins),
            }
            .into());
        }
        if config.states < 2 {
            return Err(AlgorithmError::InvalidParameter {
                name: "states",
                reason: format!("need at least 2 states, got {}", config.states),
            }
            .into());
        }
        if !config.beta.is_finite() || config.beta < 0.0 {
            return Err(AlgorithmError::InvalidParameter {
                name: "beta",
                reason: format!("must be finite and >= 0, got {}", config.beta),
            }
            .into());
        }

        let spins = (0..config.spins)
            .map(|_| rng.random_range(0..config.states))
            .collect();
        Ok(Self {
            spins,
            states: config.states,
            beta: config.beta,
        })
    }

    /// Current spin configuration.
    #[must_use]
    pub fn spins(&self) -> &[u8] {
        &self.spins
    }

    /// Interaction energy of one spin pair: −1 when equal, 0 otherwise.
    #[must_use]
    pub fn interaction_energy(a: u8, b: u8) -> f64 {
        if a == b { -1.0 } else { 0.0 }
    }

    /// Total energy counting every spin pair, not just neighbors.
    #[must_use]
    pub fn total_energy(&self) -> f64 {
        let mut energy = 0.0;
        for i in 0..self.spins.len() {
            for j in i + 1..self.spins.len() {
                energy += Self::interaction_energy(self.spins[i], self.spins[j]);
            }
        }
        energy
    }

    /// Ring energy counting adjacent pairs only.
    #[must_use]
    pub fn ring_energy(&self) -> f64 {
        let n = self.spins.len();
        (0..n)
            .map(|i| Self::interaction_energy(self.spins[i], self.spins[(i + 1) % n]))
            .sum()
    }

    /// One Metropolis sweep over every site. Returns the number of
    /// accepted proposals.
    pub fn metropolis_sweep(&mut self, rng: &mut impl Rng) -> usize {
        let n = self.spins.len();
        let mut accepted = 0;

        for i in 0..n {
            let old = self.spins[i];
            // Propose a different state via a cyclic bump. The sum is
            // widened so large q cannot overflow the spin type.
            let bump = rng.random_range(1..self.states);
            #[allow(clippy::cast_possible_truncation)]
            let new = ((u16::from(old) + u16::from(bump)) % u16::from(self.states)) as u8;

            let left = self.spins[(i + n - 1) % n];
            let right = self.spins[(i + 1) % n];
            let before =
                Self::interaction_energy(old, left) + Self::interaction_energy(old, right);
            let after =
                Self::interaction_energy(new, left) + Self::interaction_energy(new, right);
            let delta = after - before;

            if delta <= 0.0 || rng.random::<f64>() < (-self.beta * delta).exp() {
                self.spins[i] = new;
                accepted += 1;
            }
        }
        accepted
    }

    /// Fraction of equal adjacent ring pairs, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn synchronization(&self) -> f64 {
        let n = self.spins.len();
        let equal = (0..n)
            .filter(|&i| self.spins[i] == self.spins[(i + 1) % n])
            .count();
        equal as f64 / n as f64
    }

    /// Applies an external driving field: each spin is bumped to the
    /// next state with probability `force`.
    pub fn apply_field(&mut self, rng: &mut impl Rng, force: f64) {
        for spin in &mut self.spins {
            if rng.random::<f64>() < force {
                *spin = (*spin + 1) % self.states;
            }
        }
    }

    /// Introduces small random perturbations with the given per-site
    /// probability. Same mechanics as the driving field, kept separate
    /// for the stability experiment.
    pub fn perturb(&mut self, rng: &mut impl Rng, amplitude: f64) {
        self.apply_field(rng, amplitude);
    }
}

/// Demo: relaxes a ring under Metropolis dynamics, then kicks it.
pub fn demo(seed: u64) -> Result<Report> {
    let mut rng = StdRng::seed_from_u64(seed);
    let config = PottsConfig::default();
    let mut model = PottsModel::new(&config, &mut rng)?;

    let mut report = Report::new("Driven Potts model");
    report.line(format!(
        "{} spins, q = {}, beta = {}",
        config.spins, config.states, config.beta
    ));
    report.metric("initial synchronization", model.synchronization());

    let mut accepted = 0;
    for _ in 0..50 {
        accepted += model.metropolis_sweep(&mut rng);
    }
    #[allow(clippy::cast_precision_loss)]
    report.metric("accepted proposals", accepted as f64);
    report.metric("relaxed synchronization", model.synchronization());
    report.metric("ring energy", model.ring_energy());

    model.perturb(&mut rng, 0.05);
    report.metric("perturbed synchronization", model.synchronization());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn model(spins: usize, states: u8, beta: f64) -> PottsModel {
        PottsModel::new(
            &PottsConfig {
                spins,
                states,
                beta,
            },
            &mut rng(),
        )
        .unwrap()
    }

    #[test]
    fn test_interaction_energy() {
        assert!((PottsModel::interaction_energy(1, 1) - (-1.0)).abs() < f64::EPSILON);
        assert!(PottsModel::interaction_energy(1, 2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_initial_spins_in_range() {
        let m = model(50, 3, 0.5);
        assert_eq!(m.spins().len(), 50);
        assert!(m.spins().iter().all(|&s| s < 3));
    }

    #[test]
    fn test_total_energy_bounds() {
        // All-pairs energy lies in [-n(n-1)/2, 0].
        let m = model(20, 3, 0.5);
        let e = m.total_energy();
        assert!(e <= 0.0);
        assert!(e >= -190.0);
    }

    #[test]
    fn test_aligned_ring_is_fully_synchronized() {
        let mut m = model(10, 3, 0.5);
        for spin in &mut m.spins {
            *spin = 1;
        }
        assert!((m.synchronization() - 1.0).abs() < f64::EPSILON);
        assert!((m.ring_energy() - (-10.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_metropolis_at_high_beta_orders_the_ring() {
        // Cold dynamics should raise neighbor agreement well above the
        // 1/q baseline.
        let mut r = rng();
        let mut m = PottsModel::new(
            &PottsConfig {
                spins: 60,
                states: 3,
                beta: 5.0,
            },
            &mut r,
        )
        .unwrap();
        for _ in 0..300 {
            m.metropolis_sweep(&mut r);
        }
        assert!(m.synchronization() > 0.6, "sync {}", m.synchronization());
    }

    #[test]
    fn test_metropolis_with_large_state_count() {
        // q near the top of u8 must not overflow the proposal sum.
        let mut r = rng();
        let mut m = model(16, 200, 0.5);
        for _ in 0..10 {
            m.metropolis_sweep(&mut r);
        }
        assert!(m.spins().iter().all(|&s| s < 200));
    }

    #[test]
    fn test_metropolis_at_zero_beta_accepts_everything() {
        let mut r = rng();
        let mut m = model(30, 3, 0.0);
        let accepted = m.metropolis_sweep(&mut r);
        assert_eq!(accepted, 30);
    }

    #[test]
    fn test_apply_field_full_force_cycles_every_spin() {
        let mut r = rng();
        let mut m = model(10, 3, 0.5);
        let before: Vec<u8> = m.spins().to_vec();
        m.apply_field(&mut r, 1.0);
        for (old, new) in before.iter().zip(m.spins()) {
            assert_eq!((old + 1) % 3, *new);
        }
    }

    #[test]
    fn test_apply_field_zero_force_is_noop() {
        let mut r = rng();
        let mut m = model(10, 3, 0.5);
        let before: Vec<u8> = m.spins().to_vec();
        m.apply_field(&mut r, 0.0);
        assert_eq!(before, m.spins());
    }

    #[test]
    fn test_invalid_configs() {
        let mut r = rng();
        assert!(PottsModel::new(
            &PottsConfig {
                spins: 1,
                states: 3,
                beta: 0.5
            },
            &mut r
        )
        .is_err());
        assert!(PottsModel::new(
            &PottsConfig {
                spins: 10,
                states: 1,
                beta: 0.5
            },
            &mut r
        )
        .is_err());
        assert!(PottsModel::new(
            &PottsConfig {
                spins: 10,
                states: 3,
                beta: f64::NAN
            },
            &mut r
        )
        .is_err());
    }

    #[test]
    fn test_demo_deterministic() {
        assert_eq!(demo(3).unwrap(), demo(3).unwrap());
    }
}
