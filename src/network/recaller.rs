//! Recaller: asynchronous relaxation toward a stored attractor.
//!
//! Each sweep visits every neuron exactly once in a fresh uniformly random
//! order. A neuron takes the sign of its net input, `+1` when the input is
//! exactly zero, and the new value is visible to every later update in the
//! same sweep.
//!
//! For a symmetric, zero-diagonal matrix each single update leaves the
//! energy `E = -1/2 * sᵀ W s` unchanged or lower, so the state drifts into a
//! local minimum. That minimum may be a spurious attractor rather than a
//! trained pattern, especially when many patterns are stored relative to N.
//!
//! The random order is what makes the update asynchronous. Pass a seeded
//! RNG through [`recall_with_rng`] or [`RecallConfig::seed`] to reproduce a
//! run exactly.

use crate::error::Result;
use crate::kernel::{Pattern, WeightMatrix};
use crate::network::config::RecallConfig;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

/// Result of a recall run with bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct RecallOutcome {
    /// Final network state
    pub state: Pattern,
    /// Number of sweeps actually performed
    pub sweeps: usize,
    /// Total neuron flips across all sweeps
    pub flips: usize,
    /// Whether the last sweep flipped nothing (state is a fixed point)
    pub settled: bool,
}

/// Recall from `probe` using `steps` sweeps and an OS-seeded RNG.
///
/// Results differ between calls whenever the update order matters.
/// Use [`recall_with_rng`] for reproducible runs.
pub fn recall(weights: &WeightMatrix, probe: &Pattern, steps: usize) -> Result<Pattern> {
    recall_with_rng(weights, probe, steps, &mut rand::thread_rng())
}

/// Recall from `probe` drawing update orders from `rng`.
///
/// Fails if `steps` is zero or `probe` does not have N components.
/// The probe and the weights are never modified.
///
/// # Example
/// ```rust
/// use hopfield::{recall_with_rng, train, Pattern};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let p = Pattern::from_data(vec![1, -1, 1, -1, 1, 1]).unwrap();
/// let w = train(&[p.clone()]).unwrap();
///
/// let noisy = p.flipped(&[2]).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let out = recall_with_rng(&w, &noisy, 5, &mut rng).unwrap();
/// assert_eq!(out, p);
/// ```
pub fn recall_with_rng<R: Rng + ?Sized>(
    weights: &WeightMatrix,
    probe: &Pattern,
    steps: usize,
    rng: &mut R,
) -> Result<Pattern> {
    let config = RecallConfig::default().with_steps(steps);
    relax(weights, probe, &config, rng).map(|outcome| outcome.state)
}

/// Run relaxation under `config`, drawing update orders from `rng`.
///
/// `config.seed` is ignored here; the caller owns the RNG.
pub fn relax<R: Rng + ?Sized>(
    weights: &WeightMatrix,
    probe: &Pattern,
    config: &RecallConfig,
    rng: &mut R,
) -> Result<RecallOutcome> {
    config.validate()?;
    weights.check_pattern(probe)?;

    let mut state = probe.data().to_vec();
    let mut order: Vec<usize> = (0..state.len()).collect();
    let mut flips = 0;
    let mut sweeps = 0;
    let mut last_flips = 0;

    while sweeps < config.steps {
        order.shuffle(rng);
        last_flips = sweep(weights, &mut state, &order);
        flips += last_flips;
        sweeps += 1;
        trace!(sweep = sweeps, flips = last_flips, "sweep complete");

        if config.stop_when_stable && last_flips == 0 {
            break;
        }
    }

    let settled = last_flips == 0;
    debug!(
        neurons = state.len(),
        sweeps,
        flips,
        settled,
        "recall finished"
    );

    Ok(RecallOutcome {
        state: Pattern::from_data_unchecked(state),
        sweeps,
        flips,
        settled,
    })
}

/// One asynchronous pass over `order`. Returns the number of flips.
fn sweep(weights: &WeightMatrix, state: &mut [i8], order: &[usize]) -> usize {
    let mut flips = 0;
    for &i in order {
        let input = weights.local_field(i, state);
        let next = if input >= 0.0 { 1 } else { -1 };
        if state[i] != next {
            state[i] = next;
            flips += 1;
        }
    }
    flips
}

/// Stateful recaller owning its configuration and a ChaCha8 RNG.
///
/// With `config.seed` set, a fresh `Recaller` replays the same sequence of
/// update orders. Successive calls on one `Recaller` keep drawing from the
/// same stream, so they use different orders.
#[derive(Clone, Debug)]
pub struct Recaller {
    config: RecallConfig,
    rng: ChaCha8Rng,
}

impl Recaller {
    /// Create a recaller, failing if the configuration is invalid.
    pub fn new(config: RecallConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: RecallConfig::default().with_seed(seed),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &RecallConfig {
        &self.config
    }

    /// Recall from `probe`, returning only the final state.
    pub fn recall(&mut self, weights: &WeightMatrix, probe: &Pattern) -> Result<Pattern> {
        self.recall_detailed(weights, probe).map(|outcome| outcome.state)
    }

    /// Recall from `probe`, returning sweep and flip counts too.
    pub fn recall_detailed(
        &mut self,
        weights: &WeightMatrix,
        probe: &Pattern,
    ) -> Result<RecallOutcome> {
        relax(weights, probe, &self.config, &mut self.rng)
    }
}

impl Default for Recaller {
    fn default() -> Self {
        Self {
            config: RecallConfig::default(),
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HopfieldError;
    use crate::network::trainer::train;

    fn pat(data: &[i8]) -> Pattern {
        Pattern::from_data(data.to_vec()).unwrap()
    }

    fn energy(w: &WeightMatrix, s: &[i8]) -> f64 {
        let n = w.dimensions();
        let mut e = 0.0;
        for i in 0..n {
            for j in 0..n {
                e += w.get(i, j) * s[i] as f64 * s[j] as f64;
            }
        }
        -0.5 * e
    }

    #[test]
    fn test_two_pattern_scenario() {
        let w = train(&[pat(&[1, -1, 1, -1]), pat(&[1, 1, -1, -1])]).unwrap();
        let probe = pat(&[1, -1, 1, -1]);

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let out = recall_with_rng(&w, &probe, 5, &mut rng).unwrap();
            assert_eq!(out, probe);
        }
    }

    #[test]
    fn test_unseeded_recall_of_fixed_point() {
        let p = pat(&[1, 1, -1, -1, 1, -1, 1]);
        let w = train(&[p.clone()]).unwrap();
        assert_eq!(recall(&w, &p, 1).unwrap(), p);
    }

    #[test]
    fn test_corrects_single_flip() {
        let p = pat(&[1, -1, -1, 1, 1, -1, 1, -1]);
        let w = train(&[p.clone()]).unwrap();
        let noisy = p.flipped(&[3]).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(recall_with_rng(&w, &noisy, 5, &mut rng).unwrap(), p);
        // Probe untouched
        assert_eq!(noisy, p.flipped(&[3]).unwrap());
    }

    #[test]
    fn test_zero_field_resolves_positive() {
        let w = WeightMatrix::from_rows(&[vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let out = recall_with_rng(&w, &pat(&[-1, -1]), 1, &mut rng).unwrap();
        assert_eq!(out.data(), &[1, 1]);
    }

    #[test]
    fn test_asynchronous_updates_are_visible() {
        // Neuron 1 copies neuron 0, neuron 0 copies neuron 1 inverted.
        // With order [0, 1] the second update must see the first.
        let w = WeightMatrix::from_rows(&[vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap();
        let mut state = vec![1, 1];
        let flips = sweep(&w, &mut state, &[0, 1]);
        assert_eq!(state, vec![-1, -1]);
        assert_eq!(flips, 2);
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let patterns = [
            pat(&[1, -1, 1, -1, 1, -1, 1, -1]),
            pat(&[1, 1, 1, 1, -1, -1, -1, -1]),
            pat(&[-1, 1, 1, -1, -1, 1, 1, -1]),
        ];
        let w = train(&patterns).unwrap();
        let probe = pat(&[1, 1, -1, -1, 1, 1, -1, -1]);

        let a = recall_with_rng(&w, &probe, 3, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = recall_with_rng(&w, &probe, 3, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_energy_never_increases() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let n = 24;
        let patterns: Vec<Pattern> = (0..4)
            .map(|_| {
                let data = (0..n).map(|_| if rng.gen_bool(0.5) { 1 } else { -1 }).collect();
                Pattern::from_data(data).unwrap()
            })
            .collect();
        let w = train(&patterns).unwrap();

        let mut state: Vec<i8> = (0..n).map(|_| if rng.gen_bool(0.5) { 1 } else { -1 }).collect();
        let mut order: Vec<usize> = (0..n).collect();
        for _ in 0..5 {
            order.shuffle(&mut rng);
            for &i in &order {
                let before = energy(&w, &state);
                sweep(&w, &mut state, &[i]);
                assert!(energy(&w, &state) <= before + 1e-9);
            }
        }
    }

    #[test]
    fn test_output_is_bipolar_and_sized() {
        let w = WeightMatrix::from_rows(&[
            vec![0.0, 0.3, -0.2],
            vec![0.3, 0.0, 0.1],
            vec![-0.2, 0.1, 0.0],
        ])
        .unwrap();
        let out = recall(&w, &pat(&[-1, 1, -1]), 2).unwrap();
        assert_eq!(out.dimensions(), 3);
        assert!(out.data().iter().all(|&v| v == 1 || v == -1));
    }

    #[test]
    fn test_invalid_inputs() {
        let w = train(&[pat(&[1, -1, 1])]).unwrap();

        let err = recall(&w, &pat(&[1, -1]), 5).unwrap_err();
        assert_eq!(err, HopfieldError::DimensionMismatch { expected: 3, got: 2 });

        let err = recall(&w, &pat(&[1, -1, 1]), 0).unwrap_err();
        assert_eq!(err, HopfieldError::InvalidSteps(0));
    }

    #[test]
    fn test_stop_when_stable() {
        let p = pat(&[1, -1, 1, 1, -1, -1]);
        let w = train(&[p.clone()]).unwrap();
        let config = RecallConfig::default()
            .with_steps(50)
            .with_seed(3)
            .stop_when_stable(true);

        let mut recaller = Recaller::new(config).unwrap();
        let outcome = recaller.recall_detailed(&w, &p).unwrap();
        assert_eq!(outcome.sweeps, 1);
        assert_eq!(outcome.flips, 0);
        assert!(outcome.settled);
        assert_eq!(outcome.state, p);
    }

    #[test]
    fn test_runs_all_steps_by_default() {
        let p = pat(&[1, -1, 1, 1, -1, -1]);
        let w = train(&[p.clone()]).unwrap();

        let mut recaller = Recaller::new(RecallConfig::default().with_seed(3)).unwrap();
        let outcome = recaller.recall_detailed(&w, &p).unwrap();
        assert_eq!(outcome.sweeps, 5);
        assert!(outcome.settled);
    }

    #[test]
    fn test_recaller_seed_reproduces() {
        let patterns = [
            pat(&[1, -1, 1, -1, 1, -1]),
            pat(&[1, 1, 1, -1, -1, -1]),
        ];
        let w = train(&patterns).unwrap();
        let probe = pat(&[-1, -1, 1, 1, 1, -1]);
        let config = RecallConfig::default().with_seed(77);

        let a = Recaller::new(config.clone()).unwrap().recall(&w, &probe).unwrap();
        let b = Recaller::new(config).unwrap().recall(&w, &probe).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_recaller_rejects_zero_steps() {
        let config = RecallConfig::default().with_steps(0);
        assert!(Recaller::new(config).is_err());
    }
}
