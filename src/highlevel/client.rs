//! Convenience wrapper that owns a [`Recaller`] and delegates to the
//! kernel and network layers.

use crate::error::Result;
use crate::kernel::{Encoder, Pattern, WeightMatrix};
use crate::network::{self, RecallConfig, RecallOutcome, Recaller};

/// Convenience wrapper over the kernel and network layers.
///
/// `Hopfield` keeps one [`RecallConfig`] and one RNG stream across calls.
/// Every method delegates to public types in [`crate::kernel`] and
/// [`crate::network`].
///
/// # Example
///
/// ```rust
/// use hopfield::highlevel::Hopfield;
///
/// let mut net = Hopfield::with_seed(42);
///
/// let a = net.to_bipolar(&[1u8, 1, 0, 0, 1, 1, 0, 0]).unwrap();
/// let b = net.to_bipolar(&[1u8, 0, 1, 0, 1, 0, 1, 0]).unwrap();
/// let w = net.train(&[a.clone(), b]).unwrap();
///
/// let recalled = net.recall(&w, &a).unwrap();
/// assert_eq!(recalled.dimensions(), 8);
/// ```
pub struct Hopfield {
    recaller: Recaller,
}

impl Hopfield {
    /// Create a client with default configuration and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            recaller: Recaller::default(),
        }
    }

    /// Create a client whose recall runs are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            recaller: Recaller::with_seed(seed),
        }
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: RecallConfig) -> Result<Self> {
        Ok(Self {
            recaller: Recaller::new(config)?,
        })
    }

    pub fn config(&self) -> &RecallConfig {
        self.recaller.config()
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Map a {0, 1} vector to a bipolar pattern.
    pub fn to_bipolar<T: Copy + Into<f64>>(&self, values: &[T]) -> Result<Pattern> {
        Encoder::to_bipolar(values)
    }

    /// Map a bipolar pattern back to {0, 1}.
    pub fn to_binary(&self, pattern: &Pattern) -> Vec<u8> {
        Encoder::to_binary(pattern)
    }

    // =========================================================================
    // Training and recall
    // =========================================================================

    /// Build a weight matrix from bipolar patterns.
    pub fn train(&self, patterns: &[Pattern]) -> Result<WeightMatrix> {
        network::train(patterns)
    }

    /// Relax `probe` toward a stored attractor.
    pub fn recall(&mut self, weights: &WeightMatrix, probe: &Pattern) -> Result<Pattern> {
        self.recaller.recall(weights, probe)
    }

    /// Relax `probe` and report sweep and flip counts.
    pub fn recall_detailed(
        &mut self,
        weights: &WeightMatrix,
        probe: &Pattern,
    ) -> Result<RecallOutcome> {
        self.recaller.recall_detailed(weights, probe)
    }
}

impl Default for Hopfield {
    fn default() -> Self {
        Self::new()
    }
}
