//! Trainer: Hebbian outer-product rule.
//!
//! `W[i][j] = (1/N) * Σ_p p[i] * p[j]` for `i != j`, and `W[i][i] = 0`.
//!
//! Training is fully deterministic: the same ordered pattern collection
//! always yields a bit-identical matrix.

use crate::error::{HopfieldError, Result};
use crate::kernel::{HebbianAccumulator, Pattern, WeightMatrix};
use tracing::debug;

/// Train a weight matrix on a collection of bipolar patterns.
///
/// Fails with [`HopfieldError::EmptyInput`] for an empty collection and
/// [`HopfieldError::DimensionMismatch`] when pattern lengths differ from
/// the first pattern's.
///
/// # Example
/// ```rust
/// use hopfield::{train, Pattern};
///
/// let patterns = vec![
///     Pattern::from_data(vec![1, -1, 1, -1]).unwrap(),
///     Pattern::from_data(vec![1, 1, -1, -1]).unwrap(),
/// ];
/// let w = train(&patterns).unwrap();
/// assert_eq!(w.get(0, 3), -0.5);
/// ```
pub fn train(patterns: &[Pattern]) -> Result<WeightMatrix> {
    let first = patterns
        .first()
        .ok_or_else(|| HopfieldError::EmptyInput("pattern collection is empty".into()))?;

    let mut trainer = Trainer::new(first.dimensions())?;
    trainer.add_all(patterns)?;
    trainer.finish()
}

/// Incremental trainer: add patterns one at a time, then finish.
///
/// Wraps a [`HebbianAccumulator`]; useful when patterns arrive as a stream
/// rather than a ready-made slice.
#[derive(Clone, Debug)]
pub struct Trainer {
    accumulator: HebbianAccumulator,
}

impl Trainer {
    /// Create a trainer for a network of `dimensions` neurons.
    pub fn new(dimensions: usize) -> Result<Self> {
        Ok(Self {
            accumulator: HebbianAccumulator::new(dimensions)?,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.accumulator.dimensions()
    }

    /// Number of patterns added so far.
    pub fn pattern_count(&self) -> usize {
        self.accumulator.count()
    }

    /// Add one pattern.
    pub fn add(&mut self, pattern: &Pattern) -> Result<()> {
        self.accumulator.add(pattern)
    }

    /// Add every pattern, validating all lengths before accumulating any.
    ///
    /// On error the trainer is left exactly as it was.
    pub fn add_all(&mut self, patterns: &[Pattern]) -> Result<()> {
        let n = self.dimensions();
        if let Some(bad) = patterns.iter().find(|p| p.dimensions() != n) {
            return Err(HopfieldError::DimensionMismatch {
                expected: n,
                got: bad.dimensions(),
            });
        }
        for p in patterns {
            self.accumulator.add(p)?;
        }
        Ok(())
    }

    /// Build the weight matrix from everything added so far.
    pub fn finish(&self) -> Result<WeightMatrix> {
        let weights = self.accumulator.finish()?;
        debug!(
            patterns = self.pattern_count(),
            neurons = self.dimensions(),
            "trained weight matrix"
        );
        Ok(weights)
    }
}
