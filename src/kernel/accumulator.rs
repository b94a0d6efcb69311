//! HebbianAccumulator: streaming outer-product sums.
//!
//! Training a Hopfield network is a superposition: every stored pattern
//! adds its outer product `p ⊗ p` to a running N x N sum. The accumulator
//! keeps that sum un-normalized so patterns can arrive one at a time, and
//! two accumulators built over disjoint pattern sets can be merged.
//!
//! # Key Insight
//!
//! The diagonal and the 1/N scale are applied only in [`finish`]:
//! - `p[i] * p[i]` is always +1, so the raw diagonal just counts patterns
//! - zeroing it at the end removes every neuron's self-reinforcement
//!
//! [`finish`]: HebbianAccumulator::finish

use crate::error::{HopfieldError, Result};
use crate::kernel::pattern::Pattern;
use crate::kernel::weights::WeightMatrix;

/// Running sum of pattern outer products.
#[derive(Clone, Debug)]
pub struct HebbianAccumulator {
    dimensions: usize,
    /// Row-major N x N sum of outer products (not normalized)
    sums: Vec<f64>,
    /// Number of patterns accumulated
    count: usize,
}

impl HebbianAccumulator {
    /// Create a new empty accumulator for `dimensions` neurons.
    pub fn new(dimensions: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(HopfieldError::EmptyInput("network needs at least one neuron".into()));
        }
        Ok(Self {
            dimensions,
            sums: vec![0.0; dimensions * dimensions],
            count: 0,
        })
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Get the number of accumulated patterns.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Add a pattern's outer product `p ⊗ p`.
    pub fn add(&mut self, pattern: &Pattern) -> Result<()> {
        if pattern.dimensions() != self.dimensions {
            return Err(HopfieldError::DimensionMismatch {
                expected: self.dimensions,
                got: pattern.dimensions(),
            });
        }

        let p = pattern.data();
        for (i, row) in self.sums.chunks_mut(self.dimensions).enumerate() {
            let pi = p[i] as f64;
            for (cell, &pj) in row.iter_mut().zip(p) {
                *cell += pi * pj as f64;
            }
        }
        self.count += 1;
        Ok(())
    }

    /// Merge another accumulator into this one.
    ///
    /// Lets disjoint pattern sets be accumulated separately and combined.
    pub fn merge(&mut self, other: &HebbianAccumulator) -> Result<()> {
        if other.dimensions != self.dimensions {
            return Err(HopfieldError::DimensionMismatch {
                expected: self.dimensions,
                got: other.dimensions,
            });
        }

        for (s, &o) in self.sums.iter_mut().zip(&other.sums) {
            *s += o;
        }
        self.count += other.count;
        Ok(())
    }

    /// Get the raw row-major sums (for advanced use).
    pub fn raw_sums(&self) -> &[f64] {
        &self.sums
    }

    /// Clear the accumulator to start fresh.
    pub fn clear(&mut self) {
        self.sums.fill(0.0);
        self.count = 0;
    }

    /// Zero the diagonal, divide by N and return the weight matrix.
    ///
    /// Fails if no pattern has been added.
    pub fn finish(&self) -> Result<WeightMatrix> {
        if self.count == 0 {
            return Err(HopfieldError::EmptyInput("no patterns to train on".into()));
        }

        let n = self.dimensions;
        let scale = n as f64;
        let mut data = self.sums.clone();
        for i in 0..n {
            data[i * n + i] = 0.0;
        }
        for w in &mut data {
            *w /= scale;
        }

        Ok(WeightMatrix::from_raw(n, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(data: &[i8]) -> Pattern {
        Pattern::from_data(data.to_vec()).unwrap()
    }

    #[test]
    fn test_accumulator_basic() {
        let mut acc = HebbianAccumulator::new(3).unwrap();
        assert_eq!(acc.count(), 0);

        acc.add(&pat(&[1, -1, 1])).unwrap();

        assert_eq!(acc.count(), 1);
        assert_eq!(
            acc.raw_sums(),
            &[1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0]
        );
    }

    #[test]
    fn test_superposition() {
        let mut acc = HebbianAccumulator::new(2).unwrap();
        acc.add(&pat(&[1, 1])).unwrap();
        acc.add(&pat(&[1, -1])).unwrap();
        acc.add(&pat(&[1, 1])).unwrap();

        // Off-diagonal: 1 - 1 + 1 = 1, diagonal counts patterns
        assert_eq!(acc.raw_sums(), &[3.0, 1.0, 1.0, 3.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut acc = HebbianAccumulator::new(3).unwrap();
        let err = acc.add(&pat(&[1, -1])).unwrap_err();
        assert_eq!(err, HopfieldError::DimensionMismatch { expected: 3, got: 2 });
        assert_eq!(acc.count(), 0);
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(HebbianAccumulator::new(0).is_err());
    }

    #[test]
    fn test_merge() {
        let mut acc1 = HebbianAccumulator::new(2).unwrap();
        let mut acc2 = HebbianAccumulator::new(2).unwrap();
        let mut both = HebbianAccumulator::new(2).unwrap();

        acc1.add(&pat(&[1, -1])).unwrap();
        acc2.add(&pat(&[1, 1])).unwrap();
        both.add(&pat(&[1, -1])).unwrap();
        both.add(&pat(&[1, 1])).unwrap();

        acc1.merge(&acc2).unwrap();

        assert_eq!(acc1.count(), 2);
        assert_eq!(acc1.raw_sums(), both.raw_sums());

        let other = HebbianAccumulator::new(3).unwrap();
        assert!(acc1.merge(&other).is_err());
    }

    #[test]
    fn test_finish() {
        let mut acc = HebbianAccumulator::new(2).unwrap();
        assert!(matches!(acc.finish(), Err(HopfieldError::EmptyInput(_))));

        acc.add(&pat(&[1, -1])).unwrap();
        let w = acc.finish().unwrap();
        assert_eq!(w.as_slice(), &[0.0, -0.5, -0.5, 0.0]);
    }

    #[test]
    fn test_clear() {
        let mut acc = HebbianAccumulator::new(2).unwrap();
        acc.add(&pat(&[1, -1])).unwrap();
        acc.clear();

        assert_eq!(acc.count(), 0);
        assert!(acc.raw_sums().iter().all(|&s| s == 0.0));
    }
}
