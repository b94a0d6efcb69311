//! Dense N x N weight matrix.
//!
//! Stored row-major. Produced by training and read-only afterwards: there
//! is no public mutator, so recall can share one matrix freely.

use crate::error::{HopfieldError, Result};
use crate::kernel::pattern::Pattern;

/// Symmetric connection weights between N neurons.
///
/// Matrices built by [`train`](crate::network::train) always have a zero
/// diagonal and `W[i][j] == W[j][i]`. Matrices supplied through
/// [`WeightMatrix::from_rows`] are only checked for shape.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightMatrix {
    dimensions: usize,
    data: Vec<f64>,
}

impl WeightMatrix {
    /// Build from row-major data. `data.len()` must equal `dimensions^2`.
    pub(crate) fn from_raw(dimensions: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), dimensions * dimensions);
        Self { dimensions, data }
    }

    /// Build from explicit rows, validating that the matrix is square.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(HopfieldError::EmptyInput("weight matrix has no rows".into()));
        }

        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(HopfieldError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self::from_raw(n, data))
    }

    /// Number of neurons (N).
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Weight between neurons `i` and `j`.
    ///
    /// # Panics
    /// If `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(j < self.dimensions, "column {} out of range", j);
        self.data[i * self.dimensions + j]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.dimensions;
        &self.data[start..start + self.dimensions]
    }

    /// Raw row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .chunks(self.dimensions)
            .map(|r| r.to_vec())
            .collect()
    }

    /// `|W[i][j] - W[j][i]| <= tolerance` for every pair.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.dimensions;
        (0..n).all(|i| (i + 1..n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance))
    }

    /// `W[i][i] == 0` for every neuron.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.dimensions).all(|i| self.get(i, i) == 0.0)
    }

    /// Net input to neuron `i`: dot product of row `i` with `state`.
    pub fn local_field(&self, i: usize, state: &[i8]) -> f64 {
        self.row(i)
            .iter()
            .zip(state)
            .map(|(&w, &s)| w * s as f64)
            .sum()
    }

    /// Fail unless `pattern` has exactly N components.
    pub fn check_pattern(&self, pattern: &Pattern) -> Result<()> {
        if pattern.dimensions() != self.dimensions {
            return Err(HopfieldError::DimensionMismatch {
                expected: self.dimensions,
                got: pattern.dimensions(),
            });
        }
        Ok(())
    }
}
