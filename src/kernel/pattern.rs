//! Pattern type for Hopfield.
//!
//! A pattern is a bipolar vector with every element in {-1, +1}.
//! Internally stored as i8, like the neuron states it represents.

use crate::error::{HopfieldError, Result};
use rand::seq::index;
use rand::Rng;
use std::ops::Index;

/// A fixed-length bipolar vector.
///
/// Used for training patterns, recall probes and network state.
/// Construction validates that every element is -1 or +1, so any
/// `Pattern` in hand is a legal network state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    data: Vec<i8>,
}

impl Pattern {
    /// Create a pattern from raw bipolar data.
    ///
    /// Fails with [`HopfieldError::NotBipolar`] if any element is not -1 or +1,
    /// and with [`HopfieldError::EmptyInput`] for a zero-length vector.
    pub fn from_data(data: Vec<i8>) -> Result<Self> {
        if data.is_empty() {
            return Err(HopfieldError::EmptyInput("pattern has no elements".into()));
        }
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, &v)| v != 1 && v != -1) {
            return Err(HopfieldError::NotBipolar {
                index,
                value: value as f64,
            });
        }
        Ok(Self { data })
    }

    /// Create a pattern from f64 values that must be exactly -1.0 or 1.0.
    pub fn from_f64(values: &[f64]) -> Result<Self> {
        let mut data = Vec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            let v = if value == 1.0 {
                1
            } else if value == -1.0 {
                -1
            } else {
                return Err(HopfieldError::NotBipolar { index, value });
            };
            data.push(v);
        }
        Self::from_data(data)
    }

    /// Threshold arbitrary values into a pattern: `>= 0` maps to +1.
    ///
    /// Same tie-break as the recall update rule.
    pub fn from_signs(values: &[f64]) -> Result<Self> {
        Self::from_data(
            values
                .iter()
                .map(|&v| if v >= 0.0 { 1 } else { -1 })
                .collect(),
        )
    }

    /// Build without validation. Callers guarantee every element is ±1.
    pub(crate) fn from_data_unchecked(data: Vec<i8>) -> Self {
        debug_assert!(data.iter().all(|&v| v == 1 || v == -1));
        Self { data }
    }

    /// Get the dimensionality (number of neurons).
    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    /// Get the raw data as a slice.
    pub fn data(&self) -> &[i8] {
        &self.data
    }

    /// Consume the pattern and return its raw data.
    pub fn into_data(self) -> Vec<i8> {
        self.data
    }

    /// Convert to f64 vector.
    pub fn to_f64(&self) -> Vec<f64> {
        self.data.iter().map(|&v| v as f64).collect()
    }

    /// Number of positions where the two patterns differ.
    pub fn hamming_distance(&self, other: &Pattern) -> Result<usize> {
        self.check_same_length(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Normalized agreement in [-1, 1]: 1 for identical, -1 for inverse.
    pub fn overlap(&self, other: &Pattern) -> Result<f64> {
        self.check_same_length(other)?;
        let dot: i64 = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| (a as i64) * (b as i64))
            .sum();
        Ok(dot as f64 / self.dimensions() as f64)
    }

    /// Copy of this pattern with the given components sign-flipped.
    ///
    /// Repeated indices flip repeatedly.
    pub fn flipped(&self, indices: &[usize]) -> Result<Pattern> {
        let mut data = self.data.clone();
        for &i in indices {
            if i >= data.len() {
                return Err(HopfieldError::DimensionMismatch {
                    expected: data.len(),
                    got: i + 1,
                });
            }
            data[i] = -data[i];
        }
        Ok(Self::from_data_unchecked(data))
    }

    /// Copy of this pattern with `count` distinct random components flipped.
    pub fn with_noise<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Pattern> {
        if count > self.dimensions() {
            return Err(HopfieldError::DimensionMismatch {
                expected: self.dimensions(),
                got: count,
            });
        }
        let picked = index::sample(rng, self.dimensions(), count).into_vec();
        self.flipped(&picked)
    }

    fn check_same_length(&self, other: &Pattern) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(HopfieldError::DimensionMismatch {
                expected: self.dimensions(),
                got: other.dimensions(),
            });
        }
        Ok(())
    }
}

impl Index<usize> for Pattern {
    type Output = i8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl TryFrom<Vec<i8>> for Pattern {
    type Error = HopfieldError;

    fn try_from(data: Vec<i8>) -> Result<Self> {
        Self::from_data(data)
    }
}

impl AsRef<[i8]> for Pattern {
    fn as_ref(&self) -> &[i8] {
        &self.data
    }
}
