//! Error types for Hopfield.

use thiserror::Error;

/// Hopfield error types.
///
/// Every variant describes input that violates the network's contract.
/// Nothing is retried and no caller-owned value is touched on failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HopfieldError {
    /// Empty input where non-empty was required
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Vector length does not match the network size
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Weight matrix is not N x N
    #[error("Weight matrix is not square: {rows} rows, row of length {cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Encoder input outside {0, 1}
    #[error("Value {value} at index {index} is not binary (expected 0 or 1)")]
    NotBinary { index: usize, value: f64 },

    /// Pattern component outside {-1, +1}
    #[error("Value {value} at index {index} is not bipolar (expected -1 or 1)")]
    NotBipolar { index: usize, value: f64 },

    /// Recall needs at least one sweep
    #[error("Invalid step count {0}: at least one sweep is required")]
    InvalidSteps(usize),
}

impl HopfieldError {
    /// All Hopfield errors are invalid-input failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            HopfieldError::EmptyInput(_)
                | HopfieldError::DimensionMismatch { .. }
                | HopfieldError::NotSquare { .. }
                | HopfieldError::NotBinary { .. }
                | HopfieldError::NotBipolar { .. }
                | HopfieldError::InvalidSteps(_)
        )
    }
}

/// Result type alias for Hopfield operations.
pub type Result<T> = std::result::Result<T, HopfieldError>;
