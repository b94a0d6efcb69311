//! # Hopfield: Binary Associative Memory
//!
//! A fully-connected recurrent network that stores bipolar patterns as
//! stable attractors and recalls a stored pattern from a noisy or partial
//! probe.
//!
//! ## Quick Start
//!
//! ```rust
//! use hopfield::{recall_with_rng, to_bipolar, train};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Encode binary data as bipolar patterns
//! let a = to_bipolar(&[1u8, 0, 1, 0, 1, 0, 1, 0])?;
//! let b = to_bipolar(&[1u8, 1, 1, 1, 0, 0, 0, 0])?;
//!
//! // Hebbian training
//! let w = train(&[a.clone(), b])?;
//!
//! // Recall from a corrupted probe
//! let probe = a.flipped(&[2])?;
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let recalled = recall_with_rng(&w, &probe, 5, &mut rng)?;
//! assert_eq!(recalled, a);
//! # Ok::<(), hopfield::HopfieldError>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Patterns**: bipolar vectors ({-1, +1}), see [`Pattern`]
//! - **Encode**: binary {0, 1} → bipolar via `2x - 1`
//! - **Train**: superpose outer products, zero the diagonal, divide by N
//! - **Recall**: randomized asynchronous sign updates for a number of sweeps
//!
//! ## Layers
//!
//! - [`kernel`] — patterns, encoder, accumulator, weight matrix
//! - [`network`] — training and recall
//! - [`highlevel`] — the [`Hopfield`] convenience client

pub mod error;
pub mod highlevel;
pub mod kernel;
pub mod network;

// Re-exports for convenience
pub use error::{HopfieldError, Result};
pub use highlevel::Hopfield;
pub use kernel::{to_bipolar, Encoder, HebbianAccumulator, Pattern, WeightMatrix};
pub use network::{
    recall, recall_with_rng, train, RecallConfig, RecallOutcome, Recaller, Trainer,
    DEFAULT_STEPS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline() {
        let raw: Vec<Vec<u8>> = vec![vec![1, 0, 1, 0], vec![1, 1, 0, 0]];
        let patterns: Vec<Pattern> = raw.iter().map(|v| to_bipolar(v).unwrap()).collect();

        let w = train(&patterns).unwrap();
        assert_eq!(w.dimensions(), 4);

        let recalled = recall(&w, &patterns[0], DEFAULT_STEPS).unwrap();
        assert_eq!(recalled, patterns[0]);
    }

    #[test]
    fn test_errors_are_invalid_input() {
        let err = train(&[]).unwrap_err();
        assert!(err.is_invalid_input());

        let err = to_bipolar(&[3u8]).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
