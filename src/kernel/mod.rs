//! Kernel layer — data types and deterministic building blocks.
//!
//! The kernel provides the pieces training and recall are built from:
//! - Bipolar patterns ([`Pattern`])
//! - Binary ↔ bipolar conversion ([`Encoder`])
//! - Streaming outer-product sums ([`HebbianAccumulator`])
//! - The dense weight matrix ([`WeightMatrix`])
//!
//! Nothing in this layer draws random numbers; that lives in
//! [`network`](crate::network).
//!
//! # Example
//!
//! ```rust
//! use hopfield::kernel::{Encoder, HebbianAccumulator};
//!
//! let p = Encoder::to_bipolar(&[1u8, 0, 1, 0]).unwrap();
//!
//! let mut acc = HebbianAccumulator::new(4).unwrap();
//! acc.add(&p).unwrap();
//! let w = acc.finish().unwrap();
//! assert!(w.has_zero_diagonal());
//! ```

pub mod accumulator;
pub mod encoder;
pub mod pattern;
pub mod weights;

pub use accumulator::HebbianAccumulator;
pub use encoder::{to_bipolar, Encoder};
pub use pattern::Pattern;
pub use weights::WeightMatrix;
