//! Network layer: training and recall.
//!
//! - [`train`] / [`Trainer`] build a [`WeightMatrix`](crate::kernel::WeightMatrix)
//!   from bipolar patterns with the Hebbian outer-product rule.
//! - [`recall`] / [`recall_with_rng`] / [`Recaller`] relax a probe toward a
//!   stored attractor with randomized asynchronous updates.
//!
//! # Usage
//!
//! ```rust
//! use hopfield::network::{train, RecallConfig, Recaller};
//! use hopfield::kernel::Encoder;
//!
//! let stored = Encoder::to_bipolar(&[1u8, 0, 1, 0, 1, 0, 1, 0]).unwrap();
//! let w = train(&[stored.clone()]).unwrap();
//!
//! let probe = stored.flipped(&[0]).unwrap();
//! let mut recaller = Recaller::new(RecallConfig::default().with_seed(42)).unwrap();
//! assert_eq!(recaller.recall(&w, &probe).unwrap(), stored);
//! ```

pub mod config;
pub mod recaller;
pub mod trainer;

pub use config::{RecallConfig, DEFAULT_STEPS};
pub use recaller::{recall, recall_with_rng, relax, RecallOutcome, Recaller};
pub use trainer::{train, Trainer};
