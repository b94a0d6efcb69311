//! Recall configuration.

use crate::error::{HopfieldError, Result};
use serde::{Deserialize, Serialize};

/// Default number of full asynchronous sweeps.
pub const DEFAULT_STEPS: usize = 5;

/// Configuration for asynchronous recall.
///
/// Missing fields take their defaults when deserialized, so
/// `{"steps": 10}` is a complete config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// Number of full sweeps over all neurons
    pub steps: usize,
    /// Seed for the update-order RNG; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// End early after a sweep that flips no neuron
    pub stop_when_stable: bool,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            seed: None,
            stop_when_stable: false,
        }
    }
}

impl RecallConfig {
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn stop_when_stable(mut self, enabled: bool) -> Self {
        self.stop_when_stable = enabled;
        self
    }

    /// Fail if `steps` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(HopfieldError::InvalidSteps(self.steps));
        }
        Ok(())
    }
}
