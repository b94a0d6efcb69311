//! Encoder: binary {0, 1} vectors to bipolar {-1, +1} patterns.
//!
//! The network works on bipolar states, so raw binary data goes through
//! the affine map `x -> 2x - 1` first (0 -> -1, 1 -> +1).
//!
//! Input outside {0, 1} is rejected rather than pushed through the map,
//! since `2x - 1` of anything else is not a valid neuron state.

use crate::error::{HopfieldError, Result};
use crate::kernel::pattern::Pattern;

/// Converts between binary vectors and bipolar patterns.
///
/// Accepts any element type that widens losslessly to `f64`
/// (`u8`, `i32`, `u32`, `f32`, `f64`, ...), so integer-valued reals work too.
#[derive(Clone, Copy, Debug, Default)]
pub struct Encoder;

impl Encoder {
    /// Map a {0, 1} vector to a bipolar pattern.
    ///
    /// # Example
    /// ```rust
    /// use hopfield::Encoder;
    ///
    /// let p = Encoder::to_bipolar(&[0u8, 1, 1, 0]).unwrap();
    /// assert_eq!(p.data(), &[-1, 1, 1, -1]);
    /// ```
    pub fn to_bipolar<T: Copy + Into<f64>>(values: &[T]) -> Result<Pattern> {
        if values.is_empty() {
            return Err(HopfieldError::EmptyInput("binary vector has no elements".into()));
        }

        let mut data = Vec::with_capacity(values.len());
        for (index, &v) in values.iter().enumerate() {
            let x: f64 = v.into();
            if x == 0.0 || x == 1.0 {
                data.push((2.0 * x - 1.0) as i8);
            } else {
                return Err(HopfieldError::NotBinary { index, value: x });
            }
        }

        Ok(Pattern::from_data_unchecked(data))
    }

    /// Map a bipolar pattern back to {0, 1}: `(x + 1) / 2`.
    pub fn to_binary(pattern: &Pattern) -> Vec<u8> {
        pattern.data().iter().map(|&v| ((v + 1) / 2) as u8).collect()
    }
}

/// Free-function form of [`Encoder::to_bipolar`].
pub fn to_bipolar<T: Copy + Into<f64>>(values: &[T]) -> Result<Pattern> {
    Encoder::to_bipolar(values)
}
