//! Errors reported by the distance transforms

use crate::float_types::Real;

/// Everything that can make a transform refuse to run.
///
/// All checks happen before any caller-provided buffer is written, so an
/// `Err` always leaves the output untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum DistanceError {
    /// (ShapeMismatch) Input and output arrays (or lines) differ in shape
    #[error("(ShapeMismatch) input shape {input:?} does not match output shape {output:?}")]
    ShapeMismatch { input: Vec<usize>, output: Vec<usize> },
    /// (InvalidPitch) A pixel pitch or parabola spread is not a positive finite number
    #[error("(InvalidPitch) pitch along axis {axis} must be positive and finite, got {pitch}")]
    InvalidPitch { axis: usize, pitch: Real },
    /// (PitchLength) One pitch per axis is required
    #[error("(PitchLength) expected {expected} per-axis pitches, got {found}")]
    PitchLength { expected: usize, found: usize },
    /// (ZeroDimensional) A rank-0 array has no axis to sweep along
    #[error("(ZeroDimensional) distance transforms need an array with at least one axis")]
    ZeroDimensional,
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, DistanceError>;

/// Check that `pitch` holds one positive, finite value per axis of a rank-`ndim` array.
pub(crate) fn validate_pitch(pitch: &[Real], ndim: usize) -> Result<()> {
    if ndim == 0 {
        return Err(DistanceError::ZeroDimensional);
    }
    if pitch.len() != ndim {
        return Err(DistanceError::PitchLength {
            expected: ndim,
            found: pitch.len(),
        });
    }
    match pitch
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        Some((axis, &pitch)) => Err(DistanceError::InvalidPitch { axis, pitch }),
        None => Ok(()),
    }
}

/// Compare two shapes, returning `ShapeMismatch` when they differ.
pub(crate) fn ensure_same_shape(input: &[usize], output: &[usize]) -> Result<()> {
    if input == output {
        Ok(())
    } else {
        Err(DistanceError::ShapeMismatch {
            input: input.to_vec(),
            output: output.to_vec(),
        })
    }
}
