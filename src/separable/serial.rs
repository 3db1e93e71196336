//! Serial implementation of the separable sweep

use crate::element::DistanceValue;
use crate::envelope::ParabolaEnvelope;
use crate::errors::{Result, ensure_same_shape, validate_pitch};
use crate::float_types::Real;
use crate::separable::traits::SeparableOps;
use ndarray::{ArrayView, ArrayViewMut, Axis, Dimension, Zip};
use tracing::trace;

/// Serial implementation of `SeparableOps`
pub struct SerialSeparableOps;

impl SerialSeparableOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialSeparableOps {
    fn default() -> Self {
        Self::new()
    }
}

/// Sweep every line along `axis` of `data` in place, reusing one envelope stack.
fn sweep_in_place<B, D>(data: &mut ArrayViewMut<'_, B, D>, axis: usize, sigma: Real, invert: bool)
where
    B: DistanceValue,
    D: Dimension,
{
    let mut envelope = ParabolaEnvelope::with_capacity(sigma, invert, data.len_of(Axis(axis)));
    Zip::from(data.lanes_mut(Axis(axis)))
        .for_each(|line| envelope.transform_line_in_place(line));
}

impl SeparableOps for SerialSeparableOps {
    fn transform<A, B, D>(
        &self,
        input: ArrayView<'_, A, D>,
        mut output: ArrayViewMut<'_, B, D>,
        sigmas: &[Real],
        invert: bool,
    ) -> Result<()>
    where
        A: DistanceValue,
        B: DistanceValue,
        D: Dimension,
    {
        ensure_same_shape(input.shape(), output.shape())?;
        validate_pitch(sigmas, input.ndim())?;

        // operate on the last axis first, reading from the input
        let last = input.ndim() - 1;
        trace!(axis = last, lines = input.len() / input.len_of(Axis(last)).max(1), "separable sweep");
        let mut envelope =
            ParabolaEnvelope::with_capacity(sigmas[last], invert, input.len_of(Axis(last)));
        Zip::from(input.lanes(Axis(last)))
            .and(output.lanes_mut(Axis(last)))
            .for_each(|src, dst| envelope.transform_line(src, dst));

        // then every remaining axis, in place on the output
        for axis in (0..last).rev() {
            trace!(axis, "separable sweep");
            sweep_in_place(&mut output, axis, sigmas[axis], invert);
        }
        Ok(())
    }

    fn transform_in_place<B, D>(
        &self,
        mut data: ArrayViewMut<'_, B, D>,
        sigmas: &[Real],
        invert: bool,
    ) -> Result<()>
    where
        B: DistanceValue,
        D: Dimension,
    {
        validate_pitch(sigmas, data.ndim())?;

        for axis in (0..data.ndim()).rev() {
            trace!(axis, "separable sweep");
            sweep_in_place(&mut data, axis, sigmas[axis], invert);
        }
        Ok(())
    }
}
