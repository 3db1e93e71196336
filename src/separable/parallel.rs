//! Parallel implementation of the separable sweep

use rayon::current_num_threads;

use crate::element::DistanceValue;
use crate::envelope::ParabolaEnvelope;
use crate::errors::{Result, ensure_same_shape, validate_pitch};
use crate::float_types::Real;
use crate::separable::traits::SeparableOps;
use ndarray::{ArrayView, ArrayViewMut, Axis, Dimension, Zip};
use tracing::trace;

/// Parallel implementation of `SeparableOps`.
///
/// Lines of one axis are distributed over the rayon pool; `par_for_each`
/// returns only once every line is done, which is the barrier between axes.
pub struct ParallelSeparableOps;

impl ParallelSeparableOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelSeparableOps {
    fn default() -> Self {
        Self::new()
    }
}

fn par_sweep_in_place<B, D>(data: &mut ArrayViewMut<'_, B, D>, axis: usize, sigma: Real, invert: bool)
where
    B: DistanceValue,
    D: Dimension,
{
    let w = data.len_of(Axis(axis));
    Zip::from(data.lanes_mut(Axis(axis))).par_for_each(|line| {
        ParabolaEnvelope::with_capacity(sigma, invert, w).transform_line_in_place(line)
    });
}

impl SeparableOps for ParallelSeparableOps {
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

        let last = input.ndim() - 1;
        let w = input.len_of(Axis(last));
        let sigma = sigmas[last];
        trace!(axis = last, threads = current_num_threads(), "parallel separable sweep");
        Zip::from(input.lanes(Axis(last)))
            .and(output.lanes_mut(Axis(last)))
            .par_for_each(|src, dst| {
                ParabolaEnvelope::with_capacity(sigma, invert, w).transform_line(src, dst)
            });

        for axis in (0..last).rev() {
            trace!(axis, "parallel separable sweep");
            par_sweep_in_place(&mut output, axis, sigmas[axis], invert);
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
            trace!(axis, threads = current_num_threads(), "parallel separable sweep");
            par_sweep_in_place(&mut data, axis, sigmas[axis], invert);
        }
        Ok(())
    }
}
