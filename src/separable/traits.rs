//! Traits defining the separable N-dimensional sweep for dependency inversion

use crate::element::DistanceValue;
use crate::errors::Result;
use crate::float_types::Real;
use ndarray::{ArrayView, ArrayViewMut, Dimension};

/// Applies the one-dimensional envelope solver along every axis of an array.
///
/// Axes are processed last to first. The first sweep reads the input; every
/// later sweep reads and writes the output in place, so the full N-D result
/// needs no buffer beyond the output. Lines of one axis are independent, but
/// each sweep must finish before the next axis starts.
pub trait SeparableOps {
    /// Sweep `input` into `output`, one parabola spread per axis in `sigmas`.
    fn transform<A, B, D>(
        &self,
        input: ArrayView<'_, A, D>,
        output: ArrayViewMut<'_, B, D>,
        sigmas: &[Real],
        invert: bool,
    ) -> Result<()>
    where
        A: DistanceValue,
        B: DistanceValue,
        D: Dimension;

    /// Sweep `data` in place.
    fn transform_in_place<B, D>(
        &self,
        data: ArrayViewMut<'_, B, D>,
        sigmas: &[Real],
        invert: bool,
    ) -> Result<()>
    where
        B: DistanceValue,
        D: Dimension;
}
