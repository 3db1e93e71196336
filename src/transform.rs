//! Euclidean distance transforms of N-dimensional masks.
//!
//! Both entry points take a mask whose zero elements are background and whose
//! non-zero elements are objects. With `background = true` the distance of every
//! background element to the nearest object is computed (objects get `0`);
//! with `background = false` the distance of every object element to the
//! nearest background element is computed.

use crate::element::{DistanceValue, MaskValue};
use crate::errors::{Result, ensure_same_shape, validate_pitch};
use crate::float_types::{Real, has_fractional_pitch, sentinel};
use crate::separable::{SeparableOps, default_ops};
use ndarray::{Array, ArrayBase, ArrayViewMut, Data, DataMut, Dimension, Zip};
use tracing::debug;

/// Write the squared seed distances for `input` into `dest`: `0` at seeds,
/// `inf` everywhere else.
fn seed<A, B, S, D>(input: &ArrayBase<S, D>, mut dest: ArrayViewMut<'_, B, D>, background: bool, inf: Real)
where
    A: MaskValue,
    B: DistanceValue,
    S: Data<Elem = A>,
    D: Dimension,
{
    let far = B::from_real(inf);
    let near = B::from_real(0.0);
    Zip::from(&mut dest).and(input).for_each(|d, m| {
        *d = if m.is_zero_value() == background { far } else { near };
    });
}

/// Squared Euclidean distance transform of a multi-dimensional mask.
///
/// `pixel_pitch` gives the sampling distance along each axis (anisotropic
/// data such as confocal stacks); `None` means `1.0` everywhere. Elements
/// that have no seed anywhere in the array get the sentinel
/// `1 + Σ (pitch · extent)²` (or its saturated image for integral outputs).
///
/// Integral outputs are computed on a real-valued temporary when the
/// sentinel would not fit or a pitch is fractional; the result is then
/// rounded and saturated into `output`. Otherwise `output` itself is the
/// working buffer.
///
/// # Example
/// ```
/// use ndarray::{Array2, array};
/// use parabolic_edt::squared_distance_transform;
///
/// let mask = array![[0u8, 0, 0], [0, 1, 0], [0, 0, 0]];
/// let mut dist = Array2::<u32>::zeros((3, 3));
/// squared_distance_transform(&mask, &mut dist, true, None).unwrap();
/// assert_eq!(dist, array![[2, 1, 2], [1, 0, 1], [2, 1, 2]]);
/// ```
pub fn squared_distance_transform<A, B, S1, S2, D>(
    input: &ArrayBase<S1, D>,
    output: &mut ArrayBase<S2, D>,
    background: bool,
    pixel_pitch: Option<&[Real]>,
) -> Result<()>
where
    A: MaskValue,
    B: DistanceValue,
    S1: Data<Elem = A>,
    S2: DataMut<Elem = B>,
    D: Dimension,
{
    ensure_same_shape(input.shape(), output.shape())?;
    let unit_pitch;
    let pitch = match pixel_pitch {
        Some(pitch) => pitch,
        None => {
            unit_pitch = vec![1.0; input.ndim()];
            unit_pitch.as_slice()
        }
    };
    validate_pitch(pitch, input.ndim())?;

    let inf = sentinel(input.shape(), pitch);
    let ops = default_ops();

    if B::is_integral() && (has_fractional_pitch(pitch) || inf > B::highest()) {
        debug!(
            shape = ?input.shape(),
            inf,
            "distance transform on a real-valued temporary"
        );
        let mut tmp = Array::<Real, D>::zeros(output.raw_dim());
        seed(input, tmp.view_mut(), background, inf);
        ops.transform_in_place(tmp.view_mut(), pitch, false)?;
        // round to nearest, saturating at the output type's bounds
        Zip::from(output).and(&tmp).for_each(|o, &t| *o = B::from_real(t));
    } else {
        debug!(
            shape = ?input.shape(),
            inf,
            "distance transform on the destination array"
        );
        seed(input, output.view_mut(), background, inf);
        ops.transform_in_place(output.view_mut(), pitch, false)?;
    }
    Ok(())
}

/// Euclidean distance transform of a multi-dimensional mask.
///
/// Runs [`squared_distance_transform`] and takes the square root of every
/// element. Integral outputs keep the integer part of the root.
pub fn distance_transform<A, B, S1, S2, D>(
    input: &ArrayBase<S1, D>,
    output: &mut ArrayBase<S2, D>,
    background: bool,
    pixel_pitch: Option<&[Real]>,
) -> Result<()>
where
    A: MaskValue,
    B: DistanceValue,
    S1: Data<Elem = A>,
    S2: DataMut<Elem = B>,
    D: Dimension,
{
    squared_distance_transform(input, output, background, pixel_pitch)?;
    output.map_inplace(|v| *v = B::from_real_truncated(v.to_real().sqrt()));
    Ok(())
}

/// Owned-output front end holding the transform settings.
///
/// # Example
/// ```
/// use ndarray::array;
/// use parabolic_edt::DistanceTransform;
///
/// let mask = array![true, false, false, false];
/// let dist = DistanceTransform::new().background(true).euclidean(&mask).unwrap();
/// assert_eq!(dist, array![0.0, 1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceTransform {
    background: bool,
    pixel_pitch: Option<Vec<Real>>,
}

impl DistanceTransform {
    /// Object-to-background distances with unit pitch.
    pub const fn new() -> Self {
        Self {
            background: false,
            pixel_pitch: None,
        }
    }

    /// Measure background elements against the nearest object instead.
    pub fn background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }

    /// Per-axis sampling distance.
    pub fn pixel_pitch(mut self, pitch: impl Into<Vec<Real>>) -> Self {
        self.pixel_pitch = Some(pitch.into());
        self
    }

    pub fn squared_into<A, B, S1, S2, D>(
        &self,
        input: &ArrayBase<S1, D>,
        output: &mut ArrayBase<S2, D>,
    ) -> Result<()>
    where
        A: MaskValue,
        B: DistanceValue,
        S1: Data<Elem = A>,
        S2: DataMut<Elem = B>,
        D: Dimension,
    {
        squared_distance_transform(input, output, self.background, self.pixel_pitch.as_deref())
    }

    pub fn euclidean_into<A, B, S1, S2, D>(
        &self,
        input: &ArrayBase<S1, D>,
        output: &mut ArrayBase<S2, D>,
    ) -> Result<()>
    where
        A: MaskValue,
        B: DistanceValue,
        S1: Data<Elem = A>,
        S2: DataMut<Elem = B>,
        D: Dimension,
    {
        distance_transform(input, output, self.background, self.pixel_pitch.as_deref())
    }

    /// Squared distances in a freshly allocated real-valued array.
    pub fn squared<A, S, D>(&self, input: &ArrayBase<S, D>) -> Result<Array<Real, D>>
    where
        A: MaskValue,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mut output = Array::zeros(input.raw_dim());
        self.squared_into(input, &mut output)?;
        Ok(output)
    }

    /// Euclidean distances in a freshly allocated real-valued array.
    pub fn euclidean<A, S, D>(&self, input: &ArrayBase<S, D>) -> Result<Array<Real, D>>
    where
        A: MaskValue,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mut output = Array::zeros(input.raw_dim());
        self.euclidean_into(input, &mut output)?;
        Ok(output)
    }
}
