//! One-dimensional squared distance transform via the lower envelope of parabolas.
//!
//! Each sample `k` of a line spawns a parabola `sigma² · (x - k)² + line[k]`.
//! The forward pass keeps a stack of [`Influence`] records describing which
//! parabola is lowest over which coordinate range; the backward pass walks
//! the surviving records left to right and evaluates them. Samples are read
//! only during the forward pass and written only during the backward pass,
//! which is what lets a line be transformed in place.
//!
//! The algorithm is taken from Donald Bailey: "An Efficient Euclidean Distance
//! Transform", Proc. IWCIA'04, Springer LNCS 3322, 2004.

use crate::element::DistanceValue;
use crate::errors::{Result, ensure_same_shape};
use crate::float_types::{Real, sq};
use ndarray::{ArrayView1, ArrayViewMut1};

/// One parabola on the envelope stack.
///
/// `[left, right)` is the coordinate range over which the parabola whose
/// vertex sits at `center` (with height `apex_height`) is the lowest one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Influence {
    pub left: Real,
    pub center: Real,
    pub right: Real,
    pub apex_height: Real,
}

impl Influence {
    pub const fn new(apex_height: Real, left: Real, center: Real, right: Real) -> Self {
        Self {
            left,
            center,
            right,
            apex_height,
        }
    }
}

/// Reusable envelope stack for one parabola spread.
///
/// The stack allocation is kept between lines, so a driver can sweep many
/// lines of the same axis with a single `ParabolaEnvelope`.
#[derive(Debug, Clone)]
pub struct ParabolaEnvelope {
    stack: Vec<Influence>,
    sigma2: Real,
}

impl ParabolaEnvelope {
    /// Envelope for parabolas of spread `sigma`.
    ///
    /// With `invert = true` the parabolas open downwards (dilation-style);
    /// otherwise upwards (distance transform and erosion).
    pub fn new(sigma: Real, invert: bool) -> Self {
        Self::with_capacity(sigma, invert, 0)
    }

    pub fn with_capacity(sigma: Real, invert: bool, capacity: usize) -> Self {
        let sigma2 = if invert { -sq(sigma) } else { sq(sigma) };
        Self {
            stack: Vec::with_capacity(capacity),
            sigma2,
        }
    }

    /// Signed curvature `±sigma²` of the parabolas.
    pub const fn sigma2(&self) -> Real {
        self.sigma2
    }

    /// The records that survived the last [`build`](Self::build).
    pub fn records(&self) -> &[Influence] {
        &self.stack
    }

    /// Forward pass: read samples `0..w` through `sample` and build the envelope.
    ///
    /// Samples are squared seed distances or a large finite "infinity".
    /// A zero-length line leaves the stack empty.
    pub fn build<F>(&mut self, w: usize, mut sample: F)
    where
        F: FnMut(usize) -> Real,
    {
        self.stack.clear();
        if w == 0 {
            return;
        }

        let width = w as Real;
        let sigma2 = self.sigma2;
        let sigma22 = 2.0 * sigma2;
        self.stack.push(Influence::new(sample(0), 0.0, 0.0, width));

        for k in 1..w {
            let current = k as Real;
            let value = sample(k);
            let mut intersection;

            loop {
                let Some(top) = self.stack.last_mut() else {
                    // every earlier parabola was dominated
                    intersection = 0.0;
                    break;
                };
                // centers strictly increase, so diff > 0
                let diff = current - top.center;
                intersection =
                    current + (value - top.apex_height - sigma2 * sq(diff)) / (sigma22 * diff);

                if intersection < top.left {
                    self.stack.pop();
                    continue;
                }
                if intersection < top.right {
                    top.right = intersection;
                }
                break;
            }

            self.stack.push(Influence::new(value, intersection, current, width));
        }
    }

    /// Value of the envelope at integer coordinate `k`, given the record index
    /// `cursor` that was active for the previous coordinate.
    #[inline]
    fn evaluate(&self, k: usize, cursor: &mut usize) -> Real {
        let current = k as Real;
        while *cursor + 1 < self.stack.len() && current >= self.stack[*cursor].right {
            *cursor += 1;
        }
        let influence = &self.stack[*cursor];
        self.sigma2 * sq(current - influence.center) + influence.apex_height
    }

    /// Backward pass: hand the envelope's value at every coordinate `0..w` to `write`.
    ///
    /// `w` must be the length passed to the preceding [`build`](Self::build).
    pub fn fill<F>(&self, w: usize, mut write: F)
    where
        F: FnMut(usize, Real),
    {
        if self.stack.is_empty() {
            return;
        }
        let mut cursor = 0;
        for k in 0..w {
            write(k, self.evaluate(k, &mut cursor));
        }
    }

    /// Transform `input` into `output`. Both lines must have the same length.
    pub(crate) fn transform_line<A, B>(&mut self, input: ArrayView1<'_, A>, mut output: ArrayViewMut1<'_, B>)
    where
        A: DistanceValue,
        B: DistanceValue,
    {
        debug_assert_eq!(input.len(), output.len());
        let w = input.len();
        self.build(w, |k| input[k].to_real());
        self.fill(w, |k, value| output[k] = B::from_real(value));
    }

    /// Transform `line` in place. The whole line is consumed into the stack
    /// before the first element is overwritten.
    pub(crate) fn transform_line_in_place<B>(&mut self, mut line: ArrayViewMut1<'_, B>)
    where
        B: DistanceValue,
    {
        let w = line.len();
        self.build(w, |k| line[k].to_real());
        self.fill(w, |k, value| line[k] = B::from_real(value));
    }
}

/// Squared distance transform of a single line.
///
/// `input` holds squared seed distances (`0` at seeds) or a large finite
/// "infinity" elsewhere; `output` receives the updated squared distances.
/// All arithmetic is done in [`Real`]; `output` values are converted on store.
pub fn distance_parabola<A, B>(
    input: ArrayView1<'_, A>,
    output: ArrayViewMut1<'_, B>,
    sigma: Real,
    invert: bool,
) -> Result<()>
where
    A: DistanceValue,
    B: DistanceValue,
{
    ensure_same_shape(input.shape(), output.shape())?;
    ParabolaEnvelope::with_capacity(sigma, invert, input.len()).transform_line(input, output);
    Ok(())
}

/// In-place form of [`distance_parabola`]: `line` is both input and output.
pub fn distance_parabola_in_place<B>(line: ArrayViewMut1<'_, B>, sigma: Real, invert: bool)
where
    B: DistanceValue,
{
    ParabolaEnvelope::with_capacity(sigma, invert, line.len()).transform_line_in_place(line);
}
