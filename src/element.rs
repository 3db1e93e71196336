//! Element type tags for masks and distance outputs.
//!
//! Output element types fall into a closed, two-way variant ([`ValueKind`]):
//! integral types may need a real-valued temporary to avoid overflow or
//! rounding, real types never do.

use crate::float_types::Real;
use num_traits::{AsPrimitive, Bounded, Zero};

/// Which branch of the output dispatch an element type takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integral,
    Real,
}

/// Elements accepted as a mask or label array.
///
/// A transform only ever asks whether an element is zero.
pub trait MaskValue {
    fn is_zero_value(&self) -> bool;
}

impl MaskValue for bool {
    #[inline]
    fn is_zero_value(&self) -> bool {
        !*self
    }
}

macro_rules! impl_mask_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl MaskValue for $t {
                #[inline]
                fn is_zero_value(&self) -> bool {
                    Zero::is_zero(self)
                }
            }
        )*
    };
}

impl_mask_value!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Elements that can hold (squared) distances.
pub trait DistanceValue: Copy + Send + Sync + Bounded + AsPrimitive<Real> {
    /// Integral or real.
    const KIND: ValueKind;

    /// Convert a real value into this type. Integral types round to the
    /// nearest integer and saturate at their bounds.
    fn from_real(value: Real) -> Self;

    /// Convert a real value into this type, dropping the fractional part.
    /// Integral types saturate at their bounds.
    fn from_real_truncated(value: Real) -> Self;

    #[inline]
    fn to_real(self) -> Real {
        self.as_()
    }

    /// Smallest representable value, as a real.
    #[inline]
    fn lowest() -> Real {
        Self::min_value().as_()
    }

    /// Largest representable value, as a real.
    #[inline]
    fn highest() -> Real {
        Self::max_value().as_()
    }

    #[inline]
    fn is_integral() -> bool {
        Self::KIND == ValueKind::Integral
    }
}

macro_rules! impl_integral_distance {
    ($($t:ty),* $(,)?) => {
        $(
            impl DistanceValue for $t {
                const KIND: ValueKind = ValueKind::Integral;

                // `as` from a float saturates at the type's bounds and maps NaN to zero.
                #[inline]
                fn from_real(value: Real) -> Self {
                    value.round() as $t
                }

                #[inline]
                fn from_real_truncated(value: Real) -> Self {
                    value.trunc() as $t
                }
            }
        )*
    };
}

macro_rules! impl_real_distance {
    ($($t:ty),* $(,)?) => {
        $(
            impl DistanceValue for $t {
                const KIND: ValueKind = ValueKind::Real;

                #[inline]
                fn from_real(value: Real) -> Self {
                    value as $t
                }

                #[inline]
                fn from_real_truncated(value: Real) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_integral_distance!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_real_distance!(f32, f64);
