// Our Real scalar type.
//
// The envelope solver always works in double precision, whatever the element
// types of the arrays it reads and writes; conversions happen only when a
// line is loaded or stored.
pub type Real = f64;

/// Square of a real number.
#[inline]
pub const fn sq(x: Real) -> Real {
    x * x
}

/// The "infinity" used to seed non-seed elements of an array with the given
/// shape and per-axis pixel pitch.
///
/// `1 + Σ (pitch[k] · shape[k])²` exceeds every squared distance that can occur
/// inside the array while keeping all solver arithmetic finite.
pub fn sentinel(shape: &[usize], pixel_pitch: &[Real]) -> Real {
    shape
        .iter()
        .zip(pixel_pitch)
        .fold(1.0, |acc, (&extent, &pitch)| acc + sq(pitch * extent as Real))
}

/// Returns `true` when some pitch has a fractional part, which means an
/// integral output could not hold the squared distances exactly.
pub fn has_fractional_pitch(pixel_pitch: &[Real]) -> bool {
    pixel_pitch.iter().any(|p| p.fract() != 0.0)
}
