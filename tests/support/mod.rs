//! Test support library
//! Brute-force reference transforms and comparison helpers.

#![allow(dead_code)]

use ndarray::{ArrayD, Dimension, IxDyn};
use parabolic_edt::float_types::Real;

/// "Infinity" used by the line helpers.
pub const INF: Real = 1e9;

/// Squared distance from each position of `seeds` to the closest finite seed,
/// `min_j (i - j)² + seeds[j]`, found by exhaustive scan.
pub fn brute_force_line(seeds: &[Real]) -> Vec<Real> {
    (0..seeds.len())
        .map(|i| {
            seeds
                .iter()
                .enumerate()
                .filter(|(_, s)| **s < INF)
                .map(|(j, s)| (i as Real - j as Real).powi(2) + s)
                .fold(INF, Real::min)
        })
        .collect()
}

/// Squared distance from every element to the nearest element where `is_seed`
/// holds, with per-axis `pitch`. Elements with no seed get `None`.
pub fn brute_force_nd(is_seed: &ArrayD<bool>, pitch: &[Real]) -> ArrayD<Option<Real>> {
    let seeds: Vec<Vec<usize>> = is_seed
        .indexed_iter()
        .filter(|(_, s)| **s)
        .map(|(idx, _)| idx.slice().to_vec())
        .collect();

    ArrayD::from_shape_fn(IxDyn(is_seed.shape()), |idx| {
        seeds
            .iter()
            .map(|seed| {
                seed.iter()
                    .enumerate()
                    .map(|(axis, &s)| (pitch[axis] * (idx[axis] as Real - s as Real)).powi(2))
                    .sum::<Real>()
            })
            .reduce(Real::min)
    })
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() <= eps * (1.0 + a.abs().max(b.abs()))
}
