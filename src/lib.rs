//! Separable **Euclidean distance transforms** of N-dimensional masks,
//! built on the lower envelope of parabolas.
//!
//! Every element of a mask gets its (squared) Euclidean distance to the
//! nearest element of the complementary class. The transform runs one
//! linear-time [envelope](envelope) pass per line and sweeps the lines of
//! every axis in turn ([separable]), so the total cost is linear in the
//! number of elements whatever the rank of the array.
//!
//! # Features
//! #### Default
//! - **image-io**: distance maps straight from `image::GrayImage`s
//!
//! #### Optional
//! - **parallel**: use rayon to transform the lines of each axis in parallel
//!
//! # Example
//! ```
//! use ndarray::Array2;
//! use parabolic_edt::distance_transform;
//!
//! let mut mask = Array2::<u8>::zeros((5, 5));
//! mask[[2, 2]] = 1;
//! let mut dist = Array2::<f64>::zeros((5, 5));
//! distance_transform(&mask, &mut dist, true, None).unwrap();
//! assert_eq!(dist[[2, 0]], 2.0);
//! assert!((dist[[0, 0]] - 8f64.sqrt()).abs() < 1e-12);
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

pub mod element;
pub mod envelope;
pub mod errors;
pub mod float_types;
pub mod separable;
pub mod transform;

#[cfg(feature = "image-io")]
pub mod image;

pub use element::{DistanceValue, MaskValue, ValueKind};
pub use envelope::{Influence, ParabolaEnvelope, distance_parabola, distance_parabola_in_place};
pub use errors::{DistanceError, Result};
pub use separable::{SeparableOps, SerialSeparableOps};
pub use transform::{DistanceTransform, distance_transform, squared_distance_transform};

#[cfg(feature = "parallel")]
pub use separable::ParallelSeparableOps;
