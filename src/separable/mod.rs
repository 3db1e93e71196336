//! Separable N-dimensional sweep of the parabola envelope solver
//!
//! This module provides the N-D driver with dependency inversion,
//! allowing for different sweep implementations (serial/parallel).

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use serial::SerialSeparableOps;
pub use traits::SeparableOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSeparableOps;

/// The sweep implementation selected by the enabled features.
#[cfg(not(feature = "parallel"))]
pub type DefaultSeparableOps = SerialSeparableOps;
/// The sweep implementation selected by the enabled features.
#[cfg(feature = "parallel")]
pub type DefaultSeparableOps = ParallelSeparableOps;

pub const fn default_ops() -> DefaultSeparableOps {
    DefaultSeparableOps::new()
}
