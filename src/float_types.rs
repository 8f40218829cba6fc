//! Scalar type selection and the tolerance used across the crate.

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used when deciding whether two cut points are the same point,
/// e.g. the degenerate-sliver check after a split and the exact-match pass
/// of boundary reconstruction.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used when deciding whether two cut points are the same point,
/// e.g. the degenerate-sliver check after a split and the exact-match pass
/// of boundary reconstruction.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;

/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;
