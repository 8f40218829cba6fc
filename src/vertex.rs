//! Struct and functions for working with [`Vertex`]s from which triangles are composed.

use crate::float_types::Real;
use nalgebra::{Point2, Point3, Vector3};

/// A mesh vertex carrying position, normal, and texture coordinate.
///
/// Every geometric operation that synthesizes a new point interpolates all
/// three attributes in lock-step; a position is never created without its
/// matching normal and UV.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
    pub uv: Point2<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – (optionally non-unit) normal, copied verbatim
    /// * `uv`     – texture coordinate, copied verbatim
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>, uv: Point2<Real>) -> Self {
        Vertex { pos, normal, uv }
    }

    /// Flip vertex normal
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Return the linear interpolation between `self` (`t = 0`) and `other`
    /// (`t = 1`).
    ///
    /// Normals and UVs are linearly interpolated as well.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        let new_pos = self.pos + (other.pos - self.pos) * t;
        let new_normal = self.normal + (other.normal - self.normal) * t;
        let new_uv = self.uv + (other.uv - self.uv) * t;
        Vertex::new(new_pos, new_normal, new_uv)
    }
}
