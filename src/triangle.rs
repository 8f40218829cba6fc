//! [`MeshTriangle`]: the unit of geometry every stage of a cut emits.

use crate::float_types::Real;
use crate::vertex::Vertex;
use nalgebra::Vector3;

/// Three vertices plus the surface group (material slot) they belong to.
///
/// Winding order is significant: the front face is defined by
/// `(v1 - v0) × (v2 - v0)` agreeing with vertex 0's shading normal. Every
/// constructor site in the crate calls [`MeshTriangle::rewind`] before a
/// triangle is accepted into a buffer, so stored triangles always satisfy
/// [`MeshTriangle::is_wound`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeshTriangle {
    pub vertices: [Vertex; 3],
    /// Output sub-surface this triangle is exported under.
    pub group: usize,
}

impl MeshTriangle {
    pub const fn new(vertices: [Vertex; 3], group: usize) -> Self {
        MeshTriangle { vertices, group }
    }

    /// Geometric (non-normalized) face normal `(v1 - v0) × (v2 - v0)`.
    pub fn geometric_normal(&self) -> Vector3<Real> {
        let [a, b, c] = &self.vertices;
        (b.pos - a.pos).cross(&(c.pos - a.pos))
    }

    /// Whether the vertex order agrees with vertex 0's shading normal.
    pub fn is_wound(&self) -> bool {
        self.geometric_normal().dot(&self.vertices[0].normal) >= 0.0
    }

    /// Reverse the winding by swapping vertex 0 and vertex 2, attributes
    /// included.
    pub fn flip(&mut self) {
        self.vertices.swap(0, 2);
    }

    /// Enforce the winding invariant: flip the triangle if its vertex order
    /// disagrees with vertex 0's shading normal.
    pub fn rewind(&mut self) {
        if !self.is_wound() {
            self.flip();
        }
    }

    /// Surface area of the triangle.
    pub fn area(&self) -> Real {
        self.geometric_normal().norm() * 0.5
    }
}
