//! Flat mesh arrays and the per-cut triangle accumulator.
//!
//! [`MeshArrays`] is the hand-off format shared with rendering/physics
//! collaborators: parallel position/normal/UV arrays plus one index list per
//! surface group. [`GeneratedMesh`] is the append-only buffer one in-flight
//! cut writes into, finalized back into [`MeshArrays`] by
//! [`GeneratedMesh::export`].

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::triangle::MeshTriangle;
use crate::vertex::Vertex;
use nalgebra::{Point2, Point3, Vector3};

/// Flat, non-indexed-shared mesh geometry: parallel attribute arrays and
/// per-surface-group triangle index triples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshArrays {
    pub positions: Vec<Point3<Real>>,
    pub normals: Vec<Vector3<Real>>,
    pub uvs: Vec<Point2<Real>>,
    /// One `Vec` of index triples per surface group.
    pub groups: Vec<Vec<u32>>,
}

impl MeshArrays {
    /// Check the call contract: attribute arrays agree in length, every group
    /// holds whole triangles, and every index is in bounds.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.positions.len() != self.normals.len() || self.positions.len() != self.uvs.len() {
            return Err(GeometryError::AttributeLengthMismatch {
                positions: self.positions.len(),
                normals: self.normals.len(),
                uvs: self.uvs.len(),
            });
        }
        for (group, indices) in self.groups.iter().enumerate() {
            if indices.len() % 3 != 0 {
                return Err(GeometryError::RaggedIndexList {
                    group,
                    count: indices.len(),
                });
            }
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= self.positions.len()) {
                return Err(GeometryError::IndexOutOfBounds {
                    group,
                    index,
                    vertex_count: self.positions.len(),
                });
            }
        }
        Ok(())
    }

    /// Number of surface groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Gather one triangle's three vertices out of the flat arrays.
    ///
    /// Indices must already be validated; this is the kernel's inner loop.
    pub fn triangle(&self, group: usize, indices: [u32; 3]) -> MeshTriangle {
        let fetch = |i: u32| {
            let i = i as usize;
            Vertex::new(self.positions[i], self.normals[i], self.uvs[i])
        };
        MeshTriangle::new([fetch(indices[0]), fetch(indices[1]), fetch(indices[2])], group)
    }

    /// Vertical (Y) extent of the positions, `None` when there are none.
    pub fn vertical_extent(&self) -> Option<(Real, Real)> {
        let mut iter = self.positions.iter();
        let first = iter.next()?;
        let mut low = first.y;
        let mut high = first.y;
        for p in iter {
            if p.y < low {
                low = p.y;
            }
            if p.y > high {
                high = p.y;
            }
        }
        Some((low, high))
    }
}

/// Accumulates the triangles emitted for one output piece during a cut or
/// re-slice, keyed by surface group.
///
/// Append-only: triangles are never rejected, reordered, or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct GeneratedMesh {
    groups: Vec<Vec<MeshTriangle>>,
}

impl GeneratedMesh {
    pub const fn new() -> Self {
        GeneratedMesh { groups: Vec::new() }
    }

    /// Append a triangle to its surface group, growing the group table on
    /// demand.
    pub fn add(&mut self, triangle: MeshTriangle) {
        if triangle.group >= self.groups.len() {
            self.groups.resize_with(triangle.group + 1, Vec::new);
        }
        self.groups[triangle.group].push(triangle);
    }

    /// Total number of accumulated triangles.
    pub fn triangle_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// Iterate over all accumulated triangles in group order.
    pub fn triangles(&self) -> impl Iterator<Item = &MeshTriangle> {
        self.groups.iter().flatten()
    }

    /// Triangles of one surface group; empty for groups never written.
    pub fn group(&self, group: usize) -> &[MeshTriangle] {
        self.groups.get(group).map_or(&[], Vec::as_slice)
    }

    /// Flatten the accumulated triangles into export arrays.
    ///
    /// Every triangle contributes 3 fresh vertex slots; shared vertices are
    /// not deduplicated, matching flat non-indexed mesh export. Export does
    /// not consume the buffer and may be called repeatedly.
    pub fn export(&self) -> MeshArrays {
        let vertex_count = self.triangle_count() * 3;
        let mut out = MeshArrays {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            groups: Vec::with_capacity(self.groups.len()),
        };
        for triangles in &self.groups {
            let mut indices = Vec::with_capacity(triangles.len() * 3);
            for tri in triangles {
                for v in &tri.vertices {
                    indices.push(out.positions.len() as u32);
                    out.positions.push(v.pos);
                    out.normals.push(v.normal);
                    out.uvs.push(v.uv);
                }
            }
            out.groups.push(indices);
        }
        out
    }
}
