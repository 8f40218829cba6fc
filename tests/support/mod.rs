//! Shared helpers for the integration tests.
#![allow(dead_code)] // each test binary uses its own subset

use cleaver::float_types::Real;
use cleaver::mesh::{GeneratedMesh, MeshArrays};

/// Enclosed volume of a closed, outward-wound triangle mesh via the
/// divergence theorem (sum of signed tetrahedra against the origin).
pub fn enclosed_volume(arrays: &MeshArrays) -> Real {
    let mut six_volumes = 0.0;
    for indices in &arrays.groups {
        for t in indices.chunks_exact(3) {
            let a = arrays.positions[t[0] as usize].coords;
            let b = arrays.positions[t[1] as usize].coords;
            let c = arrays.positions[t[2] as usize].coords;
            six_volumes += a.dot(&b.cross(&c));
        }
    }
    six_volumes / 6.0
}

/// Total surface area of the mesh.
pub fn surface_area(arrays: &MeshArrays) -> Real {
    let mut area = 0.0;
    for indices in &arrays.groups {
        for t in indices.chunks_exact(3) {
            let a = arrays.positions[t[0] as usize];
            let b = arrays.positions[t[1] as usize];
            let c = arrays.positions[t[2] as usize];
            area += (b - a).cross(&(c - a)).norm() * 0.5;
        }
    }
    area
}

/// Assert the winding invariant on every triangle in the buffer.
pub fn assert_all_wound(buffer: &GeneratedMesh) {
    for tri in buffer.triangles() {
        assert!(
            tri.is_wound(),
            "winding invariant violated for triangle {tri:?}"
        );
    }
}

/// Load a source mesh's triangles into a fresh buffer, as a caller would
/// before a non-separating re-slice.
pub fn buffer_from_arrays(arrays: &MeshArrays) -> GeneratedMesh {
    let mut buffer = GeneratedMesh::new();
    for (group, indices) in arrays.groups.iter().enumerate() {
        for t in indices.chunks_exact(3) {
            buffer.add(arrays.triangle(group, [t[0], t[1], t[2]]));
        }
    }
    buffer
}
