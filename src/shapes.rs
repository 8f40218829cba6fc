//! Closed test solids in the kernel's flat-array input format.
//!
//! The cut kernel itself never builds geometry, but its tests (and demo
//! callers) need watertight inputs whose vertex normals agree with the
//! outward face orientation, so the winding invariant is meaningful.

use crate::float_types::{PI, Real};
use crate::mesh::MeshArrays;
use nalgebra::{Point2, Point3, Vector3};

/// An axis-aligned cube spanning `[0, size]³` as a single surface group.
///
/// The 8 corner vertices are shared between faces, with normals pointing
/// diagonally outward from the cube's center.
pub fn cube(size: Real) -> MeshArrays {
    let corners = [
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 1.0),
        (1.0, 1.0, 1.0),
        (0.0, 1.0, 1.0),
    ];
    let positions: Vec<Point3<Real>> = corners
        .iter()
        .map(|&(x, y, z)| Point3::new(x * size, y * size, z * size))
        .collect();
    let center = Point3::new(size * 0.5, size * 0.5, size * 0.5);
    let normals: Vec<Vector3<Real>> = positions.iter().map(|p| (p - center).normalize()).collect();
    let uvs: Vec<Point2<Real>> = corners.iter().map(|&(x, y, _)| Point2::new(x, y)).collect();

    // Outward-wound faces, two triangles each.
    let indices: Vec<u32> = vec![
        0, 1, 5, 0, 5, 4, // bottom (-Y)
        3, 7, 6, 3, 6, 2, // top (+Y)
        0, 3, 2, 0, 2, 1, // front (-Z)
        4, 5, 6, 4, 6, 7, // back (+Z)
        0, 4, 7, 0, 7, 3, // left (-X)
        1, 6, 5, 1, 2, 6, // right (+X)
    ];

    MeshArrays {
        positions,
        normals,
        uvs,
        groups: vec![indices],
    }
}

/// A closed upright cylinder: base at `y = 0`, apex ring at `y = height`,
/// `segments` side quads. The lateral surface is group 0, the two end caps
/// group 1.
pub fn cylinder(radius: Real, height: Real, segments: u32) -> MeshArrays {
    let segments = segments.max(3);
    let ring = |y: Real| {
        (0..segments).map(move |i| {
            let theta = 2.0 * PI * i as Real / segments as Real;
            (theta.cos(), y, theta.sin())
        })
    };

    let mut positions: Vec<Point3<Real>> = Vec::new();
    let mut normals: Vec<Vector3<Real>> = Vec::new();
    let mut uvs: Vec<Point2<Real>> = Vec::new();

    // Side rings with radial normals.
    for (x, y, z) in ring(0.0).chain(ring(height)) {
        positions.push(Point3::new(x * radius, y, z * radius));
        normals.push(Vector3::new(x, 0.0, z));
        uvs.push(Point2::new(x.atan2(z) / (2.0 * PI) + 0.5, y / height));
    }
    let bottom = |i: u32| i % segments;
    let top = |i: u32| segments + i % segments;

    let mut side_indices: Vec<u32> = Vec::with_capacity(segments as usize * 6);
    for i in 0..segments {
        side_indices.extend_from_slice(&[bottom(i), top(i), top(i + 1)]);
        side_indices.extend_from_slice(&[bottom(i), top(i + 1), bottom(i + 1)]);
    }

    // Cap rings own their vertices so the cap normals stay flat.
    let mut cap_indices: Vec<u32> = Vec::with_capacity(segments as usize * 6);
    for (y, normal) in [(0.0, -Vector3::y()), (height, Vector3::y())] {
        let center = positions.len() as u32;
        positions.push(Point3::new(0.0, y, 0.0));
        normals.push(normal);
        uvs.push(Point2::new(0.5, 0.5));
        let ring_start = positions.len() as u32;
        for (x, _, z) in ring(y) {
            positions.push(Point3::new(x * radius, y, z * radius));
            normals.push(normal);
            uvs.push(Point2::new(x * 0.5 + 0.5, z * 0.5 + 0.5));
        }
        for i in 0..segments {
            let a = ring_start + i;
            let b = ring_start + (i + 1) % segments;
            if normal.y < 0.0 {
                cap_indices.extend_from_slice(&[center, a, b]);
            } else {
                cap_indices.extend_from_slice(&[center, b, a]);
            }
        }
    }

    MeshArrays {
        positions,
        normals,
        uvs,
        groups: vec![side_indices, cap_indices],
    }
}
