//! Triangulating the reconstructed cross-section polygon and emitting the
//! double-sided cap.
//!
//! The triangulator is an ear-clipping variant working directly in 3D
//! against the cut plane's normal. Polygon orientation is taken from the
//! aggregate of signed turning angles, which stays correct in the presence
//! of a few locally reflex vertices; candidate ears must match that sign and
//! contain no other unconsumed vertex.

use crate::float_types::Real;
use crate::mesh::GeneratedMesh;
use crate::plane::Plane;
use crate::triangle::MeshTriangle;
use crate::vertex::Vertex;
use log::warn;
use nalgebra::{Point2, Point3, Vector3};

/// Signed angle from `a` to `b` around `normal`, in radians.
fn signed_angle(a: &Vector3<Real>, b: &Vector3<Real>, normal: &Vector3<Real>) -> Real {
    let angle = a.angle(b);
    let sign = normal.dot(&a.cross(b)).signum();
    angle * sign
}

/// Signed-angle-sum containment predicate: `point` counts as inside (or on
/// the border of) triangle `a b c` when walking the edges never flips the
/// turning sign against it.
///
/// A collinear edge contributes a zero term whose `signum` is `+1`, so border
/// detection depends on which vertex is passed as `a`: callers testing an ear
/// must pass the ear's apex first.
fn point_in_triangle(
    point: &Point3<Real>,
    a: &Point3<Real>,
    b: &Point3<Real>,
    c: &Point3<Real>,
    normal: &Vector3<Real>,
) -> bool {
    let ab = signed_angle(&(b - a), &(point - a), normal).signum();
    let bc = signed_angle(&(c - b), &(point - b), normal).signum();
    let ca = signed_angle(&(a - c), &(point - c), normal).signum();
    ab * bc >= 0.0 && bc * ca >= 0.0
}

/// Ear-clip `points` (a cyclic polygon lying in the cut plane) into
/// triangles, using `normal` as the reference direction.
///
/// Produces `points.len() - 2` triangles for a simple closed loop. If a full
/// pass over the remaining vertices yields no valid ear the pass is declared
/// stuck and the partial triangulation is returned.
pub fn triangulate_polygon(
    points: &[Point3<Real>],
    normal: &Vector3<Real>,
) -> Vec<[Point3<Real>; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    // Doubly-linked circular adjacency over vertex indices. Lookups skip
    // consumed vertices with iterative path compression, so repeated queries
    // never re-walk a consumed chain.
    let mut prev_free: Vec<usize> = (0..n).map(|i| (i + n - 1) % n).collect();
    let mut next_free: Vec<usize> = (0..n).map(|i| (i + 1) % n).collect();
    let mut used = vec![false; n];

    fn compress(links: &mut [usize], used: &[bool], i: usize) -> usize {
        while used[links[i]] {
            links[i] = links[links[i]];
        }
        links[i]
    }

    // Aggregate turning angle fixes the polygon's winding; individual ears
    // must turn the same way.
    let mut total_angle = 0.0;
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];
        total_angle += signed_angle(&(next - cur), &(cur - prev), normal);
    }

    let mut triangles = Vec::with_capacity(n - 2);
    while triangles.len() < n - 2 {
        let before = triangles.len();
        for i in 0..n {
            if used[i] {
                continue;
            }
            let prev = compress(&mut prev_free, &used, i);
            let next = compress(&mut next_free, &used, i);
            if prev == next {
                // Fewer than three vertices left on the loop.
                continue;
            }
            let turn = signed_angle(&(points[next] - points[i]), &(points[i] - points[prev]), normal);
            if turn * total_angle <= 0.0 {
                continue;
            }
            // Apex-first argument order: with the ear's corner as `a`, a
            // vertex lying exactly on the prev->next diagonal still counts
            // as inside and blocks the clip.
            let blocked = (0..n).any(|j| {
                j != i
                    && j != prev
                    && j != next
                    && !used[j]
                    && point_in_triangle(&points[j], &points[i], &points[prev], &points[next], normal)
            });
            if !blocked {
                triangles.push([points[prev], points[i], points[next]]);
                used[i] = true;
            }
        }
        if triangles.len() == before {
            warn!(
                "ear clipping stalled at {} of {} triangles; cap will be incomplete",
                triangles.len(),
                n - 2
            );
            break;
        }
    }
    triangles
}

/// Triangulate `boundary` and append the cap to both pieces: once facing
/// `-plane.normal` into the front piece and once facing `+plane.normal` into
/// the back piece, under the dedicated `cap_group`, UVs zeroed, each
/// triangle re-wound before acceptance.
pub fn fill_caps(
    boundary: &[Point3<Real>],
    plane: &Plane,
    front: &mut GeneratedMesh,
    back: &mut GeneratedMesh,
    cap_group: usize,
) {
    let cap = |corners: &[Point3<Real>; 3], normal: Vector3<Real>| {
        let vertex = |p: &Point3<Real>| Vertex::new(*p, normal, Point2::origin());
        let mut tri = MeshTriangle::new(
            [vertex(&corners[0]), vertex(&corners[1]), vertex(&corners[2])],
            cap_group,
        );
        tri.rewind();
        tri
    };

    for corners in triangulate_polygon(boundary, &plane.normal) {
        front.add(cap(&corners, -plane.normal));
        back.add(cap(&corners, plane.normal));
    }
}
