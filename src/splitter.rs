//! Classifying triangles against the cut plane and splitting the ones that
//! straddle it.
//!
//! Splitting partitions a straddling triangle's corners into a 2-vs-1
//! majority per side (the lone corner is duplicated so each side carries a
//! synthetic two-vertex pair), interpolates the two plane intersections, and
//! emits up to four triangles: two per side, minus any that degenerate to
//! zero area. Each survivor is re-wound before acceptance, and the two
//! intersection points are recorded as one [`CutEdge`] for boundary
//! reconstruction.

use crate::boundary::CutEdge;
use crate::float_types::{EPSILON, Real};
use crate::mesh::{GeneratedMesh, MeshArrays};
use crate::plane::Plane;
use crate::triangle::MeshTriangle;
use crate::vertex::Vertex;
use nalgebra::Point3;

/// The result of splitting one straddling triangle.
pub struct SplitPieces {
    /// Triangles on the positive-normal side (at most 2).
    pub front: Vec<MeshTriangle>,
    /// Triangles on the negative-normal side (at most 2).
    pub back: Vec<MeshTriangle>,
    /// The new edge lying exactly on the plane.
    pub edge: CutEdge,
}

#[inline]
fn points_coincide(a: &Point3<Real>, b: &Point3<Real>) -> bool {
    (a - b).norm_squared() < EPSILON * EPSILON
}

/// Accept `candidate` into `out` unless its interpolated corners coincide
/// with the original corner, which marks a zero-area sliver.
fn accept(out: &mut Vec<MeshTriangle>, mut candidate: MeshTriangle) {
    let [a, b, c] = &candidate.vertices;
    if points_coincide(&a.pos, &b.pos) || points_coincide(&a.pos, &c.pos) {
        return;
    }
    candidate.rewind();
    out.push(candidate);
}

/// Split a triangle known to have corners on both sides of `plane`.
///
/// The caller guarantees mixed classification; with a strict side test that
/// makes both intersection denominators non-zero, so the split is total.
pub fn split_triangle(plane: &Plane, triangle: &MeshTriangle) -> SplitPieces {
    let distances: Vec<Real> = triangle
        .vertices
        .iter()
        .map(|v| plane.signed_distance(&v.pos))
        .collect();

    let mut front_idx: Vec<usize> = Vec::with_capacity(2);
    let mut back_idx: Vec<usize> = Vec::with_capacity(2);
    for (i, &d) in distances.iter().enumerate() {
        if d > 0.0 {
            front_idx.push(i);
        } else {
            back_idx.push(i);
        }
    }
    // The lone corner fills both of its side's slots so each intersection
    // segment below shares an origin per side.
    let f = [front_idx[0], *front_idx.get(1).unwrap_or(&front_idx[0])];
    let b = [back_idx[0], *back_idx.get(1).unwrap_or(&back_idx[0])];

    // d_front > 0 >= d_back, so the denominator is strictly positive.
    let cross = |fi: usize, bi: usize| -> Vertex {
        let t = distances[fi] / (distances[fi] - distances[bi]);
        triangle.vertices[fi].interpolate(&triangle.vertices[bi], t)
    };
    let first = cross(f[0], b[0]);
    let second = cross(f[1], b[1]);

    let edge = CutEdge::new(first.pos, second.pos);
    let v = &triangle.vertices;
    let group = triangle.group;

    let mut front = Vec::with_capacity(2);
    accept(
        &mut front,
        MeshTriangle::new([v[f[0]].clone(), first.clone(), second.clone()], group),
    );
    accept(
        &mut front,
        MeshTriangle::new([v[f[0]].clone(), v[f[1]].clone(), second.clone()], group),
    );

    let mut back = Vec::with_capacity(2);
    accept(
        &mut back,
        MeshTriangle::new([v[b[0]].clone(), first, second.clone()], group),
    );
    accept(
        &mut back,
        MeshTriangle::new([v[b[0]].clone(), v[b[1]].clone(), second], group),
    );

    SplitPieces { front, back, edge }
}

/// Classification-partition every triangle of `source` into `front`/`back`
/// buffers, diverting straddling triangles through [`split_triangle`] and
/// recording each new cut edge into `edges`.
pub fn separate_meshes(
    plane: &Plane,
    source: &MeshArrays,
    front: &mut GeneratedMesh,
    back: &mut GeneratedMesh,
    edges: &mut Vec<CutEdge>,
) {
    for_each_triangle(source, |triangle| {
        match classify(plane, &triangle) {
            Classification::Front => front.add(triangle),
            Classification::Back => back.add(triangle),
            Classification::Straddling => {
                let pieces = split_triangle(plane, &triangle);
                edges.push(pieces.edge);
                for tri in pieces.front {
                    front.add(tri);
                }
                for tri in pieces.back {
                    back.add(tri);
                }
            },
        }
    });
}

/// Non-separating variant: split straddling triangles of `source` and append
/// every piece into the one `buffer`, recording nothing. Triangles entirely
/// on one side are skipped — the pass only injects the extra edge loop.
pub fn slice_without_separating(plane: &Plane, source: &MeshArrays, buffer: &mut GeneratedMesh) {
    for_each_triangle(source, |triangle| {
        if let Classification::Straddling = classify(plane, &triangle) {
            let pieces = split_triangle(plane, &triangle);
            for tri in pieces.front.into_iter().chain(pieces.back) {
                buffer.add(tri);
            }
        }
    });
}

enum Classification {
    Front,
    Back,
    Straddling,
}

fn classify(plane: &Plane, triangle: &MeshTriangle) -> Classification {
    let side = |i: usize| plane.is_front(&triangle.vertices[i].pos);
    match (side(0), side(1), side(2)) {
        (true, true, true) => Classification::Front,
        (false, false, false) => Classification::Back,
        _ => Classification::Straddling,
    }
}

fn for_each_triangle(source: &MeshArrays, mut visit: impl FnMut(MeshTriangle)) {
    for (group, indices) in source.groups.iter().enumerate() {
        for triple in indices.chunks_exact(3) {
            visit(source.triangle(group, [triple[0], triple[1], triple[2]]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point2, Vector3};

    fn vert(x: Real, y: Real, z: Real) -> Vertex {
        Vertex::new(Point3::new(x, y, z), Vector3::z(), Point2::new(x, y))
    }

    #[test]
    fn two_one_split_yields_three_pieces() {
        // One corner above y = 0.5, two below.
        let tri = MeshTriangle::new(
            [vert(0.0, 0.0, 0.0), vert(1.0, 0.0, 0.0), vert(0.0, 1.0, 0.0)],
            0,
        );
        let plane = Plane::from_normal(Vector3::y(), 0.5);
        let pieces = split_triangle(&plane, &tri);

        // Lone side keeps one triangle, the quad side two.
        assert_eq!(pieces.front.len(), 1);
        assert_eq!(pieces.back.len(), 2);
        for tri in pieces.front.iter().chain(&pieces.back) {
            assert!(tri.is_wound());
        }

        // Both recorded endpoints lie exactly on the plane.
        assert_relative_eq!(pieces.edge.a.y, 0.5);
        assert_relative_eq!(pieces.edge.b.y, 0.5);

        // Area is conserved across the split.
        let split_area: Real = pieces
            .front
            .iter()
            .chain(&pieces.back)
            .map(MeshTriangle::area)
            .sum();
        assert_relative_eq!(split_area, tri.area(), epsilon = 1e-9);
    }

    #[test]
    fn split_interpolates_attributes() {
        let mut tri = MeshTriangle::new(
            [vert(0.0, 0.0, 0.0), vert(1.0, 0.0, 0.0), vert(0.0, 1.0, 0.0)],
            0,
        );
        tri.vertices[0].normal = Vector3::x();
        tri.vertices[2].normal = Vector3::y();
        let plane = Plane::from_normal(Vector3::y(), 0.5);
        let pieces = split_triangle(&plane, &tri);

        // The cut point on the 0->2 edge sits halfway, so its normal does too.
        let on_edge = pieces
            .front
            .iter()
            .chain(&pieces.back)
            .flat_map(|t| &t.vertices)
            .find(|v| v.pos.x == 0.0 && v.pos.y == 0.5)
            .expect("interpolated vertex on left edge");
        assert_relative_eq!(on_edge.normal.x, 0.5);
        assert_relative_eq!(on_edge.normal.y, 0.5);
        assert_relative_eq!(on_edge.uv.y, 0.5);
    }

    #[test]
    fn separate_meshes_routes_whole_triangles() {
        let source = MeshArrays {
            positions: vec![
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(1.0, 2.0, 0.0),
                Point3::new(0.0, 3.0, 0.0),
            ],
            normals: vec![Vector3::z(); 3],
            uvs: vec![Point2::origin(); 3],
            groups: vec![vec![0, 1, 2]],
        };
        let plane = Plane::from_normal(Vector3::y(), 0.5);
        let mut front = GeneratedMesh::new();
        let mut back = GeneratedMesh::new();
        let mut edges = Vec::new();
        separate_meshes(&plane, &source, &mut front, &mut back, &mut edges);
        assert_eq!(front.triangle_count(), 1);
        assert_eq!(back.triangle_count(), 0);
        assert!(edges.is_empty());
    }

    #[test]
    fn non_separating_slice_skips_one_sided_triangles() {
        let source = MeshArrays {
            positions: vec![
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(1.0, 2.0, 0.0),
                Point3::new(0.0, 3.0, 0.0),
            ],
            normals: vec![Vector3::z(); 3],
            uvs: vec![Point2::origin(); 3],
            groups: vec![vec![0, 1, 2]],
        };
        let plane = Plane::from_normal(Vector3::y(), 0.5);
        let mut buffer = GeneratedMesh::new();
        slice_without_separating(&plane, &source, &mut buffer);
        assert!(buffer.is_empty());
    }
}
