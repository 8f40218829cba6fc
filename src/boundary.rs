//! Collapsing the unordered cut-edge soup into one ordered cross-section
//! polygon.
//!
//! Each straddling triangle contributed one [`CutEdge`] lying exactly on the
//! cut plane. For a closed mesh those edges chain into a single loop, but the
//! splitter emits them in triangle-iteration order, so the loop has to be
//! recovered by walking shared endpoints.

use crate::float_types::{EPSILON, Real};
use log::warn;
use nalgebra::Point3;

/// One edge of the cross-section outline, produced while splitting a
/// straddling triangle. Scoped to a single cut call.
#[derive(Debug, Clone, PartialEq)]
pub struct CutEdge {
    pub a: Point3<Real>,
    pub b: Point3<Real>,
}

impl CutEdge {
    pub const fn new(a: Point3<Real>, b: Point3<Real>) -> Self {
        CutEdge { a, b }
    }

    fn endpoint(&self, slot: usize) -> &Point3<Real> {
        if slot == 0 { &self.a } else { &self.b }
    }
}

#[inline]
fn coincide(a: &Point3<Real>, b: &Point3<Real>) -> bool {
    (a - b).norm_squared() < EPSILON * EPSILON
}

/// Order the cut edges into one cyclic polygon outline.
///
/// Starting from the first endpoint that recurs on another edge, the walk
/// repeatedly steps to the current edge's other endpoint, removes the edge,
/// and continues along whichever remaining edge shares the point just
/// emitted — matched exactly first, then by nearest endpoint to absorb
/// float noise between independently interpolated but geometrically
/// identical cut points.
///
/// Assumes the cross-section is a single simple loop. Inputs that violate
/// that (multiple disjoint loops, dangling edges) are not detected; the walk
/// consumes what it can and the result may not close the true outline.
pub fn reconstruct_boundary(mut edges: Vec<CutEdge>) -> Vec<Point3<Real>> {
    let Some((mut idx, start_slot)) = first_duplicate_endpoint(&edges) else {
        if !edges.is_empty() {
            warn!(
                "cut produced {} boundary edges but no shared endpoint; dropping the cross-section outline",
                edges.len()
            );
        }
        return Vec::new();
    };
    // Walk begins at the partner of the duplicated endpoint.
    let mut slot = 1 - start_slot;

    let mut polygon = Vec::with_capacity(edges.len());
    loop {
        let edge = edges.remove(idx);
        let point = *edge.endpoint(slot);
        polygon.push(point);
        if edges.is_empty() {
            break;
        }
        match continuation(&edges, &point) {
            Some((next_idx, shared_slot)) => {
                idx = next_idx;
                slot = 1 - shared_slot;
            },
            None => {
                warn!(
                    "boundary walk stalled with {} edges left; cross-section outline is incomplete",
                    edges.len()
                );
                break;
            },
        }
    }
    polygon
}

/// First endpoint that also occurs on another edge, as (edge index, slot).
fn first_duplicate_endpoint(edges: &[CutEdge]) -> Option<(usize, usize)> {
    for (i, edge) in edges.iter().enumerate() {
        for slot in 0..2 {
            let p = edge.endpoint(slot);
            let elsewhere = edges.iter().enumerate().any(|(j, other)| {
                j != i && (coincide(&other.a, p) || coincide(&other.b, p))
            });
            if elsewhere {
                return Some((i, slot));
            }
        }
    }
    None
}

/// Find the remaining edge continuing from `point`: an exact endpoint match
/// when one exists, otherwise the nearest endpoint overall.
fn continuation(edges: &[CutEdge], point: &Point3<Real>) -> Option<(usize, usize)> {
    let mut nearest: Option<(usize, usize)> = None;
    let mut nearest_dist = Real::MAX;
    for (i, edge) in edges.iter().enumerate() {
        for slot in 0..2 {
            let candidate = edge.endpoint(slot);
            if coincide(candidate, point) {
                return Some((i, slot));
            }
            let dist = (candidate - point).norm_squared();
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = Some((i, slot));
            }
        }
    }
    nearest
}
