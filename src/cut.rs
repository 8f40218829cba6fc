//! The top-level cut operation: separate, reconstruct, cap.

use crate::boundary::reconstruct_boundary;
use crate::cap::fill_caps;
use crate::errors::GeometryError;
use crate::mesh::{GeneratedMesh, MeshArrays};
use crate::plane::{HalfSpace, Plane};
use crate::splitter::separate_meshes;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// What a cut did to the mesh.
#[derive(Debug, Clone)]
pub enum CutOutcome {
    /// The plane passed through the mesh; both pieces carry their share of
    /// the input triangles plus a closing cap under a fresh surface group
    /// (one past the last input group).
    Split {
        /// The piece on the plane's positive-normal side.
        front: GeneratedMesh,
        /// The piece on the plane's negative-normal side.
        back: GeneratedMesh,
    },
    /// Trivial cut: the plane intersected no triangle and separated no
    /// vertices, so the whole mesh sits unchanged in one piece. "Nothing to
    /// do", not an error.
    Untouched {
        /// The single populated (possibly empty, for empty input) piece.
        piece: GeneratedMesh,
        /// Which half-space the mesh occupies.
        side: HalfSpace,
    },
}

/// Cut `source` by `plane` into two watertight pieces.
///
/// Every input triangle lands whole in one piece, is split across both, or
/// is dropped as a zero-area degenerate; the exposed cross-section is then
/// capped on both pieces. Input that violates the call contract (mismatched
/// array lengths, out-of-bounds indices) is rejected up front.
pub fn cut(plane: &Plane, source: &MeshArrays) -> Result<CutOutcome, GeometryError> {
    source.validate()?;

    let mut front = GeneratedMesh::new();
    let mut back = GeneratedMesh::new();
    let mut edges = Vec::new();
    separate_meshes(plane, source, &mut front, &mut back, &mut edges);

    if edges.is_empty() && (front.is_empty() || back.is_empty()) {
        let (piece, side) = if back.is_empty() {
            (front, HalfSpace::Front)
        } else {
            (back, HalfSpace::Back)
        };
        return Ok(CutOutcome::Untouched { piece, side });
    }

    let boundary = reconstruct_boundary(edges);
    fill_caps(&boundary, plane, &mut front, &mut back, source.group_count());

    Ok(CutOutcome::Split { front, back })
}

/// Cut many independent meshes, one kernel invocation each.
///
/// Each invocation reads only its own input and writes only its own private
/// buffers, so jobs are embarrassingly parallel.
#[cfg(not(feature = "parallel"))]
pub fn cut_all(jobs: &[(Plane, MeshArrays)]) -> Vec<Result<CutOutcome, GeometryError>> {
    jobs.iter().map(|(plane, source)| cut(plane, source)).collect()
}

/// Cut many independent meshes, one kernel invocation each, across rayon
/// workers.
#[cfg(feature = "parallel")]
pub fn cut_all(jobs: &[(Plane, MeshArrays)]) -> Vec<Result<CutOutcome, GeometryError>> {
    jobs.par_iter()
        .map(|(plane, source)| cut(plane, source))
        .collect()
}
