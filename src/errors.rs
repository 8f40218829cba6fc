//! Contract-violation errors reported at the kernel boundary.
//!
//! Geometric degeneracy inside a cut (zero-area slivers, an unreconstructable
//! boundary, a stalled cap pass) is handled by well-defined omission and never
//! surfaces here; these errors only describe input that violates the call
//! contract.

use thiserror::Error;

/// Everything that can be wrong with the caller-supplied geometry arrays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The parallel attribute arrays disagree in length.
    #[error(
        "attribute arrays disagree in length: {positions} positions, {normals} normals, {uvs} uvs"
    )]
    AttributeLengthMismatch {
        positions: usize,
        normals: usize,
        uvs: usize,
    },

    /// A surface group's index list is not a whole number of triangles.
    #[error("surface group {group} holds {count} indices, which is not a multiple of 3")]
    RaggedIndexList { group: usize, count: usize },

    /// A triangle index points past the end of the vertex arrays.
    #[error("index {index} in surface group {group} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        group: usize,
        index: u32,
        vertex_count: usize,
    },
}
