//! A computational-geometry kernel that cuts triangle meshes by arbitrary
//! planes into two **watertight** pieces, capping the exposed cross-section
//! with freshly triangulated geometry so both halves stay closed surfaces.
//!
//! The crate is the synchronous core beneath a real-time "slicing" effect:
//! one call to [`cut`](cut::cut) classifies, splits, and re-triangulates a
//! whole mesh, and [`re_slice`](reslice::re_slice) injects extra edge loops
//! into one piece for later deformation.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, conflicts with f64
//! - **parallel**: use rayon to cut independent meshes concurrently via
//!   [`cut_all`](cut::cut_all)

#![forbid(unsafe_code)]
#![warn(clippy::approx_constant, clippy::all)]

pub mod boundary;
pub mod cap;
pub mod cut;
pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod plane;
pub mod reslice;
pub mod shapes;
pub mod splitter;
pub mod triangle;
pub mod vertex;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use cut::{CutOutcome, cut};
pub use errors::GeometryError;
pub use mesh::{GeneratedMesh, MeshArrays};
pub use plane::{HalfSpace, Plane};
pub use triangle::MeshTriangle;
pub use vertex::Vertex;
