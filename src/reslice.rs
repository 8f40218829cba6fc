//! Non-separating re-slice pass: inject extra horizontal edge loops into one
//! cut piece so a later deformation stage has enough vertex density to bend
//! smoothly.

use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::mesh::{GeneratedMesh, MeshArrays};
use crate::plane::Plane;
use crate::splitter::slice_without_separating;

/// Height increment between injected edge loops.
pub const DEFAULT_STEP: Real = 0.05;

/// Scan `source`'s vertical extent and, at each `step` increment strictly
/// between the lowest and highest point, split `source`'s straddling
/// triangles with a horizontal plane, appending every piece into `buffer`.
///
/// Purely additive: no caps are generated and no boundary is recorded. The
/// pass is skipped entirely when `buffer` holds no triangles (there is no
/// piece to densify) or when `step` is not a positive height. A `source`
/// violating the call contract is rejected up front, as in [`cut`](crate::cut).
pub fn re_slice(
    buffer: &mut GeneratedMesh,
    source: &MeshArrays,
    step: Real,
) -> Result<(), GeometryError> {
    source.validate()?;
    if buffer.is_empty() || step <= 0.0 {
        return Ok(());
    }
    let Some((low, high)) = source.vertical_extent() else {
        return Ok(());
    };

    let mut height = low + step;
    while height < high {
        slice_without_separating(&Plane::horizontal(height), source, buffer);
        height += step;
    }
    Ok(())
}
