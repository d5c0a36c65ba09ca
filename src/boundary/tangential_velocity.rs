//! Face-tangential velocity imposition.
//!
//! Tangential components (u on south/north, v on west/east, w everywhere)
//! are cell-centered across the face, so a no-slip wall is an odd
//! reflection: the ghost is the negated mirror and the value interpolated
//! to the wall is zero. Radiation is never applied to tangential
//! components.

use super::launch::{FaceContext, GhostWrite};

/// Ghost values of one tangential-velocity component on one face.
pub(crate) fn fill(ctx: &FaceContext<'_>) -> Vec<GhostWrite> {
    ctx.run(|t, k, out| {
        if !ctx.fill_standard(t, k, out) {
            // Open kinds are translated to extrapolation for tangential rows
            let edge = ctx.interior_value(t, k, 0);
            ctx.hold(out, t, k, 1, edge);
        }
    })
}
