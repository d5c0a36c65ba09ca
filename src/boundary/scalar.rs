//! Conserved-scalar imposition (tracers, free surface, tke).
//!
//! Scalars are cell-centered across every face, so the first ghost lies
//! half a cell outside the domain edge. Radiation kinds compute that
//! ghost and hold it outward.

use super::launch::{FaceContext, GhostWrite};
use super::{BcType, ChapmanRadiation};
use crate::types::IntVect;

/// Ghost values of one scalar component on one face.
pub(crate) fn fill(ctx: &FaceContext<'_>) -> Vec<GhostWrite> {
    match ctx.kind {
        BcType::OrlanskiRad | BcType::OrlanskiRadNudge => {
            let rad = ctx.orlanski();
            ctx.run(|t, k, out| ctx.radiate(&rad, t, k, out))
        }
        BcType::Chapman => fill_chapman(ctx),
        _ => ctx.run(|t, k, out| {
            if !ctx.fill_standard(t, k, out) {
                // Flather has no scalar meaning; the table never stores it here
                let edge = ctx.interior_value(t, k, 0);
                ctx.hold(out, t, k, 1, edge);
            }
        }),
    }
}

/// Chapman radiation of free-surface elevation.
fn fill_chapman(ctx: &FaceContext<'_>) -> Vec<GhostWrite> {
    // Presence checked before launch
    let Some(baro) = ctx.barotropic else {
        return Vec::new();
    };
    let chapman = ChapmanRadiation::from_params(ctx.params);

    ctx.run(|t, k, out| {
        let ghost = ctx.point(ctx.geom.ghost(1), t, k);
        let cell = ctx.point(ctx.geom.boundary(), t, k);
        let depth = baro.depth.get_clamped(IntVect::new(cell.i, cell.j, 0), 0) + ctx.previous(cell);
        let value = chapman.boundary_value(
            ctx.previous(ghost),
            ctx.current(cell),
            baro.dt,
            ctx.dx_inv,
            depth,
        );
        ctx.hold(out, t, k, 1, value);
    })
}
