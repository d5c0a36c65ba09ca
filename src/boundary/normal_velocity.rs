//! Face-normal velocity imposition.
//!
//! A normal component (u on west/east, v on south/north) is nodal across
//! its face: the outermost valid point lies on the domain edge. Walls zero
//! that point, Dirichlet-like kinds overwrite it, and Flather and Orlanski
//! compute it and hold it into the ghosts.

use super::launch::{FaceContext, GhostWrite};
use super::{BcType, BdyVar, FlatherRadiation};

/// Ghost and boundary values of one normal-velocity component on one face.
pub(crate) fn fill(ctx: &FaceContext<'_>) -> Vec<GhostWrite> {
    match ctx.kind {
        BcType::OrlanskiRad | BcType::OrlanskiRadNudge => {
            let rad = ctx.orlanski();
            ctx.run(|t, k, out| ctx.radiate(&rad, t, k, out))
        }
        BcType::Flather => fill_flather(ctx),
        _ => ctx.run(|t, k, out| {
            if !ctx.fill_standard(t, k, out) {
                // Chapman applies to elevation only; the table never stores it here
                let edge = ctx.current(ctx.point(ctx.geom.boundary(), t, k));
                ctx.hold(out, t, k, 1, edge);
            }
        }),
    }
}

/// Flather condition for depth-averaged normal velocity.
fn fill_flather(ctx: &FaceContext<'_>) -> Vec<GhostWrite> {
    // Presence checked before launch
    let Some(baro) = ctx.barotropic else {
        return Vec::new();
    };
    let flather = FlatherRadiation::from_params(ctx.params);
    let face = ctx.geom.face();

    ctx.run(|t, k, out| {
        let b = ctx.geom.boundary();
        let at_b = ctx.point(b, t, k);
        let cell = ctx.point(ctx.geom.adjacent_cell(), t, 0);

        let zeta = baro.zeta.get_clamped(cell, 0);
        let depth = baro.depth.get_clamped(cell, 0) + zeta;
        let u_ref = ctx.reference(at_b);
        let zeta_ref = ctx.reference_of(Some(BdyVar::Zeta), cell);

        let u_b = flather.boundary_velocity(face, u_ref, zeta, zeta_ref, depth);
        ctx.write(out, at_b, u_b);
        ctx.hold(out, t, k, 1, u_b);
    })
}
