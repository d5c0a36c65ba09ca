//! Physical-boundary ghost filling.
//!
//! [`BoundaryFiller`] fills the ghost cells of a field on every physical
//! face of the domain: faces that are not periodic and that the field's
//! valid box actually reaches. Interior block edges and periodic faces
//! are left to the halo exchange.
//!
//! # Fill order
//!
//! 1. Every precondition is checked; nothing is written on error.
//! 2. Points lying exactly on the domain edge (normal velocity on its
//!    own face) are computed from the unmodified field and stored.
//! 3. Ghost values of all faces are computed from that field and stored.
//! 4. Corner ghosts, outside the valid box in both horizontal directions
//!    with both faces physical, hold the valid corner value.
//!
//! Within steps 2 and 3 no face reads what another face writes, so the
//! result does not depend on face order and a repeated call rewrites the
//! same values.

use std::sync::Arc;

use tracing::{debug, trace};

use super::launch::{FaceContext, GhostWrite, GradientMask};
use super::{
    normal_velocity, scalar, tangential_velocity, BcTable, BcType, BcVar, BdyVar,
    BoundaryReference, FaceGeometry, OpenBoundaryParams, VarRole,
};
use crate::error::{BcError, ConfigError};
use crate::mesh::{Domain, Field, LandMask};
use crate::types::{ComponentIndex, Direction, Face, IndexBox, IntVect, LevelIndex, Staggering};

/// Depth and free surface needed by Chapman and Flather.
#[derive(Clone, Copy, Debug)]
pub struct Barotropic<'a> {
    /// Bottom depth `h` at rho points (positive down)
    pub depth: &'a Field,
    /// Current free-surface elevation at rho points
    pub zeta: &'a Field,
    /// Barotropic time step
    pub dt: f64,
}

impl<'a> Barotropic<'a> {
    /// Bundle depth, free surface and time step.
    pub fn new(depth: &'a Field, zeta: &'a Field, dt: f64) -> Self {
        Self { depth, zeta, dt }
    }
}

/// Inputs of one ghost fill.
///
/// # Example
///
/// ```
/// use ocean_bc::boundary::{BcVar, ConstantReference, BdyVar, FillRequest};
/// use ocean_bc::mesh::LandMask;
/// use ocean_bc::types::{IndexBox, Staggering};
///
/// let cells = IndexBox::from_size(16, 8, 4);
/// let mask = LandMask::all_wet(&cells, 2, Staggering::Rho);
/// let reference = ConstantReference::new().with(BdyVar::Temp, 10.0);
///
/// let request = FillRequest::new(BcVar::Temp, &mask)
///     .comps(0, 2)
///     .nghost(2)
///     .time(3600.0)
///     .reference(&reference);
/// assert_eq!(request.filled_comps(), 0..2);
/// ```
#[derive(Clone, Copy)]
pub struct FillRequest<'a> {
    bccomp: BcVar,
    mask: &'a LandMask,
    icomp: ComponentIndex,
    ncomp: usize,
    nghost: usize,
    time: f64,
    not_to_fill: usize,
    previous: Option<&'a Field>,
    reference: Option<&'a dyn BoundaryReference>,
    umask: Option<&'a LandMask>,
    vmask: Option<&'a LandMask>,
    barotropic: Option<Barotropic<'a>>,
}

impl<'a> FillRequest<'a> {
    /// Fill one component with table row `bccomp`, one ghost layer, at
    /// time zero.
    pub fn new(bccomp: BcVar, mask: &'a LandMask) -> Self {
        Self {
            bccomp,
            mask,
            icomp: ComponentIndex::ZERO,
            ncomp: 1,
            nghost: 1,
            time: 0.0,
            not_to_fill: 0,
            previous: None,
            reference: None,
            umask: None,
            vmask: None,
            barotropic: None,
        }
    }

    /// Component range `icomp..icomp + ncomp`; table rows advance with it.
    pub fn comps(mut self, icomp: usize, ncomp: usize) -> Self {
        self.icomp = ComponentIndex::new(icomp);
        self.ncomp = ncomp;
        self
    }

    /// Ghost width to fill.
    pub fn nghost(mut self, nghost: usize) -> Self {
        self.nghost = nghost;
        self
    }

    /// Model time, passed to the reference provider.
    pub fn time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Leave the last `count` components of the range untouched.
    pub fn not_to_fill(mut self, count: usize) -> Self {
        self.not_to_fill = count;
        self
    }

    /// Same variable at the previous time level, ghosts included.
    pub fn previous(mut self, previous: &'a Field) -> Self {
        self.previous = Some(previous);
        self
    }

    /// External reference data.
    pub fn reference(mut self, reference: &'a dyn BoundaryReference) -> Self {
        self.reference = Some(reference);
        self
    }

    /// u-point mask.
    pub fn umask(mut self, umask: &'a LandMask) -> Self {
        self.umask = Some(umask);
        self
    }

    /// v-point mask.
    pub fn vmask(mut self, vmask: &'a LandMask) -> Self {
        self.vmask = Some(vmask);
        self
    }

    /// Depth, free surface and time step.
    pub fn barotropic(mut self, barotropic: Barotropic<'a>) -> Self {
        self.barotropic = Some(barotropic);
        self
    }

    /// Table row of the first component.
    #[inline]
    pub fn bccomp(&self) -> BcVar {
        self.bccomp
    }

    /// Requested ghost width.
    #[inline]
    pub fn ghost_width(&self) -> usize {
        self.nghost
    }

    /// First component of the requested range.
    #[inline]
    pub fn first_comp(&self) -> ComponentIndex {
        self.icomp
    }

    /// End of the requested range, not-to-fill components included.
    #[inline]
    fn end(&self) -> usize {
        self.icomp.get() + self.ncomp
    }

    /// Field components that will be written.
    pub fn filled_comps(&self) -> std::ops::Range<usize> {
        let start = self.icomp.get();
        start..start + self.ncomp.saturating_sub(self.not_to_fill)
    }

    /// Table row of field component `n`.
    fn row(&self, n: usize) -> usize {
        self.bccomp.index() + (n - self.icomp.get())
    }
}

/// A ghost filler for physical boundaries.
pub trait PhysBcFill: Send + Sync {
    /// Fill the physical-boundary ghosts of `field`.
    fn fill(&self, field: &mut Field, request: &FillRequest<'_>) -> Result<(), BcError>;

    /// Name for logging.
    fn name(&self) -> &'static str;
}

/// Filler for variables without physical boundary conditions.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullFill;

impl PhysBcFill for NullFill {
    fn fill(&self, _field: &mut Field, _request: &FillRequest<'_>) -> Result<(), BcError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Physical-boundary filler of one refinement level.
///
/// Shares its table across levels and threads; holds no mutable state.
#[derive(Clone, Debug)]
pub struct BoundaryFiller {
    level: LevelIndex,
    domain: Domain,
    table: Arc<BcTable>,
    params: OpenBoundaryParams,
}

impl BoundaryFiller {
    /// Create a filler.
    ///
    /// Fails if the parameters are out of range or the table's periodic
    /// faces disagree with the domain's periodicity.
    pub fn new(
        level: LevelIndex,
        domain: Domain,
        table: Arc<BcTable>,
        params: OpenBoundaryParams,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        for (dir, name) in [(Direction::X, "x"), (Direction::Y, "y")] {
            if domain.is_periodic(dir) != table.is_periodic(dir) {
                return Err(ConfigError::PeriodicityMismatch { direction: name });
            }
        }
        Ok(Self {
            level,
            domain,
            table,
            params,
        })
    }

    /// Level this filler belongs to.
    #[inline]
    pub fn level(&self) -> LevelIndex {
        self.level
    }

    /// Problem domain.
    #[inline]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Boundary-condition table.
    #[inline]
    pub fn table(&self) -> &BcTable {
        &self.table
    }

    /// Open-boundary parameters.
    #[inline]
    pub fn params(&self) -> &OpenBoundaryParams {
        &self.params
    }

    /// Faces of the domain that `field` owns ghosts on.
    pub fn physical_faces(&self, field: &Field) -> Vec<Face> {
        let valid = field.valid_box();
        Face::ALL
            .into_iter()
            .filter(|&face| {
                self.domain.is_physical_face(face)
                    && self.domain.touches(&valid, field.staggering(), face)
            })
            .collect()
    }

    /// Fill the physical-boundary ghosts of `field`.
    ///
    /// Interior values must be valid, and ghosts on periodic faces and on
    /// interior block edges must already hold exchanged values: they are
    /// read by the stencils along each face.
    ///
    /// # Errors
    ///
    /// Returns a [`BcError`] before writing anything if the request is
    /// inconsistent with the field, the table or the supplied inputs.
    pub fn apply(&self, field: &mut Field, request: &FillRequest<'_>) -> Result<(), BcError> {
        let faces = self.physical_faces(field);
        self.check(field, request, &faces)?;

        debug!(
            level = %self.level,
            var = %request.bccomp,
            comps = ?request.filled_comps(),
            nghost = request.nghost,
            faces = ?faces,
            "filling physical boundaries"
        );
        if faces.is_empty() {
            return Ok(());
        }

        let edge = self.compute(field, request, &faces, true);
        store(field, edge);

        let ghosts = self.compute(field, request, &faces, false);
        store(field, ghosts);

        let corners = self.corners(field, request, &faces);
        store(field, corners);
        Ok(())
    }

    /// Check every precondition of a request.
    fn check(&self, field: &Field, req: &FillRequest<'_>, faces: &[Face]) -> Result<(), BcError> {
        let ngrow = field.ngrow();
        let allocated = ngrow[0].min(ngrow[1]);
        if req.nghost > allocated {
            return Err(BcError::GhostWidthExceeded {
                requested: req.nghost,
                allocated,
            });
        }

        if req.end() > field.ncomp() {
            return Err(BcError::ComponentOutOfRange {
                start: req.icomp.get(),
                end: req.end(),
                ncomp: field.ncomp(),
            });
        }

        let filled = req.filled_comps();
        if filled.is_empty() {
            return Ok(());
        }
        let last_row = req.row(filled.end - 1);
        if last_row >= self.table.len() {
            return Err(BcError::MissingTableEntry {
                row: last_row,
                len: self.table.len(),
            });
        }

        let region = field.valid_box().grow_horizontal(req.nghost);
        check_mask("field", req.mask, mask_staggering(field.staggering()), &region, req.nghost)?;

        for n in filled {
            let var = row_var(req.row(n), self.table.len())?;
            if var.staggering() != field.staggering() {
                return Err(BcError::FieldStaggering {
                    var,
                    expected: var.staggering(),
                    actual: field.staggering(),
                });
            }
            for &face in faces {
                self.check_inputs(field, req, var, face, &region)?;
            }
        }

        self.check_interior(field, req, faces)?;
        Ok(())
    }

    /// Check the inputs one (variable, face) pair needs.
    fn check_inputs(
        &self,
        field: &Field,
        req: &FillRequest<'_>,
        var: BcVar,
        face: Face,
        region: &IndexBox,
    ) -> Result<(), BcError> {
        let kind = self.table.kind(var, face);

        if kind.needs_previous() {
            let prev = req
                .previous
                .ok_or_else(|| BcError::missing(var, face, kind, "previous state"))?;
            if prev.staggering() != field.staggering()
                || !prev.grown_box().contains_box(region)
                || prev.ncomp() < req.end()
            {
                return Err(BcError::PreviousShape(format!(
                    "{} x {} ({}) does not cover {} x {} ({})",
                    prev.grown_box(),
                    prev.ncomp(),
                    prev.staggering(),
                    region,
                    req.end(),
                    field.staggering()
                )));
            }
        }

        if kind.needs_reference() {
            let reference = req
                .reference
                .ok_or_else(|| BcError::missing(var, face, kind, "reference data"))?;
            let provided = var.bdy_var().is_some_and(|b| reference.provides(b));
            if !provided {
                return Err(BcError::missing(var, face, kind, "reference data"));
            }
            if kind == BcType::Flather && !reference.provides(BdyVar::Zeta) {
                return Err(BcError::missing(var, face, kind, "zeta reference data"));
            }
        }

        if kind.needs_barotropic() && req.barotropic.is_none() {
            return Err(BcError::missing(var, face, kind, "barotropic context"));
        }

        if kind.is_orlanski() && var.role(face) == VarRole::Scalar {
            let (mask, role, stag) = cross_mask(req, face);
            let mask = mask.ok_or_else(|| BcError::missing(var, face, kind, role))?;
            check_mask(role, mask, stag, region, req.nghost)?;
        }
        Ok(())
    }

    /// Reject non-finite values on the boundary row and the first interior
    /// row of every physical face.
    fn check_interior(&self, field: &Field, req: &FillRequest<'_>, faces: &[Face]) -> Result<(), BcError> {
        let valid = field.valid_box();
        for n in req.filled_comps() {
            let var = row_var(req.row(n), self.table.len())?;
            for &face in faces {
                let geom = FaceGeometry::new(&self.domain, field.staggering(), face);
                let axis = geom.axis();
                let t_axis = 1 - axis;
                let a = valid.clamp_axis(axis, geom.interior(0));
                for row in [geom.boundary(), a] {
                    for k in valid.lo.k..=valid.hi.k {
                        for t in valid.lo[t_axis]..=valid.hi[t_axis] {
                            let p = geom.at(IntVect::new(0, 0, k).with_axis(t_axis, t), row);
                            if !field.get(p, n).is_finite() {
                                return Err(BcError::NonFiniteInterior { var, face });
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Writes of every (component, face) pair.
    ///
    /// With `edge` set only points inside the valid box are kept (the
    /// domain-edge points of normal components); otherwise only ghosts.
    fn compute(
        &self,
        field: &Field,
        req: &FillRequest<'_>,
        faces: &[Face],
        edge: bool,
    ) -> Vec<(usize, GhostWrite)> {
        let valid = field.valid_box();
        let mut writes = Vec::new();

        for n in req.filled_comps() {
            let Some(var) = BcVar::from_index(req.row(n)) else {
                continue;
            };
            for &face in faces {
                let kind = self.table.kind(var, face);
                if kind == BcType::IntDir {
                    continue;
                }
                let geom = FaceGeometry::new(&self.domain, field.staggering(), face);
                if edge && geom.boundary_point().is_none() {
                    continue;
                }

                let ctx = self.face_context(field, req, var, kind, n, geom, faces);
                let face_writes = match var.role(face) {
                    VarRole::Scalar => scalar::fill(&ctx),
                    VarRole::NormalVelocity => normal_velocity::fill(&ctx),
                    VarRole::TangentialVelocity => tangential_velocity::fill(&ctx),
                };
                trace!(%face, %var, %kind, comp = n, writes = face_writes.len(), "face computed");

                writes.extend(
                    face_writes
                        .into_iter()
                        .filter(|w| valid.contains(w.point) == edge)
                        .map(|w| (n, w)),
                );
            }
        }
        writes
    }

    #[allow(clippy::too_many_arguments)]
    fn face_context<'r>(
        &'r self,
        field: &'r Field,
        req: &'r FillRequest<'_>,
        var: BcVar,
        kind: BcType,
        comp: usize,
        geom: FaceGeometry,
        faces: &[Face],
    ) -> FaceContext<'r> {
        let valid = field.valid_box();
        let face = geom.face();
        let t_axis = 1 - geom.axis();
        let nghost = req.nghost as i32;

        // Extend along the face into ghosts that are not ours to fill
        let (lo_face, hi_face) = if t_axis == 0 {
            (Face::West, Face::East)
        } else {
            (Face::South, Face::North)
        };
        let lo_ext = if faces.contains(&lo_face) { 0 } else { nghost };
        let hi_ext = if faces.contains(&hi_face) { 0 } else { nghost };

        let gradient_mask = match (kind.is_orlanski(), var.role(face)) {
            (true, VarRole::Scalar) => match cross_mask(req, face).0 {
                Some(mask) => GradientMask::Cross(mask),
                None => GradientMask::Own,
            },
            _ => GradientMask::Own,
        };

        FaceContext {
            geom,
            var,
            kind,
            comp,
            nghost: req.nghost,
            tangential: (valid.lo[t_axis] - lo_ext)..=(valid.hi[t_axis] + hi_ext),
            levels: valid.lo.k..=valid.hi.k,
            field,
            mask: req.mask,
            previous: req.previous,
            reference: req.reference,
            gradient_mask,
            barotropic: req.barotropic.as_ref(),
            time: req.time,
            ext_dir: self.table.ext_dir_value(var, face),
            dx_inv: self.domain.dx_inv(face.normal_direction()),
            params: &self.params,
        }
    }

    /// Corner ghosts, holding the valid corner value.
    fn corners(&self, field: &Field, req: &FillRequest<'_>, faces: &[Face]) -> Vec<(usize, GhostWrite)> {
        let stag = field.staggering();
        let valid = field.valid_box();
        let mut writes = Vec::new();

        for x_face in [Face::West, Face::East] {
            for y_face in [Face::South, Face::North] {
                if !faces.contains(&x_face) || !faces.contains(&y_face) {
                    continue;
                }
                let gx = FaceGeometry::new(&self.domain, stag, x_face);
                let gy = FaceGeometry::new(&self.domain, stag, y_face);
                for n in req.filled_comps() {
                    for k in valid.lo.k..=valid.hi.k {
                        let value = field.get(IntVect::new(gx.boundary(), gy.boundary(), k), n);
                        for mx in 1..=req.nghost {
                            for my in 1..=req.nghost {
                                let point = IntVect::new(gx.ghost(mx), gy.ghost(my), k);
                                let value = if req.mask.value_clamped(point.i, point.j) > 0.5 {
                                    value
                                } else {
                                    self.params.land_value
                                };
                                writes.push((n, GhostWrite { point, value }));
                            }
                        }
                    }
                }
            }
        }
        writes
    }
}

impl PhysBcFill for BoundaryFiller {
    fn fill(&self, field: &mut Field, request: &FillRequest<'_>) -> Result<(), BcError> {
        self.apply(field, request)
    }

    fn name(&self) -> &'static str {
        "physical"
    }
}

fn store(field: &mut Field, writes: Vec<(usize, GhostWrite)>) {
    for (n, w) in writes {
        field.set(w.point, n, w.value);
    }
}

fn row_var(row: usize, len: usize) -> Result<BcVar, BcError> {
    BcVar::from_index(row).ok_or(BcError::MissingTableEntry { row, len })
}

/// Mask staggering for a field staggering; vertical velocity uses the rho
/// mask.
fn mask_staggering(stag: Staggering) -> Staggering {
    match stag {
        Staggering::W => Staggering::Rho,
        s => s,
    }
}

/// Mask weighting tangential differences of scalars on a face.
fn cross_mask<'a>(req: &FillRequest<'a>, face: Face) -> (Option<&'a LandMask>, &'static str, Staggering) {
    match face.normal_direction() {
        Direction::X => (req.vmask, "v-mask", Staggering::V),
        Direction::Y => (req.umask, "u-mask", Staggering::U),
    }
}

fn check_mask(
    role: &'static str,
    mask: &LandMask,
    expected: Staggering,
    region: &IndexBox,
    nghost: usize,
) -> Result<(), BcError> {
    if mask.staggering() != expected {
        return Err(BcError::MaskStaggering {
            role,
            expected,
            actual: mask.staggering(),
        });
    }
    if !mask.covers(region) {
        return Err(BcError::MaskCoverage { role, nghost });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{ConstantReference, PhysicalBc};
    use crate::types::SideBoundaries;

    fn setup(faces: SideBoundaries<PhysicalBc>) -> (BoundaryFiller, IndexBox) {
        let cells = IndexBox::from_size(6, 5, 2);
        let mut domain = Domain::new(cells, [100.0, 100.0]).unwrap();
        if *faces.face(Face::West) == PhysicalBc::Periodic {
            domain = domain.with_periodic_x(true);
        }
        if *faces.face(Face::South) == PhysicalBc::Periodic {
            domain = domain.with_periodic_y(true);
        }
        let table = Arc::new(BcTable::from_physical(&faces).unwrap());
        let filler =
            BoundaryFiller::new(LevelIndex::ZERO, domain, table, OpenBoundaryParams::default())
                .unwrap();
        (filler, cells)
    }

    fn temp(cells: &IndexBox) -> Field {
        Field::from_fn(cells, [2, 2, 0], 1, Staggering::Rho, |p, _| {
            10.0 + p.i as f64 + 0.1 * p.j as f64
        })
    }

    #[test]
    fn test_periodicity_mismatch() {
        let cells = IndexBox::from_size(4, 4, 1);
        let domain = Domain::new(cells, [1.0, 1.0]).unwrap().with_periodic_x(true);
        let table = Arc::new(BcTable::from_physical(&SideBoundaries::uniform(PhysicalBc::Outflow)).unwrap());
        let err = BoundaryFiller::new(LevelIndex::ZERO, domain, table, OpenBoundaryParams::default());
        assert!(matches!(
            err,
            Err(ConfigError::PeriodicityMismatch { direction: "x" })
        ));
    }

    #[test]
    fn test_outflow_holds_edge_value() {
        let (filler, cells) = setup(SideBoundaries::uniform(PhysicalBc::Outflow));
        let mut t = temp(&cells);
        let mask = LandMask::all_wet(&cells, 2, Staggering::Rho);
        let req = FillRequest::new(BcVar::Temp, &mask).nghost(2);
        filler.apply(&mut t, &req).unwrap();

        assert_eq!(t.get(IntVect::new(-1, 2, 0), 0), t.get(IntVect::new(0, 2, 0), 0));
        assert_eq!(t.get(IntVect::new(-2, 2, 1), 0), t.get(IntVect::new(0, 2, 1), 0));
        assert_eq!(t.get(IntVect::new(7, 3, 0), 0), t.get(IntVect::new(5, 3, 0), 0));
        assert_eq!(t.get(IntVect::new(3, 6, 0), 0), t.get(IntVect::new(3, 4, 0), 0));
        // Corner holds the valid corner cell
        assert_eq!(t.get(IntVect::new(-2, -2, 0), 0), t.get(IntVect::new(0, 0, 0), 0));
        assert_eq!(t.get(IntVect::new(7, 6, 0), 0), t.get(IntVect::new(5, 4, 0), 0));
    }

    #[test]
    fn test_periodic_faces_untouched() {
        let faces = SideBoundaries::new(
            PhysicalBc::NoSlipWall,
            PhysicalBc::Periodic,
            PhysicalBc::NoSlipWall,
            PhysicalBc::Periodic,
        );
        let (filler, cells) = setup(faces);
        let mut t = temp(&cells);
        t.set_ghost_val(-99.0);
        let mask = LandMask::all_wet(&cells, 2, Staggering::Rho);
        filler
            .apply(&mut t, &FillRequest::new(BcVar::Temp, &mask).nghost(2))
            .unwrap();

        assert_eq!(t.get(IntVect::new(-1, 2, 0), 0), -99.0);
        // South wall is filled along the full width, x ghosts included
        assert_eq!(t.get(IntVect::new(-1, -1, 0), 0), -99.0);
        assert_eq!(t.get(IntVect::new(2, -1, 0), 0), t.get(IntVect::new(2, 0, 0), 0));
    }

    #[test]
    fn test_ghost_width_exceeded() {
        let (filler, cells) = setup(SideBoundaries::uniform(PhysicalBc::Outflow));
        let mut t = temp(&cells);
        let mask = LandMask::all_wet(&cells, 3, Staggering::Rho);
        let err = filler
            .apply(&mut t, &FillRequest::new(BcVar::Temp, &mask).nghost(3))
            .unwrap_err();
        assert_eq!(
            err,
            BcError::GhostWidthExceeded {
                requested: 3,
                allocated: 2
            }
        );
    }

    #[test]
    fn test_missing_reference_is_reported_before_writing() {
        let (filler, cells) = setup(SideBoundaries::uniform(PhysicalBc::Clamped));
        let mut t = temp(&cells);
        let before = t.clone();
        let mask = LandMask::all_wet(&cells, 2, Staggering::Rho);
        let err = filler
            .apply(&mut t, &FillRequest::new(BcVar::Temp, &mask))
            .unwrap_err();
        assert!(matches!(err, BcError::MissingInput { input: "reference data", .. }));
        assert_eq!(t, before);

        // Provider without temperature
        let salt_only = ConstantReference::new().with(BdyVar::Salt, 35.0);
        let err = filler
            .apply(&mut t, &FillRequest::new(BcVar::Temp, &mask).reference(&salt_only))
            .unwrap_err();
        assert!(matches!(err, BcError::MissingInput { .. }));
    }

    #[test]
    fn test_wrong_mask_staggering() {
        let (filler, cells) = setup(SideBoundaries::uniform(PhysicalBc::Outflow));
        let mut t = temp(&cells);
        let umask = LandMask::all_wet(&cells, 2, Staggering::U);
        let err = filler
            .apply(&mut t, &FillRequest::new(BcVar::Temp, &umask))
            .unwrap_err();
        assert!(matches!(err, BcError::MaskStaggering { role: "field", .. }));
    }

    #[test]
    fn test_component_and_row_ranges() {
        let (filler, cells) = setup(SideBoundaries::uniform(PhysicalBc::Outflow));
        let mask = LandMask::all_wet(&cells, 2, Staggering::Rho);

        let mut t = temp(&cells);
        let err = filler
            .apply(&mut t, &FillRequest::new(BcVar::Temp, &mask).comps(0, 2))
            .unwrap_err();
        assert!(matches!(err, BcError::ComponentOutOfRange { .. }));

        let mut v = Field::new(&cells, [1, 1, 0], 3, Staggering::V);
        let vmask = LandMask::all_wet(&cells, 1, Staggering::V);
        let err = filler
            .apply(&mut v, &FillRequest::new(BcVar::V2dSimple, &vmask).comps(0, 3))
            .unwrap_err();
        assert!(matches!(err, BcError::MissingTableEntry { row: 15, len: 14 }));
    }

    #[test]
    fn test_component_offset_selects_row() {
        let (filler, cells) = setup(SideBoundaries::uniform(PhysicalBc::Inflow));
        let table = filler.table().clone().with_ext_dir(BcVar::Salt, Face::West, 35.0);
        let filler = BoundaryFiller::new(
            LevelIndex::ZERO,
            filler.domain().clone(),
            Arc::new(table),
            OpenBoundaryParams::default(),
        )
        .unwrap();
        let mut f = Field::from_fn(&cells, [1, 1, 0], 2, Staggering::Rho, |_, _| 1.0);
        let mask = LandMask::all_wet(&cells, 1, Staggering::Rho);

        let req = FillRequest::new(BcVar::Salt, &mask).comps(1, 1);
        assert_eq!(req.first_comp(), ComponentIndex::new(1));
        filler.apply(&mut f, &req).unwrap();

        let ghost = IntVect::new(-1, 2, 0);
        assert_eq!(f.get(ghost, 0), 0.0);
        assert_eq!(f.get(ghost, 1), 35.0);
    }

    #[test]
    fn test_non_finite_interior_is_rejected() {
        let (filler, cells) = setup(SideBoundaries::uniform(PhysicalBc::Outflow));
        let mask = LandMask::all_wet(&cells, 2, Staggering::Rho);
        let req = FillRequest::new(BcVar::Temp, &mask);

        // Boundary row of the west face
        let mut t = temp(&cells);
        t.set(IntVect::new(0, 2, 0), 0, f64::NAN);
        let before = t.clone();
        let err = filler.apply(&mut t, &req).unwrap_err();
        assert_eq!(
            err,
            BcError::NonFiniteInterior {
                var: BcVar::Temp,
                face: Face::West
            }
        );
        assert_eq!(t.get(IntVect::new(-1, 2, 0), 0), before.get(IntVect::new(-1, 2, 0), 0));

        // Deeper interior values are not inspected
        let mut t = temp(&cells);
        t.set(IntVect::new(3, 2, 1), 0, f64::INFINITY);
        filler.apply(&mut t, &req).unwrap();
    }

    #[test]
    fn test_not_to_fill_skips_trailing_components() {
        let (filler, cells) = setup(SideBoundaries::uniform(PhysicalBc::Outflow));
        let mut f = Field::from_fn(&cells, [1, 1, 0], 3, Staggering::Rho, |_, n| n as f64 + 1.0);
        let mask = LandMask::all_wet(&cells, 1, Staggering::Rho);
        let req = FillRequest::new(BcVar::Temp, &mask).comps(0, 3).not_to_fill(1);
        filler.apply(&mut f, &req).unwrap();

        let ghost = IntVect::new(-1, 1, 0);
        assert_eq!(f.get(ghost, 0), 1.0);
        assert_eq!(f.get(ghost, 1), 2.0);
        assert_eq!(f.get(ghost, 2), 0.0);
    }

    #[test]
    fn test_null_fill_does_nothing() {
        let cells = IndexBox::from_size(3, 3, 1);
        let mut f = temp(&cells);
        let before = f.clone();
        let mask = LandMask::all_wet(&cells, 2, Staggering::Rho);
        NullFill
            .fill(&mut f, &FillRequest::new(BcVar::Tke, &mask))
            .unwrap();
        assert_eq!(f, before);
        assert_eq!(NullFill.name(), "null");
    }
}
