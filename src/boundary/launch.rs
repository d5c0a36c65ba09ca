//! Per-face work description and the column loop.
//!
//! A face is processed column by column, a column being one tangential
//! index at one vertical level. Every column reads only the unmodified
//! field and its inputs and produces a list of [`GhostWrite`]s, so columns
//! are independent and may run in parallel.

use std::ops::RangeInclusive;

use super::{
    Barotropic, BcType, BcVar, BdyVar, BoundaryReference, FaceGeometry, OpenBoundaryParams,
    OrlanskiRadiation, RadiationInput,
};
use crate::mesh::{Field, LandMask};
use crate::types::IntVect;

/// One pending ghost value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GhostWrite {
    /// Target point
    pub point: IntVect,
    /// Value to store
    pub value: f64,
}

/// Weighting of tangential differences used by the radiation estimate.
#[derive(Clone, Copy)]
pub(crate) enum GradientMask<'a> {
    /// Mask staggered between the two points (v-mask on west/east faces,
    /// u-mask on south/north faces)
    Cross(&'a LandMask),
    /// Product of the field's own mask at both points
    Own,
}

/// Everything needed to fill one component on one face.
pub(crate) struct FaceContext<'a> {
    pub geom: FaceGeometry,
    pub var: BcVar,
    pub kind: BcType,
    pub comp: usize,
    pub nghost: usize,
    pub tangential: RangeInclusive<i32>,
    pub levels: RangeInclusive<i32>,
    pub field: &'a Field,
    pub mask: &'a LandMask,
    pub previous: Option<&'a Field>,
    pub reference: Option<&'a dyn BoundaryReference>,
    pub gradient_mask: GradientMask<'a>,
    pub barotropic: Option<&'a Barotropic<'a>>,
    pub time: f64,
    pub ext_dir: f64,
    pub dx_inv: f64,
    pub params: &'a OpenBoundaryParams,
}

impl<'a> FaceContext<'a> {
    /// Axis along the face.
    #[inline]
    pub fn tangential_axis(&self) -> usize {
        1 - self.geom.axis()
    }

    /// Point at normal index `n`, tangential index `t` and level `k`.
    #[inline]
    pub fn point(&self, n: i32, t: i32, k: i32) -> IntVect {
        let along = IntVect::new(0, 0, k).with_axis(self.tangential_axis(), t);
        self.geom.at(along, n)
    }

    /// Current value, clamped into the allocation.
    #[inline]
    pub fn current(&self, p: IntVect) -> f64 {
        self.field.get_clamped(p, self.comp)
    }

    /// Current value at the `depth`-th interior point of a column, kept
    /// inside the valid box for blocks thinner than the stencil.
    pub fn interior_value(&self, t: i32, k: i32, depth: usize) -> f64 {
        let axis = self.geom.axis();
        let n = self
            .field
            .valid_box()
            .clamp_axis(axis, self.geom.interior(depth));
        self.current(self.point(n, t, k))
    }

    /// Previous-time value (presence checked before launch).
    #[inline]
    pub fn previous(&self, p: IntVect) -> f64 {
        match self.previous {
            Some(prev) => prev.get_clamped(p, self.comp),
            None => self.current(p),
        }
    }

    /// Reference value of this row's boundary variable.
    #[inline]
    pub fn reference(&self, p: IntVect) -> f64 {
        self.reference_of(self.var.bdy_var(), p)
    }

    /// Reference value of another boundary variable.
    #[inline]
    pub fn reference_of(&self, var: Option<BdyVar>, p: IntVect) -> f64 {
        match (self.reference, var) {
            (Some(r), Some(v)) => r.value(v, self.geom.face(), p, self.time),
            _ => 0.0,
        }
    }

    /// Push a value, replaced by the land value at land points.
    #[inline]
    pub fn write(&self, out: &mut Vec<GhostWrite>, point: IntVect, value: f64) {
        let value = if self.mask.value_clamped(point.i, point.j) > 0.5 {
            value
        } else {
            self.params.land_value
        };
        out.push(GhostWrite { point, value });
    }

    /// Write `value` to ghost layers `from..=nghost` of a column.
    pub fn hold(&self, out: &mut Vec<GhostWrite>, t: i32, k: i32, from: usize, value: f64) {
        for m in from..=self.nghost {
            let p = self.point(self.geom.ghost(m), t, k);
            self.write(out, p, value);
        }
    }

    /// Fill a column with one of the kinds that need no time history.
    ///
    /// Returns `false` for radiation kinds, which the caller handles. On a
    /// nodal face the boundary point is written by the Dirichlet-like kinds.
    pub fn fill_standard(&self, t: i32, k: i32, out: &mut Vec<GhostWrite>) -> bool {
        let boundary_point = self.geom.boundary_point().map(|b| self.point(b, t, k));
        match self.kind {
            BcType::IntDir => {}
            BcType::ReflectEven | BcType::ReflectOdd => {
                let sign = if self.kind == BcType::ReflectOdd { -1.0 } else { 1.0 };
                if let (Some(b), BcType::ReflectOdd) = (boundary_point, self.kind) {
                    self.write(out, b, 0.0);
                }
                for m in 1..=self.nghost {
                    let mirror = self.current(self.point(self.geom.mirror(m), t, k));
                    let p = self.point(self.geom.ghost(m), t, k);
                    self.write(out, p, sign * mirror);
                }
            }
            BcType::Foextrap => {
                let edge = self.current(self.point(self.geom.boundary(), t, k));
                self.hold(out, t, k, 1, edge);
            }
            BcType::ExtDir => {
                if let Some(b) = boundary_point {
                    self.write(out, b, self.ext_dir);
                }
                self.hold(out, t, k, 1, self.ext_dir);
            }
            BcType::Clamped => {
                if let Some(b) = boundary_point {
                    self.write(out, b, self.reference(b));
                }
                for m in 1..=self.nghost {
                    let p = self.point(self.geom.ghost(m), t, k);
                    self.write(out, p, self.reference(p));
                }
            }
            BcType::Chapman
            | BcType::Flather
            | BcType::OrlanskiRad
            | BcType::OrlanskiRadNudge => return false,
        }
        true
    }

    /// Radiation stencil for the point at normal index `r`, whose first and
    /// second interior neighbours lie one and two steps inward.
    pub fn radiation_input(&self, r: i32, t: i32, k: i32) -> RadiationInput {
        let inward = self.geom.inward();
        let valid = self.field.valid_box();
        let axis = self.geom.axis();
        let a = valid.clamp_axis(axis, r + inward);
        let a2 = valid.clamp_axis(axis, r + 2 * inward);

        let at_r = self.point(r, t, k);
        let at_a = self.point(a, t, k);

        RadiationInput {
            old_boundary: self.previous(at_r),
            old_interior: self.previous(at_a),
            new_interior: self.current(at_a),
            new_interior_next: self.current(self.point(a2, t, k)),
            interior_grad: self.tangential_gradients(a, t, k),
            boundary_grad: self.tangential_gradients(r, t, k),
            reference: self.reference(at_r),
        }
    }

    /// Orlanski radiation of one column.
    ///
    /// The radiated point is the boundary point on a nodal face and the
    /// first ghost otherwise; deeper ghosts hold its value.
    pub fn radiate(&self, rad: &OrlanskiRadiation, t: i32, k: i32, out: &mut Vec<GhostWrite>) {
        match self.geom.boundary_point() {
            Some(b) => {
                let outcome = rad.evaluate(&self.radiation_input(b, t, k));
                self.write(out, self.point(b, t, k), outcome.value);
                self.hold(out, t, k, 1, outcome.value);
            }
            None => {
                let outcome = rad.evaluate(&self.radiation_input(self.geom.ghost(1), t, k));
                self.hold(out, t, k, 1, outcome.value);
            }
        }
    }

    /// Radiation estimator for this face's kind.
    pub fn orlanski(&self) -> OrlanskiRadiation {
        if self.kind == BcType::OrlanskiRadNudge {
            OrlanskiRadiation::with_nudging(*self.params)
        } else {
            OrlanskiRadiation::new(*self.params)
        }
    }

    /// Masked previous-time differences `[T(t) - T(t-1), T(t+1) - T(t)]`
    /// along the face at normal index `n`.
    fn tangential_gradients(&self, n: i32, t: i32, k: i32) -> [f64; 2] {
        let value = |t| self.previous(self.point(n, t, k));
        let weight = |t_hi: i32| -> f64 {
            let hi = self.point(n, t_hi, k);
            match self.gradient_mask {
                GradientMask::Cross(mask) => mask.value_clamped(hi.i, hi.j),
                GradientMask::Own => {
                    let lo = self.point(n, t_hi - 1, k);
                    self.mask.value_clamped(hi.i, hi.j) * self.mask.value_clamped(lo.i, lo.j)
                }
            }
        };
        [
            (value(t) - value(t - 1)) * weight(t),
            (value(t + 1) - value(t)) * weight(t + 1),
        ]
    }

    /// Run `column` over every (tangential, vertical) column of the face and
    /// gather the writes.
    pub fn run<F>(&self, column: F) -> Vec<GhostWrite>
    where
        F: Fn(i32, i32, &mut Vec<GhostWrite>) + Sync,
    {
        let columns: Vec<(i32, i32)> = self
            .levels
            .clone()
            .flat_map(|k| self.tangential.clone().map(move |t| (t, k)))
            .collect();
        collect_columns(&columns, column)
    }
}

/// Serial column loop.
#[cfg(not(feature = "parallel"))]
fn collect_columns<F>(columns: &[(i32, i32)], column: F) -> Vec<GhostWrite>
where
    F: Fn(i32, i32, &mut Vec<GhostWrite>) + Sync,
{
    let mut out = Vec::new();
    for &(t, k) in columns {
        column(t, k, &mut out);
    }
    out
}

/// Parallel column loop. Output order matches the serial loop.
#[cfg(feature = "parallel")]
fn collect_columns<F>(columns: &[(i32, i32)], column: F) -> Vec<GhostWrite>
where
    F: Fn(i32, i32, &mut Vec<GhostWrite>) + Sync,
{
    use rayon::prelude::*;

    columns
        .par_iter()
        .flat_map_iter(|&(t, k)| {
            let mut out = Vec::new();
            column(t, k, &mut out);
            out
        })
        .collect()
}
