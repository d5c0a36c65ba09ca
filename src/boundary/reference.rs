//! External reference-state providers.
//!
//! Clamped, Flather and radiation-with-nudging conditions relax the
//! boundary toward an externally supplied state (tidal or climatological
//! boundary data, a parent model, ...). The engine only asks one question
//! of that data, through [`BoundaryReference`]: the value of variable
//! `var` at a boundary point at time `t`.
//!
//! Providers:
//! - [`ConstantReference`]: one value per variable
//! - [`SnapshotReference`]: gridded fields valid at a single time
//! - [`InterpolatedReference`]: snapshots at several times, linear in time
//! - [`FnReference`]: any closure `(var, face, point, time) -> value`

use std::collections::BTreeMap;

use super::BdyVar;
use crate::error::ConfigError;
use crate::mesh::Field;
use crate::types::{Face, IntVect};

/// Source of boundary reference values.
///
/// Implementations are read-only and shared across concurrent fills.
pub trait BoundaryReference: Send + Sync {
    /// Reference value of `var` on `face` at point `p` and time `time`.
    fn value(&self, var: BdyVar, face: Face, p: IntVect, time: f64) -> f64;

    /// True if this provider has data for `var`.
    fn provides(&self, _var: BdyVar) -> bool {
        true
    }
}

/// Constant reference values per variable.
///
/// # Example
///
/// ```
/// use ocean_bc::boundary::{BdyVar, BoundaryReference, ConstantReference};
/// use ocean_bc::types::{Face, IntVect};
///
/// let reference = ConstantReference::new()
///     .with(BdyVar::Temp, 12.0)
///     .with(BdyVar::Salt, 35.0);
///
/// assert_eq!(reference.value(BdyVar::Salt, Face::West, IntVect::splat(0), 0.0), 35.0);
/// assert!(!reference.provides(BdyVar::Zeta));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConstantReference {
    values: BTreeMap<BdyVar, f64>,
}

impl ConstantReference {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the value of a variable.
    pub fn with(mut self, var: BdyVar, value: f64) -> Self {
        self.values.insert(var, value);
        self
    }

    /// Replace the value of a variable in place (for time-varying forcing).
    pub fn set(&mut self, var: BdyVar, value: f64) {
        self.values.insert(var, value);
    }
}

impl BoundaryReference for ConstantReference {
    fn value(&self, var: BdyVar, _face: Face, _p: IntVect, _time: f64) -> f64 {
        self.values.get(&var).copied().unwrap_or(0.0)
    }

    fn provides(&self, var: BdyVar) -> bool {
        self.values.contains_key(&var)
    }
}

/// Gridded reference fields valid at one time.
///
/// Points outside a field's allocation are clamped to its nearest
/// allocated point, so boundary strips narrower than the ghost layer are
/// held constant outward.
#[derive(Clone, Debug, Default)]
pub struct SnapshotReference {
    fields: BTreeMap<BdyVar, Field>,
}

impl SnapshotReference {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the field of one variable (component 0 is used).
    pub fn with_field(mut self, var: BdyVar, field: Field) -> Self {
        self.fields.insert(var, field);
        self
    }

    /// Field of a variable, if present.
    pub fn field(&self, var: BdyVar) -> Option<&Field> {
        self.fields.get(&var)
    }

    fn sample(&self, var: BdyVar, p: IntVect) -> f64 {
        self.fields
            .get(&var)
            .map_or(0.0, |field| field.get_clamped(p, 0))
    }
}

impl BoundaryReference for SnapshotReference {
    fn value(&self, var: BdyVar, _face: Face, p: IntVect, _time: f64) -> f64 {
        self.sample(var, p)
    }

    fn provides(&self, var: BdyVar) -> bool {
        self.fields.contains_key(&var)
    }
}

/// Reference snapshots at increasing times, linearly interpolated.
///
/// - If t < first time: returns the first snapshot (clamped)
/// - If t > last time: returns the last snapshot (clamped)
/// - Otherwise: linear interpolation between bracketing snapshots
#[derive(Clone, Debug)]
pub struct InterpolatedReference {
    times: Vec<f64>,
    snapshots: Vec<SnapshotReference>,
}

impl InterpolatedReference {
    /// Create a series from `(time, snapshot)` pairs.
    ///
    /// # Errors
    /// - `EmptyReference` if no snapshots are provided
    /// - `InvalidParameter` if a time is not finite
    /// - `NonMonotonicReference` if times are not strictly increasing
    pub fn new(records: Vec<(f64, SnapshotReference)>) -> Result<Self, ConfigError> {
        if records.is_empty() {
            return Err(ConfigError::EmptyReference);
        }
        if let Some(&(t, _)) = records.iter().find(|(t, _)| !t.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "snapshot time",
                value: t,
                reason: "must be finite",
            });
        }
        for i in 1..records.len() {
            if records[i].0 <= records[i - 1].0 {
                return Err(ConfigError::NonMonotonicReference { index: i });
            }
        }
        let (times, snapshots) = records.into_iter().unzip();
        Ok(Self { times, snapshots })
    }

    /// Time range covered by the series.
    pub fn time_range(&self) -> (f64, f64) {
        (self.times[0], self.times[self.times.len() - 1])
    }

    /// Bracketing snapshot indices and weight of the later one.
    ///
    /// A NaN time selects the first snapshot.
    fn bracket(&self, t: f64) -> (usize, usize, f64) {
        let last = self.times.len() - 1;
        if t.is_nan() || t <= self.times[0] {
            return (0, 0, 0.0);
        }
        if t >= self.times[last] {
            return (last, last, 0.0);
        }
        let upper = self.times.partition_point(|&ti| ti <= t);
        let lower = upper - 1;
        let w = (t - self.times[lower]) / (self.times[upper] - self.times[lower]);
        (lower, upper, w)
    }
}

impl BoundaryReference for InterpolatedReference {
    fn value(&self, var: BdyVar, _face: Face, p: IntVect, time: f64) -> f64 {
        let (lo, hi, w) = self.bracket(time);
        let a = self.snapshots[lo].sample(var, p);
        if lo == hi {
            return a;
        }
        let b = self.snapshots[hi].sample(var, p);
        (1.0 - w) * a + w * b
    }

    fn provides(&self, var: BdyVar) -> bool {
        self.snapshots.iter().all(|s| s.provides(var))
    }
}

/// Closure-backed reference, e.g. analytic tides.
///
/// # Example
///
/// ```
/// use ocean_bc::boundary::{BdyVar, BoundaryReference, FnReference};
/// use ocean_bc::types::{Face, IntVect};
/// use std::f64::consts::PI;
///
/// let omega = 2.0 * PI / (12.42 * 3600.0);
/// let tide = FnReference::new(move |var, _face, _p, t| match var {
///     BdyVar::Zeta => 0.5 * (omega * t).cos(),
///     _ => 0.0,
/// });
///
/// assert!((tide.value(BdyVar::Zeta, Face::East, IntVect::splat(0), 0.0) - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct FnReference<F>
where
    F: Fn(BdyVar, Face, IntVect, f64) -> f64 + Send + Sync,
{
    f: F,
}

impl<F> FnReference<F>
where
    F: Fn(BdyVar, Face, IntVect, f64) -> f64 + Send + Sync,
{
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> BoundaryReference for FnReference<F>
where
    F: Fn(BdyVar, Face, IntVect, f64) -> f64 + Send + Sync,
{
    fn value(&self, var: BdyVar, face: Face, p: IntVect, time: f64) -> f64 {
        (self.f)(var, face, p, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IndexBox, Staggering};

    fn snapshot(value: f64) -> SnapshotReference {
        let cells = IndexBox::from_size(4, 4, 1);
        let field = Field::from_fn(&cells, [1, 1, 0], 1, Staggering::Rho, |p, _| {
            value + p.i as f64
        });
        SnapshotReference::new().with_field(BdyVar::Temp, field)
    }

    #[test]
    fn test_constant_reference() {
        let mut r = ConstantReference::new().with(BdyVar::Zeta, 0.3);
        assert_eq!(r.value(BdyVar::Zeta, Face::North, IntVect::splat(5), 10.0), 0.3);
        r.set(BdyVar::Zeta, -0.1);
        assert_eq!(r.value(BdyVar::Zeta, Face::North, IntVect::splat(5), 10.0), -0.1);
        assert!(r.provides(BdyVar::Zeta));
        assert!(!r.provides(BdyVar::U));
    }

    #[test]
    fn test_snapshot_clamps_outside_allocation() {
        let r = snapshot(10.0);
        // Valid point
        assert_eq!(r.value(BdyVar::Temp, Face::East, IntVect::new(2, 1, 0), 0.0), 12.0);
        // Far west of the allocation: clamped to i = -1 (a ghost, left at 0)
        assert_eq!(r.value(BdyVar::Temp, Face::West, IntVect::new(-5, 1, 0), 0.0), 0.0);
        assert!(r.provides(BdyVar::Temp));
        assert!(!r.provides(BdyVar::Salt));
    }

    #[test]
    fn test_series_interpolates_linearly() {
        let series =
            InterpolatedReference::new(vec![(0.0, snapshot(10.0)), (100.0, snapshot(20.0))]).unwrap();
        let p = IntVect::new(0, 0, 0);
        assert_eq!(series.value(BdyVar::Temp, Face::West, p, -5.0), 10.0);
        assert!((series.value(BdyVar::Temp, Face::West, p, 25.0) - 12.5).abs() < 1e-12);
        assert_eq!(series.value(BdyVar::Temp, Face::West, p, 500.0), 20.0);
        assert_eq!(series.time_range(), (0.0, 100.0));
    }

    #[test]
    fn test_series_non_finite_times() {
        let series =
            InterpolatedReference::new(vec![(0.0, snapshot(10.0)), (100.0, snapshot(20.0))]).unwrap();
        let p = IntVect::new(1, 0, 0);
        assert_eq!(series.value(BdyVar::Temp, Face::West, p, f64::NAN), 11.0);
        assert_eq!(series.value(BdyVar::Temp, Face::West, p, f64::INFINITY), 21.0);
        assert_eq!(series.value(BdyVar::Temp, Face::West, p, f64::NEG_INFINITY), 11.0);

        let err = InterpolatedReference::new(vec![(f64::NAN, snapshot(0.0)), (1.0, snapshot(1.0))]);
        assert!(matches!(
            err,
            Err(ConfigError::InvalidParameter { name: "snapshot time", .. })
        ));
    }

    #[test]
    fn test_series_rejects_bad_times() {
        assert!(matches!(
            InterpolatedReference::new(Vec::new()),
            Err(ConfigError::EmptyReference)
        ));
        let err = InterpolatedReference::new(vec![(5.0, snapshot(0.0)), (5.0, snapshot(1.0))]);
        assert!(matches!(
            err,
            Err(ConfigError::NonMonotonicReference { index: 1 })
        ));
    }

    #[test]
    fn test_fn_reference_sees_face_and_point() {
        let r = FnReference::new(|_, face, p, t| {
            if face == Face::West { p.j as f64 + t } else { -1.0 }
        });
        assert_eq!(r.value(BdyVar::U, Face::West, IntVect::new(0, 3, 0), 1.5), 4.5);
        assert_eq!(r.value(BdyVar::U, Face::East, IntVect::new(0, 3, 0), 1.5), -1.0);
    }
}
