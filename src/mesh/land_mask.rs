//! Land/sea masks on the staggered grid.
//!
//! One mask exists per horizontal staggering (rho, u, v), with 1 marking
//! water and 0 marking land, similar to ROMS `rmask`/`umask`/`vmask`.
//! Masks are two-dimensional: the vertical index of a query is ignored.
//!
//! # Example
//!
//! ```
//! use ocean_bc::mesh::LandMask;
//! use ocean_bc::types::{IndexBox, Staggering};
//!
//! // Island in the middle of a 6x6 basin
//! let cells = IndexBox::from_size(6, 6, 1);
//! let rmask = LandMask::from_fn(&cells, 2, Staggering::Rho, |i, j| {
//!     !(2..=3).contains(&i) || !(2..=3).contains(&j)
//! });
//! let umask = LandMask::derive_u(&rmask);
//!
//! assert!(rmask.is_wet(0, 0));
//! assert!(!rmask.is_wet(2, 2));
//! // The u-face between a water cell and an island cell is closed
//! assert!(!umask.is_wet(2, 2));
//! ```

use std::fmt;

use super::Field;
use crate::types::{IndexBox, IntVect, Staggering};

/// Land mask for one staggering.
///
/// Never mutated by the boundary engine; shared read-only between the
/// engine and physics kernels.
#[derive(Clone, Debug, PartialEq)]
pub struct LandMask {
    data: Field,
}

impl LandMask {
    fn horizontal(cells: &IndexBox) -> IndexBox {
        IndexBox::new(
            IntVect::new(cells.lo.i, cells.lo.j, 0),
            IntVect::new(cells.hi.i, cells.hi.j, 0),
        )
    }

    /// Create a mask where every point (including ghosts) is water.
    pub fn all_wet(cells: &IndexBox, ngrow: usize, staggering: Staggering) -> Self {
        let mut data = Field::new(&Self::horizontal(cells), [ngrow, ngrow, 0], 1, staggering);
        data.set_val(1.0);
        Self { data }
    }

    /// Create a mask where every point is land.
    pub fn all_dry(cells: &IndexBox, ngrow: usize, staggering: Staggering) -> Self {
        let data = Field::new(&Self::horizontal(cells), [ngrow, ngrow, 0], 1, staggering);
        Self { data }
    }

    /// Create a mask from a predicate `is_water(i, j)` evaluated on every
    /// allocated point, ghost margin included.
    pub fn from_fn<F>(cells: &IndexBox, ngrow: usize, staggering: Staggering, is_water: F) -> Self
    where
        F: Fn(i32, i32) -> bool,
    {
        let mut data = Field::new(&Self::horizontal(cells), [ngrow, ngrow, 0], 1, staggering);
        let grown = data.grown_box();
        for p in grown.iter() {
            data.set(p, 0, if is_water(p.i, p.j) { 1.0 } else { 0.0 });
        }
        Self { data }
    }

    fn derive(rho: &LandMask, staggering: Staggering, axis: usize) -> Self {
        debug_assert_eq!(rho.staggering(), Staggering::Rho);
        let cells = IndexBox::new(rho.data.valid_box().lo, rho.data.valid_box().hi);
        let ngrow = rho.ngrow();
        let mut data = Field::new(&cells, [ngrow, ngrow, 0], 1, staggering);
        let grown = data.grown_box();
        for p in grown.iter() {
            // A face is water only if the cells on both sides are water.
            let left = rho.data.try_get(p.shifted(axis, -1), 0);
            let right = rho.data.try_get(p, 0);
            let v = match (left, right) {
                (Some(a), Some(b)) => a * b,
                (Some(a), None) | (None, Some(a)) => a,
                (None, None) => 0.0,
            };
            data.set(p, 0, v);
        }
        Self { data }
    }

    /// Derive the u-face mask from a rho mask: `umask(i,j) = rmask(i-1,j) * rmask(i,j)`.
    pub fn derive_u(rho: &LandMask) -> Self {
        Self::derive(rho, Staggering::U, 0)
    }

    /// Derive the v-face mask from a rho mask: `vmask(i,j) = rmask(i,j-1) * rmask(i,j)`.
    pub fn derive_v(rho: &LandMask) -> Self {
        Self::derive(rho, Staggering::V, 1)
    }

    /// Staggering this mask belongs to.
    #[inline]
    pub fn staggering(&self) -> Staggering {
        self.data.staggering()
    }

    /// Allocated ghost width.
    #[inline]
    pub fn ngrow(&self) -> usize {
        self.data.ngrow()[0]
    }

    /// Allocated horizontal index box (k = 0).
    #[inline]
    pub fn grown_box(&self) -> IndexBox {
        self.data.grown_box()
    }

    /// True if the mask has a value for every horizontal point of `region`.
    pub fn covers(&self, region: &IndexBox) -> bool {
        let g = self.data.grown_box();
        region.lo.i >= g.lo.i && region.hi.i <= g.hi.i && region.lo.j >= g.lo.j && region.hi.j <= g.hi.j
    }

    /// Mask value (1 water, 0 land) at `(i, j)`.
    #[inline]
    pub fn value(&self, i: i32, j: i32) -> f64 {
        self.data.get(IntVect::new(i, j, 0), 0)
    }

    /// Mask value at a 3-D point; the vertical index is ignored.
    #[inline]
    pub fn at(&self, p: IntVect) -> f64 {
        self.value(p.i, p.j)
    }

    /// Mask value at the allocated point nearest to `(i, j)`.
    #[inline]
    pub fn value_clamped(&self, i: i32, j: i32) -> f64 {
        self.data.get_clamped(IntVect::new(i, j, 0), 0)
    }

    /// Check if a point is water.
    #[inline]
    pub fn is_wet(&self, i: i32, j: i32) -> bool {
        self.value(i, j) > 0.5
    }

    /// Check if a point is land.
    #[inline]
    pub fn is_dry(&self, i: i32, j: i32) -> bool {
        !self.is_wet(i, j)
    }

    /// Set the wet status of a point.
    pub fn set_wet(&mut self, i: i32, j: i32, is_wet: bool) {
        self.data
            .set(IntVect::new(i, j, 0), 0, if is_wet { 1.0 } else { 0.0 });
    }

    /// Get statistics about the valid region of the mask.
    pub fn statistics(&self) -> LandMaskStatistics {
        let valid = self.data.valid_box();
        let total = valid.num_points();
        let wet = valid.iter().filter(|p| self.is_wet(p.i, p.j)).count();
        LandMaskStatistics {
            staggering: self.staggering(),
            total_points: total,
            wet_points: wet,
            dry_points: total - wet,
        }
    }
}

/// Statistics about a land mask.
#[derive(Debug, Clone)]
pub struct LandMaskStatistics {
    /// Staggering of the mask
    pub staggering: Staggering,
    /// Total number of valid points
    pub total_points: usize,
    /// Number of water points
    pub wet_points: usize,
    /// Number of land points
    pub dry_points: usize,
}

impl fmt::Display for LandMaskStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Land Mask Statistics ({}):", self.staggering)?;
        writeln!(f, "  Total points: {}", self.total_points)?;
        writeln!(
            f,
            "  Wet points: {} ({:.1}%)",
            self.wet_points,
            100.0 * self.wet_points as f64 / self.total_points as f64
        )?;
        write!(
            f,
            "  Dry points: {} ({:.1}%)",
            self.dry_points,
            100.0 * self.dry_points as f64 / self.total_points as f64
        )
    }
}
