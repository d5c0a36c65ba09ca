//! Multi-component grid fields with a ghost margin.

use crate::types::{IndexBox, IntVect, Staggering};

/// A 3-D, multi-component array of `f64` over a valid index box plus a
/// ghost margin, tagged with its staggering.
///
/// Storage is contiguous with i fastest, then j, k, and component.
/// Indices are signed so ghost points west/south of the origin are
/// addressed directly.
///
/// # Example
///
/// ```
/// use ocean_bc::mesh::Field;
/// use ocean_bc::types::{IndexBox, IntVect, Staggering};
///
/// let cells = IndexBox::from_size(8, 4, 2);
/// let mut temp = Field::new(&cells, [2, 2, 0], 1, Staggering::Rho);
/// temp.set(IntVect::new(0, 0, 0), 0, 12.5);
///
/// assert_eq!(temp.get(IntVect::new(0, 0, 0), 0), 12.5);
/// assert_eq!(temp.grown_box().lo, IntVect::new(-2, -2, 0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    valid: IndexBox,
    grown: IndexBox,
    ngrow: [usize; 3],
    ncomp: usize,
    staggering: Staggering,
    data: Vec<f64>,
}

impl Field {
    /// Create a zero-initialized field on the given cell box.
    ///
    /// The valid box is derived from `cells` and the staggering, so a
    /// `U` field on `n` cells has `n + 1` points in x.
    pub fn new(cells: &IndexBox, ngrow: [usize; 3], ncomp: usize, staggering: Staggering) -> Self {
        let valid = staggering.box_from_cells(cells);
        let grown = valid.grow(ngrow);
        Self {
            valid,
            grown,
            ngrow,
            ncomp,
            staggering,
            data: vec![0.0; grown.num_points() * ncomp],
        }
    }

    /// Create a field and initialize its valid region from a function of
    /// `(point, component)`. Ghost points are left at zero.
    pub fn from_fn<F>(
        cells: &IndexBox,
        ngrow: [usize; 3],
        ncomp: usize,
        staggering: Staggering,
        f: F,
    ) -> Self
    where
        F: Fn(IntVect, usize) -> f64,
    {
        let mut field = Self::new(cells, ngrow, ncomp, staggering);
        let valid = field.valid;
        for n in 0..ncomp {
            for p in valid.iter() {
                field.set(p, n, f(p, n));
            }
        }
        field
    }

    /// Valid (interior) index box.
    #[inline]
    pub fn valid_box(&self) -> IndexBox {
        self.valid
    }

    /// Allocated index box (valid box grown by the ghost margin).
    #[inline]
    pub fn grown_box(&self) -> IndexBox {
        self.grown
    }

    /// Allocated ghost width per axis.
    #[inline]
    pub fn ngrow(&self) -> [usize; 3] {
        self.ngrow
    }

    /// Number of components.
    #[inline]
    pub fn ncomp(&self) -> usize {
        self.ncomp
    }

    /// Staggering of the sample points.
    #[inline]
    pub fn staggering(&self) -> Staggering {
        self.staggering
    }

    #[inline]
    fn offset(&self, p: IntVect, n: usize) -> usize {
        debug_assert!(
            self.grown.contains(p) && n < self.ncomp,
            "point {} comp {} outside field {} x {}",
            p,
            n,
            self.grown,
            self.ncomp
        );
        let nx = self.grown.len(0);
        let ny = self.grown.len(1);
        let nz = self.grown.len(2);
        let i = (p.i - self.grown.lo.i) as usize;
        let j = (p.j - self.grown.lo.j) as usize;
        let k = (p.k - self.grown.lo.k) as usize;
        ((n * nz + k) * ny + j) * nx + i
    }

    /// Value at a point (valid or ghost).
    #[inline]
    pub fn get(&self, p: IntVect, n: usize) -> f64 {
        self.data[self.offset(p, n)]
    }

    /// Value at a point, or `None` outside the allocated region.
    #[inline]
    pub fn try_get(&self, p: IntVect, n: usize) -> Option<f64> {
        (self.grown.contains(p) && n < self.ncomp).then(|| self.get(p, n))
    }

    /// Value at the allocated point nearest to `p`.
    #[inline]
    pub fn get_clamped(&self, p: IntVect, n: usize) -> f64 {
        let g = &self.grown;
        let q = IntVect::new(
            g.clamp_axis(0, p.i),
            g.clamp_axis(1, p.j),
            g.clamp_axis(2, p.k),
        );
        self.get(q, n)
    }

    /// Overwrite a value.
    #[inline]
    pub fn set(&mut self, p: IntVect, n: usize, value: f64) {
        let idx = self.offset(p, n);
        self.data[idx] = value;
    }

    /// Set every point (valid and ghost) of every component.
    pub fn set_val(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Set every ghost point of every component, leaving the valid region.
    pub fn set_ghost_val(&mut self, value: f64) {
        let grown = self.grown;
        let valid = self.valid;
        for n in 0..self.ncomp {
            for p in grown.iter().filter(|p| !valid.contains(*p)) {
                self.set(p, n, value);
            }
        }
    }

    /// Raw storage of one component.
    pub fn component(&self, n: usize) -> &[f64] {
        let len = self.grown.num_points();
        &self.data[n * len..(n + 1) * len]
    }

    /// True if every valid value of the given components is finite.
    pub fn valid_is_finite(&self, comps: std::ops::Range<usize>) -> bool {
        comps
            .into_iter()
            .all(|n| self.valid.iter().all(|p| self.get(p, n).is_finite()))
    }
}
