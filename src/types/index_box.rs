//! Inclusive integer index boxes.

use std::fmt;

use super::IntVect;

/// Rectangular index region `[lo, hi]` (inclusive on both ends).
///
/// # Example
///
/// ```
/// use ocean_bc::types::{IndexBox, IntVect};
///
/// let cells = IndexBox::new(IntVect::new(0, 0, 0), IntVect::new(9, 4, 2));
/// assert_eq!(cells.len(0), 10);
/// assert_eq!(cells.num_points(), 10 * 5 * 3);
///
/// let grown = cells.grow_horizontal(2);
/// assert_eq!(grown.lo, IntVect::new(-2, -2, 0));
/// assert!(grown.contains(IntVect::new(11, 6, 2)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexBox {
    /// Lower corner
    pub lo: IntVect,
    /// Upper corner
    pub hi: IntVect,
}

impl IndexBox {
    /// Create a box from its corners.
    ///
    /// # Panics
    ///
    /// Panics if `hi < lo` on any axis.
    pub fn new(lo: IntVect, hi: IntVect) -> Self {
        for axis in 0..3 {
            assert!(
                hi[axis] >= lo[axis],
                "IndexBox hi ({}) below lo ({}) on axis {}",
                hi,
                lo,
                axis
            );
        }
        Self { lo, hi }
    }

    /// Box of `nx * ny * nz` points starting at the origin.
    pub fn from_size(nx: usize, ny: usize, nz: usize) -> Self {
        Self::new(
            IntVect::splat(0),
            IntVect::new(nx as i32 - 1, ny as i32 - 1, nz as i32 - 1),
        )
    }

    /// Number of points along an axis.
    #[inline]
    pub fn len(&self, axis: usize) -> usize {
        (self.hi[axis] - self.lo[axis] + 1) as usize
    }

    /// Total number of points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.len(0) * self.len(1) * self.len(2)
    }

    /// True if `p` lies inside the box.
    #[inline]
    pub fn contains(&self, p: IntVect) -> bool {
        (0..3).all(|axis| p[axis] >= self.lo[axis] && p[axis] <= self.hi[axis])
    }

    /// True if `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &IndexBox) -> bool {
        self.contains(other.lo) && self.contains(other.hi)
    }

    /// Grow by `n[axis]` points on both sides of every axis.
    pub fn grow(&self, n: [usize; 3]) -> Self {
        let d = IntVect::new(n[0] as i32, n[1] as i32, n[2] as i32);
        Self {
            lo: self.lo - d,
            hi: self.hi + d,
        }
    }

    /// Grow by `n` points in x and y only.
    pub fn grow_horizontal(&self, n: usize) -> Self {
        self.grow([n, n, 0])
    }

    /// Extend the high end of one axis by one point (cell → face/node box).
    pub fn surrounding_nodes(&self, axis: usize) -> Self {
        Self {
            lo: self.lo,
            hi: self.hi.shifted(axis, 1),
        }
    }

    /// Clamp a coordinate on one axis into the box.
    #[inline]
    pub fn clamp_axis(&self, axis: usize, value: i32) -> i32 {
        value.clamp(self.lo[axis], self.hi[axis])
    }

    /// Iterate over all points, i fastest.
    pub fn iter(&self) -> impl Iterator<Item = IntVect> + '_ {
        (self.lo.k..=self.hi.k).flat_map(move |k| {
            (self.lo.j..=self.hi.j)
                .flat_map(move |j| (self.lo.i..=self.hi.i).map(move |i| IntVect::new(i, j, k)))
        })
    }
}

impl fmt::Display for IndexBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.lo, self.hi)
    }
}
