//! Ghost-layer geometry of one physical face.
//!
//! Along the face-normal axis a variable is either cell-centered or nodal.
//! With `b` the outermost valid index on the face and `m = 1..=nghost`:
//!
//! | staggering    | ghost m | mirror of ghost m | first interior | boundary point |
//! |---------------|---------|-------------------|----------------|----------------|
//! | cell, low     | b - m   | b + m - 1         | b              | none           |
//! | cell, high    | b + m   | b - m + 1         | b              | none           |
//! | nodal, low    | b - m   | b + m             | b + 1          | b              |
//! | nodal, high   | b + m   | b - m             | b - 1          | b              |
//!
//! Cell-centered mirrors reflect about the face between `b` and the first
//! ghost, so an odd reflection gives zero at the face. Nodal mirrors
//! reflect about the point `b` itself, which lies on the domain edge.

use crate::mesh::Domain;
use crate::types::{Face, IntVect, Staggering};

/// Geometry of the ghost layer of one face for one staggering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceGeometry {
    face: Face,
    axis: usize,
    boundary: i32,
    nodal: bool,
}

impl FaceGeometry {
    /// Geometry of `face` for variables with the given staggering.
    pub fn new(domain: &Domain, staggering: Staggering, face: Face) -> Self {
        let axis = face.normal_direction().axis();
        Self {
            face,
            axis,
            boundary: domain.boundary_index(staggering, face),
            nodal: staggering.is_nodal(axis),
        }
    }

    /// Face this geometry belongs to.
    #[inline]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Face-normal axis (0 = x, 1 = y).
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// True if sample points sit on the domain edge along the normal.
    #[inline]
    pub fn is_nodal(&self) -> bool {
        self.nodal
    }

    /// Outermost valid index on the normal axis.
    #[inline]
    pub fn boundary(&self) -> i32 {
        self.boundary
    }

    /// Unit step pointing into the domain.
    #[inline]
    pub fn inward(&self) -> i32 {
        if self.face.is_low() { 1 } else { -1 }
    }

    /// Normal index of ghost layer `m` (1-based).
    #[inline]
    pub fn ghost(&self, m: usize) -> i32 {
        self.boundary - self.inward() * m as i32
    }

    /// Normal index of the interior point mirroring ghost layer `m`.
    #[inline]
    pub fn mirror(&self, m: usize) -> i32 {
        let m = m as i32;
        if self.nodal {
            self.boundary + self.inward() * m
        } else {
            self.boundary + self.inward() * (m - 1)
        }
    }

    /// Normal index of the `depth`-th interior point (0 = adjacent).
    ///
    /// For nodal staggering the boundary point is excluded.
    #[inline]
    pub fn interior(&self, depth: usize) -> i32 {
        let first = if self.nodal {
            self.boundary + self.inward()
        } else {
            self.boundary
        };
        first + self.inward() * depth as i32
    }

    /// Normal index of the point on the domain edge, nodal staggering only.
    #[inline]
    pub fn boundary_point(&self) -> Option<i32> {
        self.nodal.then_some(self.boundary)
    }

    /// Normal index of the interior rho cell adjacent to the face.
    #[inline]
    pub fn adjacent_cell(&self) -> i32 {
        if self.nodal && !self.face.is_low() {
            self.boundary - 1
        } else {
            self.boundary
        }
    }

    /// Point `p` with its normal coordinate replaced by `n`.
    #[inline]
    pub fn at(&self, p: IntVect, n: i32) -> IntVect {
        p.with_axis(self.axis, n)
    }
}
