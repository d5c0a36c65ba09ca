//! Problem-domain geometry for one refinement level.

use crate::error::ConfigError;
use crate::types::{Direction, Face, IndexBox, Staggering};

/// Problem domain of one refinement level.
///
/// Holds the domain's cell box, the horizontal periodicity and the grid
/// spacing. A face is *physical* when the domain is not periodic in the
/// face's normal direction; ghost cells on non-physical faces belong to
/// the periodic/AMR exchange, not to the boundary engine.
///
/// # Example
///
/// ```
/// use ocean_bc::mesh::Domain;
/// use ocean_bc::types::{Face, IndexBox};
///
/// let domain = Domain::new(IndexBox::from_size(64, 32, 8), [1000.0, 1000.0])
///     .unwrap()
///     .with_periodic_x(true);
///
/// assert!(!domain.is_physical_face(Face::West));
/// assert!(domain.is_physical_face(Face::North));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Domain {
    cells: IndexBox,
    periodic: [bool; 2],
    dx: [f64; 2],
}

impl Domain {
    /// Create a non-periodic domain.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if a grid spacing is not strictly positive and
    /// finite.
    pub fn new(cells: IndexBox, dx: [f64; 2]) -> Result<Self, ConfigError> {
        for (name, value) in [("dx", dx[0]), ("dy", dx[1])] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidParameter {
                    name,
                    value,
                    reason: "grid spacing must be positive",
                });
            }
        }
        Ok(Self {
            cells,
            periodic: [false, false],
            dx,
        })
    }

    /// Set periodicity in x.
    pub fn with_periodic_x(mut self, periodic: bool) -> Self {
        self.periodic[0] = periodic;
        self
    }

    /// Set periodicity in y.
    pub fn with_periodic_y(mut self, periodic: bool) -> Self {
        self.periodic[1] = periodic;
        self
    }

    /// Domain cell box.
    #[inline]
    pub fn cells(&self) -> IndexBox {
        self.cells
    }

    /// True if the domain is periodic in `dir`.
    #[inline]
    pub fn is_periodic(&self, dir: Direction) -> bool {
        self.periodic[dir.axis()]
    }

    /// Grid spacing in `dir`.
    #[inline]
    pub fn dx(&self, dir: Direction) -> f64 {
        self.dx[dir.axis()]
    }

    /// Inverse grid spacing in `dir`.
    #[inline]
    pub fn dx_inv(&self, dir: Direction) -> f64 {
        1.0 / self.dx[dir.axis()]
    }

    /// True if `face` is a physical (non-periodic) domain boundary.
    #[inline]
    pub fn is_physical_face(&self, face: Face) -> bool {
        !self.is_periodic(face.normal_direction())
    }

    /// Index of the outermost valid point of a variable with the given
    /// staggering on `face`.
    ///
    /// For cell-centered directions this is the first/last interior cell;
    /// for nodal directions it is the point lying on the domain edge.
    pub fn boundary_index(&self, staggering: Staggering, face: Face) -> i32 {
        let axis = face.normal_direction().axis();
        let b = staggering.box_from_cells(&self.cells);
        if face.is_low() { b.lo[axis] } else { b.hi[axis] }
    }

    /// True if a valid box of the given staggering reaches `face` of the
    /// domain, i.e. the box owns ghost cells outside the domain there.
    pub fn touches(&self, valid: &IndexBox, staggering: Staggering, face: Face) -> bool {
        let axis = face.normal_direction().axis();
        let edge = self.boundary_index(staggering, face);
        if face.is_low() {
            valid.lo[axis] <= edge
        } else {
            valid.hi[axis] >= edge
        }
    }
}
