//! Variable staggering on the Arakawa C-grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::IndexBox;

/// Location of a variable's sample points relative to the cell grid.
///
/// | Staggering | Points        | Nodal in |
/// |------------|---------------|----------|
/// | `Rho`      | cell centers  | -        |
/// | `U`        | x-faces       | x        |
/// | `V`        | y-faces       | y        |
/// | `Psi`      | cell corners  | x, y     |
/// | `W`        | z-faces       | z        |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Staggering {
    /// Cell-centered (tracers, free surface)
    Rho,
    /// x-face centered (x velocity)
    U,
    /// y-face centered (y velocity)
    V,
    /// Cell corner (vorticity)
    Psi,
    /// z-face centered (vertical velocity)
    W,
}

impl Staggering {
    /// True if points sit on cell faces/nodes along `axis` (0=x, 1=y, 2=z).
    #[inline]
    pub const fn is_nodal(self, axis: usize) -> bool {
        matches!(
            (self, axis),
            (Staggering::U, 0)
                | (Staggering::V, 1)
                | (Staggering::Psi, 0)
                | (Staggering::Psi, 1)
                | (Staggering::W, 2)
        )
    }

    /// Convert a cell-centered box to this staggering's index box.
    pub fn box_from_cells(self, cells: &IndexBox) -> IndexBox {
        let mut b = *cells;
        for axis in 0..3 {
            if self.is_nodal(axis) {
                b = b.surrounding_nodes(axis);
            }
        }
        b
    }
}

impl fmt::Display for Staggering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Staggering::Rho => "rho",
            Staggering::U => "u",
            Staggering::V => "v",
            Staggering::Psi => "psi",
            Staggering::W => "w",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodal_axes() {
        assert!(!Staggering::Rho.is_nodal(0));
        assert!(Staggering::U.is_nodal(0));
        assert!(!Staggering::U.is_nodal(1));
        assert!(Staggering::V.is_nodal(1));
        assert!(Staggering::Psi.is_nodal(0) && Staggering::Psi.is_nodal(1));
        assert!(Staggering::W.is_nodal(2) && !Staggering::W.is_nodal(0));
    }

    #[test]
    fn test_box_from_cells() {
        let cells = IndexBox::from_size(8, 6, 3);
        let u = Staggering::U.box_from_cells(&cells);
        assert_eq!(u.len(0), 9);
        assert_eq!(u.len(1), 6);
        let psi = Staggering::Psi.box_from_cells(&cells);
        assert_eq!((psi.len(0), psi.len(1), psi.len(2)), (9, 7, 3));
        let w = Staggering::W.box_from_cells(&cells);
        assert_eq!(w.len(2), 4);
    }
}
