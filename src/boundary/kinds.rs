//! Boundary-condition kinds.
//!
//! Two enumerations describe a boundary: the *physical* kind a user
//! configures on a face ([`PhysicalBc`]), and the *mathematical* fill rule
//! applied to one variable on that face ([`BcType`]). The translation
//! between them depends on the variable's role (see
//! [`BcTable`](super::BcTable)).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical boundary kind of a domain face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalBc {
    /// Mirror symmetry plane
    Symmetry,
    /// Prescribed constant inflow (Dirichlet)
    Inflow,
    /// Free outflow (zero gradient)
    Outflow,
    /// Solid wall, zero tangential velocity
    NoSlipWall,
    /// Solid wall, free tangential velocity
    SlipWall,
    /// Periodic pair with the opposite face
    Periodic,
    /// Ghost values clamped to external reference data
    Clamped,
    /// Chapman radiation of free-surface elevation
    Chapman,
    /// Flather radiation of depth-averaged normal velocity
    Flather,
    /// Orlanski radiation
    OrlanskiRad,
    /// Orlanski radiation with nudging toward reference data
    OrlanskiRadNudge,
}

impl PhysicalBc {
    /// True for open-boundary kinds that consume reference data or
    /// radiate.
    pub fn is_open(self) -> bool {
        matches!(
            self,
            PhysicalBc::Clamped
                | PhysicalBc::Chapman
                | PhysicalBc::Flather
                | PhysicalBc::OrlanskiRad
                | PhysicalBc::OrlanskiRadNudge
        )
    }
}

impl fmt::Display for PhysicalBc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhysicalBc::Symmetry => "symmetry",
            PhysicalBc::Inflow => "inflow",
            PhysicalBc::Outflow => "outflow",
            PhysicalBc::NoSlipWall => "no_slip_wall",
            PhysicalBc::SlipWall => "slip_wall",
            PhysicalBc::Periodic => "periodic",
            PhysicalBc::Clamped => "clamped",
            PhysicalBc::Chapman => "chapman",
            PhysicalBc::Flather => "flather",
            PhysicalBc::OrlanskiRad => "orlanski_rad",
            PhysicalBc::OrlanskiRadNudge => "orlanski_rad_nudge",
        };
        f.write_str(name)
    }
}

/// Mathematical fill rule for one variable on one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BcType {
    /// Odd reflection: ghost = -mirror (a face-staggered boundary point is zeroed)
    ReflectOdd,
    /// Interior/periodic: filled by another subsystem, skipped here
    IntDir,
    /// Even reflection: ghost = +mirror
    ReflectEven,
    /// First-order extrapolation: ghost = adjacent interior value
    Foextrap,
    /// External Dirichlet: ghost = configured constant
    ExtDir,
    /// Ghost = reference value at the ghost location
    Clamped,
    /// Chapman implicit gravity-wave radiation
    Chapman,
    /// Flather transport/elevation radiation
    Flather,
    /// Orlanski radiation
    OrlanskiRad,
    /// Orlanski radiation with nudging
    OrlanskiRadNudge,
}

impl BcType {
    /// True for kinds that estimate an Orlanski phase speed.
    #[inline]
    pub fn is_orlanski(self) -> bool {
        matches!(self, BcType::OrlanskiRad | BcType::OrlanskiRadNudge)
    }

    /// True for kinds that read time history (previous state).
    #[inline]
    pub fn needs_previous(self) -> bool {
        self.is_orlanski() || self == BcType::Chapman
    }

    /// True for kinds that query the external reference provider.
    #[inline]
    pub fn needs_reference(self) -> bool {
        matches!(
            self,
            BcType::Clamped | BcType::Flather | BcType::OrlanskiRad | BcType::OrlanskiRadNudge
        )
    }

    /// True for kinds that need depth / free-surface data.
    #[inline]
    pub fn needs_barotropic(self) -> bool {
        matches!(self, BcType::Chapman | BcType::Flather)
    }
}

impl fmt::Display for BcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BcType::ReflectOdd => "reflect_odd",
            BcType::IntDir => "int_dir",
            BcType::ReflectEven => "reflect_even",
            BcType::Foextrap => "foextrap",
            BcType::ExtDir => "ext_dir",
            BcType::Clamped => "clamped",
            BcType::Chapman => "chapman",
            BcType::Flather => "flather",
            BcType::OrlanskiRad => "orlanski_rad",
            BcType::OrlanskiRadNudge => "orlanski_rad_nudge",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_kinds() {
        assert!(PhysicalBc::Flather.is_open());
        assert!(PhysicalBc::OrlanskiRadNudge.is_open());
        assert!(!PhysicalBc::NoSlipWall.is_open());
        assert!(!PhysicalBc::Periodic.is_open());
    }

    #[test]
    fn test_input_requirements() {
        assert!(BcType::OrlanskiRad.needs_previous());
        assert!(BcType::Chapman.needs_previous());
        assert!(!BcType::Clamped.needs_previous());
        assert!(BcType::Clamped.needs_reference());
        assert!(!BcType::Chapman.needs_reference());
        assert!(BcType::Flather.needs_barotropic());
        assert!(!BcType::Foextrap.needs_reference());
    }

    #[test]
    fn test_serde_names_match_display() {
        for kind in [BcType::ReflectOdd, BcType::OrlanskiRadNudge, BcType::ExtDir] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
        let bc: PhysicalBc = serde_json::from_str("\"no_slip_wall\"").unwrap();
        assert_eq!(bc, PhysicalBc::NoSlipWall);
    }
}
