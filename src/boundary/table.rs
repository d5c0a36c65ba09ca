//! The per-(variable, face) boundary-condition table.
//!
//! A [`BcTable`] holds one [`BcRecord`] per [`BcVar`] row. It is built once
//! at level setup by translating the physical kind of each face into a
//! mathematical fill rule per variable, optionally refined by per-variable
//! overrides, and is immutable afterwards.
//!
//! # Translation rules
//!
//! | Physical kind        | scalar          | normal velocity | tangential velocity |
//! |----------------------|-----------------|-----------------|---------------------|
//! | periodic             | int_dir         | int_dir         | int_dir             |
//! | symmetry             | reflect_even    | reflect_odd     | reflect_even        |
//! | outflow              | foextrap        | foextrap        | foextrap            |
//! | inflow               | ext_dir         | ext_dir         | ext_dir             |
//! | no_slip_wall         | foextrap        | reflect_odd     | reflect_odd         |
//! | slip_wall            | foextrap        | reflect_odd     | reflect_even        |
//! | clamped              | clamped         | clamped         | clamped             |
//! | chapman              | chapman (zeta)  | foextrap        | foextrap            |
//! | flather              | foextrap        | flather (2-D)   | foextrap            |
//! | orlanski_rad[_nudge] | orlanski        | orlanski        | foextrap            |
//!
//! Where an open kind has no meaning for a variable (e.g. Chapman for
//! temperature, or any reference-driven kind for a variable without
//! reference data) the variable falls back to `foextrap`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{BcType, PhysicalBc};
use crate::error::ConfigError;
use crate::types::{Direction, Face, SideBoundaries, Staggering};

/// Boundary-condition table row selector.
///
/// Rows `Temp`, `Salt` and `Scalar` are consecutive so that a request for
/// several tracer components starting at `Temp` walks them in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BcVar {
    /// Potential temperature
    Temp,
    /// Salinity
    Salt,
    /// Passive tracer
    Scalar,
    /// 3-D x velocity (u points)
    Xvel,
    /// 3-D y velocity (v points)
    Yvel,
    /// Vertical velocity (w points)
    Zvel,
    /// Depth-averaged x velocity
    Ubar,
    /// Depth-averaged y velocity
    Vbar,
    /// Free-surface elevation
    Zeta,
    /// Turbulent kinetic energy
    Tke,
    /// Zero-gradient on physical faces, periodic where the domain is periodic
    FoextrapPeriodic,
    /// Zero-gradient on every physical face
    Foextrap,
    /// Depth-averaged x velocity with simple (wall/extrapolation) treatment
    U2dSimple,
    /// Depth-averaged y velocity with simple (wall/extrapolation) treatment
    V2dSimple,
}

impl BcVar {
    /// Number of table rows.
    pub const COUNT: usize = 14;

    /// All rows in table order.
    pub const ALL: [BcVar; Self::COUNT] = [
        BcVar::Temp,
        BcVar::Salt,
        BcVar::Scalar,
        BcVar::Xvel,
        BcVar::Yvel,
        BcVar::Zvel,
        BcVar::Ubar,
        BcVar::Vbar,
        BcVar::Zeta,
        BcVar::Tke,
        BcVar::FoextrapPeriodic,
        BcVar::Foextrap,
        BcVar::U2dSimple,
        BcVar::V2dSimple,
    ];

    /// Row index in the table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row for an index, or `None` past the end of the table.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Staggering of fields filled with this row.
    pub fn staggering(self) -> Staggering {
        match self {
            BcVar::Xvel | BcVar::Ubar | BcVar::U2dSimple => Staggering::U,
            BcVar::Yvel | BcVar::Vbar | BcVar::V2dSimple => Staggering::V,
            BcVar::Zvel => Staggering::W,
            _ => Staggering::Rho,
        }
    }

    /// Horizontal direction of a velocity component, `None` for scalars
    /// and vertical velocity.
    pub fn vector_direction(self) -> Option<Direction> {
        match self {
            BcVar::Xvel | BcVar::Ubar | BcVar::U2dSimple => Some(Direction::X),
            BcVar::Yvel | BcVar::Vbar | BcVar::V2dSimple => Some(Direction::Y),
            _ => None,
        }
    }

    /// Role of this variable on a face.
    pub fn role(self, face: Face) -> VarRole {
        match self.vector_direction() {
            Some(dir) if dir == face.normal_direction() => VarRole::NormalVelocity,
            Some(_) => VarRole::TangentialVelocity,
            None if self == BcVar::Zvel => VarRole::TangentialVelocity,
            None => VarRole::Scalar,
        }
    }

    /// True for depth-averaged momentum rows.
    pub fn is_depth_averaged(self) -> bool {
        matches!(
            self,
            BcVar::Ubar | BcVar::Vbar | BcVar::U2dSimple | BcVar::V2dSimple
        )
    }

    /// Reference-data variable supplying clamped/nudging values, if any.
    pub fn bdy_var(self) -> Option<BdyVar> {
        match self {
            BcVar::Temp => Some(BdyVar::Temp),
            BcVar::Salt => Some(BdyVar::Salt),
            BcVar::Scalar => Some(BdyVar::Scalar),
            BcVar::Xvel => Some(BdyVar::U),
            BcVar::Yvel => Some(BdyVar::V),
            BcVar::Ubar | BcVar::U2dSimple => Some(BdyVar::Ubar),
            BcVar::Vbar | BcVar::V2dSimple => Some(BdyVar::Vbar),
            BcVar::Zeta => Some(BdyVar::Zeta),
            BcVar::Zvel | BcVar::Tke | BcVar::FoextrapPeriodic | BcVar::Foextrap => None,
        }
    }
}

impl fmt::Display for BcVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BcVar::Temp => "temp",
            BcVar::Salt => "salt",
            BcVar::Scalar => "scalar",
            BcVar::Xvel => "xvel",
            BcVar::Yvel => "yvel",
            BcVar::Zvel => "zvel",
            BcVar::Ubar => "ubar",
            BcVar::Vbar => "vbar",
            BcVar::Zeta => "zeta",
            BcVar::Tke => "tke",
            BcVar::FoextrapPeriodic => "foextrap_periodic",
            BcVar::Foextrap => "foextrap",
            BcVar::U2dSimple => "u2d_simple",
            BcVar::V2dSimple => "v2d_simple",
        };
        f.write_str(name)
    }
}

/// Variables available from external boundary/reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BdyVar {
    /// 3-D x velocity
    U,
    /// 3-D y velocity
    V,
    /// Temperature
    Temp,
    /// Salinity
    Salt,
    /// Passive tracer
    Scalar,
    /// Depth-averaged x velocity
    Ubar,
    /// Depth-averaged y velocity
    Vbar,
    /// Free-surface elevation
    Zeta,
}

impl fmt::Display for BdyVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BdyVar::U => "u",
            BdyVar::V => "v",
            BdyVar::Temp => "temp",
            BdyVar::Salt => "salt",
            BdyVar::Scalar => "scalar",
            BdyVar::Ubar => "ubar",
            BdyVar::Vbar => "vbar",
            BdyVar::Zeta => "zeta",
        };
        f.write_str(name)
    }
}

/// Semantic role of a variable on a face, selecting the imposition routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarRole {
    /// Conserved scalar (tracers, free surface, tke)
    Scalar,
    /// Velocity component crossing the face
    NormalVelocity,
    /// Velocity component parallel to the face
    TangentialVelocity,
}

/// Fill rules of one table row, one per face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BcRecord {
    /// Row this record belongs to
    pub var: BcVar,
    /// Fill rule per face
    pub types: SideBoundaries<BcType>,
}

impl BcRecord {
    /// Fill rule on a face.
    #[inline]
    pub fn kind(&self, face: Face) -> BcType {
        *self.types.face(face)
    }
}

/// Immutable boundary-condition table for one run.
///
/// # Example
///
/// ```
/// use ocean_bc::boundary::{BcTable, BcType, BcVar, PhysicalBc};
/// use ocean_bc::types::{Face, SideBoundaries};
///
/// let faces = SideBoundaries::new(
///     PhysicalBc::NoSlipWall,  // south
///     PhysicalBc::OrlanskiRad, // east
///     PhysicalBc::NoSlipWall,  // north
///     PhysicalBc::Clamped,     // west
/// );
/// let table = BcTable::from_physical(&faces).unwrap();
///
/// assert_eq!(table.kind(BcVar::Temp, Face::East), BcType::OrlanskiRad);
/// assert_eq!(table.kind(BcVar::Xvel, Face::South), BcType::ReflectOdd);
/// assert_eq!(table.kind(BcVar::Yvel, Face::East), BcType::Foextrap);
/// ```
///
/// Deserialized tables go through the same checks as
/// [`from_physical`](Self::from_physical) and
/// [`with_override`](Self::with_override).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBcTable")]
pub struct BcTable {
    physical: SideBoundaries<PhysicalBc>,
    records: Vec<BcRecord>,
    ext_dir: Vec<SideBoundaries<f64>>,
}

impl BcTable {
    /// Translate per-face physical kinds into a full table.
    pub fn from_physical(faces: &SideBoundaries<PhysicalBc>) -> Result<Self, ConfigError> {
        check_periodic_pairing(faces)?;

        let records = BcVar::ALL
            .iter()
            .map(|&var| {
                let mut types = SideBoundaries::uniform(BcType::Foextrap);
                for (face, &phys) in faces.iter() {
                    *types.face_mut(face) = translate(var, face, phys);
                }
                BcRecord { var, types }
            })
            .collect();

        Ok(Self {
            physical: *faces,
            records,
            ext_dir: vec![SideBoundaries::uniform(0.0); BcVar::COUNT],
        })
    }

    /// Replace the fill rule of one variable on one face.
    ///
    /// Fails if the rule is not meaningful for the variable's role on that
    /// face, or if it would break the periodic pairing.
    pub fn with_override(mut self, var: BcVar, face: Face, kind: BcType) -> Result<Self, ConfigError> {
        check_rule(&self.physical, var, face, kind)?;
        *self.records[var.index()].types.face_mut(face) = kind;
        Ok(self)
    }

    /// Set the constant used by `ext_dir` (inflow) for a variable on a face.
    pub fn with_ext_dir(mut self, var: BcVar, face: Face, value: f64) -> Self {
        *self.ext_dir[var.index()].face_mut(face) = value;
        self
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for a row index, or `None` past the end of the table.
    #[inline]
    pub fn get(&self, row: usize) -> Option<&BcRecord> {
        self.records.get(row)
    }

    /// Record of a variable.
    #[inline]
    pub fn record(&self, var: BcVar) -> &BcRecord {
        &self.records[var.index()]
    }

    /// Fill rule of a variable on a face.
    #[inline]
    pub fn kind(&self, var: BcVar, face: Face) -> BcType {
        self.records[var.index()].kind(face)
    }

    /// Dirichlet constant of a variable on a face.
    #[inline]
    pub fn ext_dir_value(&self, var: BcVar, face: Face) -> f64 {
        *self.ext_dir[var.index()].face(face)
    }

    /// Physical kind configured on a face.
    #[inline]
    pub fn physical(&self, face: Face) -> PhysicalBc {
        *self.physical.face(face)
    }

    /// True if the table pairs the faces of `dir` periodically.
    pub fn is_periodic(&self, dir: Direction) -> bool {
        let face = match dir {
            Direction::X => Face::West,
            Direction::Y => Face::South,
        };
        self.physical(face) == PhysicalBc::Periodic
    }
}

/// Serialized form of [`BcTable`], validated on conversion.
#[derive(Deserialize)]
struct RawBcTable {
    physical: SideBoundaries<PhysicalBc>,
    records: Vec<BcRecord>,
    ext_dir: Vec<SideBoundaries<f64>>,
}

impl TryFrom<RawBcTable> for BcTable {
    type Error = ConfigError;

    fn try_from(raw: RawBcTable) -> Result<Self, Self::Error> {
        for (what, len) in [("records", raw.records.len()), ("ext_dir", raw.ext_dir.len())] {
            if len != BcVar::COUNT {
                return Err(ConfigError::TableShape {
                    what,
                    len,
                    expected: BcVar::COUNT,
                });
            }
        }
        check_periodic_pairing(&raw.physical)?;

        for (index, (record, &expected)) in raw.records.iter().zip(BcVar::ALL.iter()).enumerate() {
            if record.var != expected {
                return Err(ConfigError::TableOrder {
                    index,
                    found: record.var,
                    expected,
                });
            }
            for (face, &kind) in record.types.iter() {
                check_rule(&raw.physical, record.var, face, kind)?;
            }
        }

        for values in &raw.ext_dir {
            if let Some((_, &value)) = values.iter().find(|(_, v)| !v.is_finite()) {
                return Err(ConfigError::InvalidParameter {
                    name: "ext_dir",
                    value,
                    reason: "must be finite",
                });
            }
        }

        Ok(Self {
            physical: raw.physical,
            records: raw.records,
            ext_dir: raw.ext_dir,
        })
    }
}

/// Periodic faces must come in opposite pairs.
fn check_periodic_pairing(faces: &SideBoundaries<PhysicalBc>) -> Result<(), ConfigError> {
    for (a, b) in [(Face::West, Face::East), (Face::South, Face::North)] {
        let pa = *faces.face(a) == PhysicalBc::Periodic;
        let pb = *faces.face(b) == PhysicalBc::Periodic;
        if pa != pb {
            return Err(ConfigError::UnpairedPeriodic {
                face: if pa { a } else { b },
            });
        }
    }
    Ok(())
}

/// `int_dir` exactly on periodic faces, and only rules meaningful for the
/// variable's role elsewhere.
fn check_rule(
    physical: &SideBoundaries<PhysicalBc>,
    var: BcVar,
    face: Face,
    kind: BcType,
) -> Result<(), ConfigError> {
    let periodic = *physical.face(face) == PhysicalBc::Periodic;
    if periodic != (kind == BcType::IntDir) || !is_supported(var, face, kind) {
        return Err(ConfigError::UnsupportedCombination { var, face, kind });
    }
    Ok(())
}

/// Default fill rule for a variable on a face of the given physical kind.
fn translate(var: BcVar, face: Face, phys: PhysicalBc) -> BcType {
    let role = var.role(face);
    let kind = match (var, phys) {
        (_, PhysicalBc::Periodic) => BcType::IntDir,
        (BcVar::Foextrap | BcVar::FoextrapPeriodic, _) => BcType::Foextrap,
        (_, PhysicalBc::Symmetry) => match role {
            VarRole::NormalVelocity => BcType::ReflectOdd,
            _ => BcType::ReflectEven,
        },
        (_, PhysicalBc::Outflow) => BcType::Foextrap,
        (_, PhysicalBc::Inflow) => BcType::ExtDir,
        (_, PhysicalBc::NoSlipWall) => match role {
            VarRole::Scalar => BcType::Foextrap,
            _ => BcType::ReflectOdd,
        },
        (_, PhysicalBc::SlipWall) => match role {
            VarRole::Scalar => BcType::Foextrap,
            VarRole::NormalVelocity => BcType::ReflectOdd,
            VarRole::TangentialVelocity => BcType::ReflectEven,
        },
        (_, PhysicalBc::Clamped) => BcType::Clamped,
        (_, PhysicalBc::Chapman) => BcType::Chapman,
        (_, PhysicalBc::Flather) => BcType::Flather,
        (_, PhysicalBc::OrlanskiRad) => BcType::OrlanskiRad,
        (_, PhysicalBc::OrlanskiRadNudge) => BcType::OrlanskiRadNudge,
    };

    if is_supported(var, face, kind) {
        kind
    } else {
        if var.role(face) == VarRole::Scalar && phys.is_open() && var.bdy_var().is_none() {
            warn!(%var, %face, %phys, "no reference data for variable, using foextrap");
        }
        BcType::Foextrap
    }
}

/// True if `kind` is meaningful for `var` on `face`.
pub(crate) fn is_supported(var: BcVar, face: Face, kind: BcType) -> bool {
    let role = var.role(face);
    match kind {
        BcType::IntDir
        | BcType::ReflectOdd
        | BcType::ReflectEven
        | BcType::Foextrap
        | BcType::ExtDir => true,
        BcType::Clamped => var.bdy_var().is_some(),
        BcType::Chapman => var == BcVar::Zeta,
        BcType::Flather => role == VarRole::NormalVelocity && var.is_depth_averaged(),
        BcType::OrlanskiRad | BcType::OrlanskiRadNudge => {
            role != VarRole::TangentialVelocity && var.bdy_var().is_some()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_east() -> SideBoundaries<PhysicalBc> {
        SideBoundaries::new(
            PhysicalBc::NoSlipWall,
            PhysicalBc::OrlanskiRadNudge,
            PhysicalBc::SlipWall,
            PhysicalBc::Clamped,
        )
    }

    #[test]
    fn test_row_indices_round_trip() {
        for (i, var) in BcVar::ALL.iter().enumerate() {
            assert_eq!(var.index(), i);
            assert_eq!(BcVar::from_index(i), Some(*var));
        }
        assert_eq!(BcVar::from_index(BcVar::COUNT), None);
        assert_eq!(BcVar::Salt.index(), BcVar::Temp.index() + 1);
    }

    #[test]
    fn test_roles() {
        assert_eq!(BcVar::Temp.role(Face::West), VarRole::Scalar);
        assert_eq!(BcVar::Xvel.role(Face::West), VarRole::NormalVelocity);
        assert_eq!(BcVar::Xvel.role(Face::North), VarRole::TangentialVelocity);
        assert_eq!(BcVar::Vbar.role(Face::South), VarRole::NormalVelocity);
        assert_eq!(BcVar::Zvel.role(Face::East), VarRole::TangentialVelocity);
    }

    #[test]
    fn test_wall_translation() {
        let table = BcTable::from_physical(&open_east()).unwrap();
        // No-slip south wall
        assert_eq!(table.kind(BcVar::Temp, Face::South), BcType::Foextrap);
        assert_eq!(table.kind(BcVar::Yvel, Face::South), BcType::ReflectOdd);
        assert_eq!(table.kind(BcVar::Xvel, Face::South), BcType::ReflectOdd);
        // Slip north wall keeps tangential velocity
        assert_eq!(table.kind(BcVar::Xvel, Face::North), BcType::ReflectEven);
        assert_eq!(table.kind(BcVar::Yvel, Face::North), BcType::ReflectOdd);
    }

    #[test]
    fn test_open_translation_falls_back() {
        let table = BcTable::from_physical(&open_east()).unwrap();
        assert_eq!(table.kind(BcVar::Salt, Face::East), BcType::OrlanskiRadNudge);
        assert_eq!(table.kind(BcVar::Xvel, Face::East), BcType::OrlanskiRadNudge);
        // Tangential and reference-less rows extrapolate
        assert_eq!(table.kind(BcVar::Yvel, Face::East), BcType::Foextrap);
        assert_eq!(table.kind(BcVar::Tke, Face::East), BcType::Foextrap);
        assert_eq!(table.kind(BcVar::Zvel, Face::West), BcType::Foextrap);
        assert_eq!(table.kind(BcVar::Temp, Face::West), BcType::Clamped);
    }

    #[test]
    fn test_chapman_flather_only_where_meaningful() {
        let faces = SideBoundaries::new(
            PhysicalBc::Chapman,
            PhysicalBc::Flather,
            PhysicalBc::Chapman,
            PhysicalBc::Flather,
        );
        let table = BcTable::from_physical(&faces).unwrap();
        assert_eq!(table.kind(BcVar::Zeta, Face::South), BcType::Chapman);
        assert_eq!(table.kind(BcVar::Temp, Face::South), BcType::Foextrap);
        assert_eq!(table.kind(BcVar::Ubar, Face::East), BcType::Flather);
        assert_eq!(table.kind(BcVar::Xvel, Face::East), BcType::Foextrap);
        assert_eq!(table.kind(BcVar::Vbar, Face::East), BcType::Foextrap);
    }

    #[test]
    fn test_periodic_pairing() {
        let faces = SideBoundaries::new(
            PhysicalBc::Periodic,
            PhysicalBc::Outflow,
            PhysicalBc::Periodic,
            PhysicalBc::Outflow,
        );
        let table = BcTable::from_physical(&faces).unwrap();
        assert!(table.is_periodic(Direction::Y));
        assert!(!table.is_periodic(Direction::X));
        assert_eq!(table.kind(BcVar::Temp, Face::North), BcType::IntDir);

        let unpaired = SideBoundaries::new(
            PhysicalBc::Periodic,
            PhysicalBc::Outflow,
            PhysicalBc::Outflow,
            PhysicalBc::Outflow,
        );
        assert!(matches!(
            BcTable::from_physical(&unpaired),
            Err(ConfigError::UnpairedPeriodic { face: Face::South })
        ));
    }

    #[test]
    fn test_override_validation() {
        let table = BcTable::from_physical(&open_east()).unwrap();
        let table = table
            .with_override(BcVar::Temp, Face::East, BcType::Clamped)
            .unwrap();
        assert_eq!(table.kind(BcVar::Temp, Face::East), BcType::Clamped);

        let err = table
            .clone()
            .with_override(BcVar::Yvel, Face::East, BcType::OrlanskiRad)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedCombination { .. }));

        let err = table
            .with_override(BcVar::Temp, Face::East, BcType::IntDir)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedCombination { .. }));
    }

    #[test]
    fn test_ext_dir_values() {
        let faces = SideBoundaries::uniform(PhysicalBc::Inflow);
        let table = BcTable::from_physical(&faces)
            .unwrap()
            .with_ext_dir(BcVar::Xvel, Face::West, 0.25);
        assert_eq!(table.kind(BcVar::Xvel, Face::West), BcType::ExtDir);
        assert_eq!(table.ext_dir_value(BcVar::Xvel, Face::West), 0.25);
        assert_eq!(table.ext_dir_value(BcVar::Xvel, Face::East), 0.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let table = BcTable::from_physical(&open_east())
            .unwrap()
            .with_ext_dir(BcVar::Salt, Face::West, 35.0);
        let json = serde_json::to_string(&table).unwrap();
        let back: BcTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_deserialize_rejects_unsupported_rule() {
        let table = BcTable::from_physical(&open_east()).unwrap();
        let mut json = serde_json::to_value(&table).unwrap();
        json["records"][0]["types"]["east"] = serde_json::json!("flather");

        let err = serde_json::from_value::<BcTable>(json).unwrap_err();
        assert!(err.to_string().contains("flather is not supported for temp"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let table = BcTable::from_physical(&open_east()).unwrap();

        let mut json = serde_json::to_value(&table).unwrap();
        json["ext_dir"] = serde_json::json!([]);
        let err = serde_json::from_value::<BcTable>(json).unwrap_err();
        assert!(err.to_string().contains("ext_dir"), "{}", err);

        let mut json = serde_json::to_value(&table).unwrap();
        json["records"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<BcTable>(json).is_err());

        let mut json = serde_json::to_value(&table).unwrap();
        json["records"].as_array_mut().unwrap().swap(0, 1);
        let err = serde_json::from_value::<BcTable>(json).unwrap_err();
        assert!(err.to_string().contains("row 0"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_unpaired_periodic() {
        let faces = SideBoundaries::new(
            PhysicalBc::Periodic,
            PhysicalBc::Outflow,
            PhysicalBc::Periodic,
            PhysicalBc::Outflow,
        );
        let table = BcTable::from_physical(&faces).unwrap();
        let mut json = serde_json::to_value(&table).unwrap();
        json["physical"]["north"] = serde_json::json!("outflow");
        assert!(serde_json::from_value::<BcTable>(json).is_err());
    }
}
