//! Physical boundary conditions on a staggered grid.
//!
//! Ghost cells outside the problem domain are filled per variable and per
//! face according to a [`BcTable`], built once from the physical kind of
//! each face.
//!
//! # Available Boundary Kinds
//!
//! | Kind | Scalars | Normal velocity | Tangential velocity |
//! |------|---------|-----------------|---------------------|
//! | `reflect_even` | ghost = mirror | ghost = mirror | ghost = mirror |
//! | `reflect_odd` | ghost = -mirror | edge = 0, ghost = -mirror | ghost = -mirror |
//! | `foextrap` | ghost = edge cell | ghost = edge point | ghost = edge cell |
//! | `ext_dir` | ghost = constant | edge, ghost = constant | ghost = constant |
//! | `clamped` | ghost = reference | edge, ghost = reference | ghost = reference |
//! | `chapman` | free surface only | - | - |
//! | `flather` | - | depth-averaged only | - |
//! | `orlanski_rad[_nudge]` | first ghost radiated | edge radiated | - |
//!
//! Every written value is masked: land points receive
//! [`OpenBoundaryParams::land_value`].
//!
//! # Staggering
//!
//! | Variable | West/East | South/North |
//! |----------|-----------|-------------|
//! | temp, salt, scalar, zeta, tke | scalar | scalar |
//! | xvel, ubar, u2d_simple | normal | tangential |
//! | yvel, vbar, v2d_simple | tangential | normal |
//! | zvel | tangential | tangential |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ocean_bc::boundary::{
//!     BcTable, BcVar, BdyVar, BoundaryFiller, ConstantReference, FillRequest,
//!     OpenBoundaryParams, PhysicalBc,
//! };
//! use ocean_bc::mesh::{Domain, Field, LandMask};
//! use ocean_bc::types::{IndexBox, IntVect, LevelIndex, SideBoundaries, Staggering};
//!
//! let cells = IndexBox::from_size(20, 10, 3);
//! let domain = Domain::new(cells, [1000.0, 1000.0]).unwrap();
//! let faces = SideBoundaries::new(
//!     PhysicalBc::NoSlipWall, // south
//!     PhysicalBc::Clamped,    // east
//!     PhysicalBc::NoSlipWall, // north
//!     PhysicalBc::Outflow,    // west
//! );
//! let table = Arc::new(BcTable::from_physical(&faces).unwrap());
//! let filler = BoundaryFiller::new(
//!     LevelIndex::ZERO,
//!     domain,
//!     table,
//!     OpenBoundaryParams::default(),
//! )
//! .unwrap();
//!
//! let mut temp = Field::from_fn(&cells, [2, 2, 0], 1, Staggering::Rho, |_, _| 15.0);
//! let mask = LandMask::all_wet(&cells, 2, Staggering::Rho);
//! let reference = ConstantReference::new().with(BdyVar::Temp, 12.0);
//!
//! let request = FillRequest::new(BcVar::Temp, &mask)
//!     .nghost(2)
//!     .reference(&reference);
//! filler.apply(&mut temp, &request).expect("boundary configuration");
//!
//! assert_eq!(temp.get(IntVect::new(21, 4, 0), 0), 12.0);
//! assert_eq!(temp.get(IntVect::new(-1, 4, 0), 0), 15.0);
//! ```

mod chapman;
mod engine;
mod kinds;
mod launch;
mod normal_velocity;
mod radiation;
mod reference;
mod reflective;
mod scalar;
mod table;
mod tangential_velocity;

pub use chapman::{ChapmanRadiation, FlatherRadiation};
pub use engine::{Barotropic, BoundaryFiller, FillRequest, NullFill, PhysBcFill};
pub use kinds::{BcType, PhysicalBc};
pub use radiation::{
    OpenBoundaryParams, OrlanskiRadiation, RadiationBranch, RadiationInput, RadiationOutcome,
};
pub use reference::{
    BoundaryReference, ConstantReference, FnReference, InterpolatedReference, SnapshotReference,
};
pub use reflective::FaceGeometry;
pub use table::{BcRecord, BcTable, BcVar, BdyVar, VarRole};
