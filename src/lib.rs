//! # ocean-bc
//!
//! Physical boundary conditions for a staggered-grid (Arakawa C) ocean
//! model.
//!
//! This crate fills the ghost cells of grid fields on the physical faces
//! of the problem domain:
//! - Wall, symmetry, inflow and outflow conditions
//! - Clamped conditions driven by external reference data
//! - Open-boundary radiation (Orlanski, with optional nudging)
//! - Barotropic radiation (Chapman for free surface, Flather for transport)
//! - Land masking of every written ghost value
//!
//! Halo exchange between blocks, periodic wrapping and coarse/fine
//! interpolation are the caller's responsibility.

pub mod boundary;
pub mod config;
pub mod error;
pub mod mesh;
pub mod types;

// Re-export main types for convenience
pub use boundary::{
    Barotropic, BcTable, BcType, BcVar, BdyVar, BoundaryFiller, BoundaryReference,
    ConstantReference, FillRequest, InterpolatedReference, NullFill, OpenBoundaryParams,
    PhysBcFill, PhysicalBc,
};
pub use config::BoundaryConfig;
pub use error::{BcError, ConfigError};
pub use mesh::{Domain, Field, LandMask};
pub use types::{Face, IndexBox, IntVect, LevelIndex, SideBoundaries, Staggering};
