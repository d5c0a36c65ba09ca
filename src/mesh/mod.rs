//! Grid representation.
//!
//! Provides the grid data structures the boundary engine operates on:
//! - Multi-component staggered fields with a ghost margin
//! - Problem-domain geometry and periodicity
//! - Land masking for water/land classification per staggering

mod domain;
mod field;
mod land_mask;

pub use domain::Domain;
pub use field::Field;
pub use land_mask::{LandMask, LandMaskStatistics};
