//! Strongly-typed grid and boundary types.
//!
//! This module provides newtypes and structured types to make APIs
//! self-documenting and prevent parameter mix-ups.
//!
//! - **Named faces over positional arrays**: `SideBoundaries { south, east, north, west }`
//! - **Signed grid coordinates**: `IntVect` reaches into the ghost margin
//! - **Explicit staggering**: `Staggering::U` vs `Staggering::Rho` decides
//!   where the boundary sits relative to the samples
//!
//! # Example
//!
//! ```
//! use ocean_bc::types::{Face, IndexBox, Staggering};
//!
//! let cells = IndexBox::from_size(20, 10, 4);
//! let u_box = Staggering::U.box_from_cells(&cells);
//!
//! // u points include both the west and the east wall
//! assert_eq!(u_box.len(0), 21);
//! assert!(Face::West.is_low());
//! ```

mod index_box;
mod indices;
mod sides;
mod staggering;

pub use index_box::IndexBox;
pub use indices::{ComponentIndex, IntVect, LevelIndex};
pub use sides::{Direction, Face, SideBoundaries};
pub use staggering::Staggering;
