//! Error types for boundary filling and configuration.

use thiserror::Error;

use crate::boundary::{BcType, BcVar};
use crate::types::{Face, Staggering};

/// Precondition violations detected by [`BoundaryFiller::apply`] before any
/// ghost value is written.
///
/// These are programming or setup errors, not runtime conditions: callers
/// are expected to treat them as fatal.
///
/// [`BoundaryFiller::apply`]: crate::boundary::BoundaryFiller::apply
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BcError {
    /// Requested ghost width exceeds the field's allocated margin.
    #[error("requested ghost width {requested} exceeds allocated width {allocated}")]
    GhostWidthExceeded { requested: usize, allocated: usize },

    /// Component range does not fit in the field.
    #[error("components {start}..{end} out of range for field with {ncomp} components")]
    ComponentOutOfRange {
        start: usize,
        end: usize,
        ncomp: usize,
    },

    /// Component range runs past the end of the boundary-condition table.
    #[error("no boundary-condition table entry for row {row} (table has {len} rows)")]
    MissingTableEntry { row: usize, len: usize },

    /// A mask of the wrong staggering was supplied.
    #[error("{role} mask has staggering {actual}, expected {expected}")]
    MaskStaggering {
        role: &'static str,
        expected: Staggering,
        actual: Staggering,
    },

    /// A mask does not cover the region that is being filled.
    #[error("{role} mask does not cover the {nghost}-wide ghost region")]
    MaskCoverage { role: &'static str, nghost: usize },

    /// The field's staggering does not match the table row being applied.
    #[error("field staggering {actual} does not match {var} (expected {expected})")]
    FieldStaggering {
        var: BcVar,
        expected: Staggering,
        actual: Staggering,
    },

    /// A boundary kind needs an input that was not supplied.
    #[error("{kind} on {face} face of {var} requires {input}")]
    MissingInput {
        var: BcVar,
        face: Face,
        kind: BcType,
        input: &'static str,
    },

    /// Previous-time data has a different shape than the field being filled.
    #[error("previous state shape mismatch: {0}")]
    PreviousShape(String),

    /// Interior data adjacent to a physical boundary is not finite.
    #[error("non-finite interior value next to the {face} boundary of {var}")]
    NonFiniteInterior { var: BcVar, face: Face },
}

impl BcError {
    /// Create a missing-input error.
    pub fn missing(var: BcVar, face: Face, kind: BcType, input: &'static str) -> Self {
        Self::MissingInput {
            var,
            face,
            kind,
            input,
        }
    }
}

/// Errors raised while building a boundary-condition table from
/// configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Periodicity is not symmetric across a direction.
    #[error("{face} face is periodic but the opposite face is not")]
    UnpairedPeriodic { face: Face },

    /// A boundary kind is not meaningful for a variable on a face.
    #[error("{kind} is not supported for {var} on the {face} face")]
    UnsupportedCombination {
        var: BcVar,
        face: Face,
        kind: BcType,
    },

    /// A deserialized table does not have one entry per row.
    #[error("table {what} has {len} entries, expected {expected}")]
    TableShape {
        what: &'static str,
        len: usize,
        expected: usize,
    },

    /// A deserialized table lists its rows out of order.
    #[error("table row {index} is {found}, expected {expected}")]
    TableOrder {
        index: usize,
        found: BcVar,
        expected: BcVar,
    },

    /// Reference series without snapshots.
    #[error("reference series contains no snapshots")]
    EmptyReference,

    /// Reference snapshot times are not strictly increasing.
    #[error("non-monotonic reference time at snapshot {index}")]
    NonMonotonicReference { index: usize },

    /// Domain periodicity disagrees with the table's periodic faces.
    #[error("domain periodicity in {direction} does not match the boundary table")]
    PeriodicityMismatch { direction: &'static str },

    /// A radiation/nudging parameter is outside its admissible range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}
